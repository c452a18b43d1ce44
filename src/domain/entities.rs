//! Domain entities: core data structures

use std::fmt;

/// Language a pipeline template targets.
///
/// Closed enumeration: the catalog only constructs the first three variants.
/// `Unspecified` exists so library callers can build templates for languages
/// the generator has no setup action for; the renderer emits an empty setup
/// body for it (see [`crate::domain::render`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Javascript,
    Go,
    Python,
    Unspecified,
}

impl Language {
    /// Lowercase language tag as it appears in the generated workflow.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Javascript => "javascript",
            Language::Go => "go",
            Language::Python => "python",
            Language::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A CI/CD pipeline template: display name, target language, and ordered
/// build/test/deploy step lists.
///
/// Immutable once constructed; the renderer consumes it read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineTemplate {
    /// Display name used in the workflow title (e.g., "Node.js")
    pub name: String,
    /// Target language, selects the setup action
    pub language: Language,
    /// Commands run in the Build step, in order
    pub build_steps: Vec<String>,
    /// Commands run in the Test step, in order
    pub test_steps: Vec<String>,
    /// Commands run in the Deploy step (main branch only), in order
    pub deploy_steps: Vec<String>,
}

impl PipelineTemplate {
    pub fn new(
        name: impl Into<String>,
        language: Language,
        build_steps: &[&str],
        test_steps: &[&str],
        deploy_steps: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            language,
            build_steps: build_steps.iter().map(|s| s.to_string()).collect(),
            test_steps: test_steps.iter().map(|s| s.to_string()).collect(),
            deploy_steps: deploy_steps.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Expand environment variables in a path string.
///
/// Supports:
/// - `$VAR` syntax
/// - `${VAR}` syntax
/// - `~` for home directory
///
/// Uses shellexpand crate for robust expansion.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
