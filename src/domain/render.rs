//! Pipeline template renderer
//!
//! Renders a [`PipelineTemplate`] into GitHub Actions workflow YAML.
//! Pure function of its input: no I/O, deterministic, byte-identical output
//! for identical templates. Writing the result to disk is the caller's job.

use std::fmt::Write;

use crate::domain::entities::{Language, PipelineTemplate};

/// Condition guarding the Deploy step in the emitted YAML. The renderer
/// never evaluates it; the CI system does.
const DEPLOY_GUARD: &str = "github.ref == 'refs/heads/main'";

/// Render a template into workflow YAML.
///
/// The workflow triggers on pushes to `main`/`develop` and pull requests to
/// `main`, runs a single `build-and-test` job, and contains exactly one
/// `Setup <language>` step. A template with [`Language::Unspecified`] gets a
/// setup step with no body; callers are expected to warn about that.
pub fn render(template: &PipelineTemplate) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "name: {} CI/CD", template.name);
    out.push('\n');
    out.push_str("on:\n");
    out.push_str("  push:\n");
    out.push_str("    branches: [ main, develop ]\n");
    out.push_str("  pull_request:\n");
    out.push_str("    branches: [ main ]\n");
    out.push('\n');
    out.push_str("jobs:\n");
    out.push_str("  build-and-test:\n");
    out.push_str("    runs-on: ubuntu-latest\n");
    out.push('\n');
    out.push_str("    steps:\n");
    out.push_str("    - uses: actions/checkout@v3\n");
    out.push('\n');

    push_setup_step(&mut out, template.language);
    push_run_step(&mut out, "Build", None, &template.build_steps);
    push_run_step(&mut out, "Test", None, &template.test_steps);
    push_run_step(&mut out, "Deploy", Some(DEPLOY_GUARD), &template.deploy_steps);

    // Drop the separator after the last step
    out.truncate(out.trim_end_matches('\n').len());
    out.push('\n');
    out
}

/// Emit the `Setup <language>` step. One fixed body per known language;
/// `Unspecified` yields a name-only step.
fn push_setup_step(out: &mut String, language: Language) {
    let _ = writeln!(out, "    - name: Setup {}", language);
    match language {
        Language::Javascript => {
            out.push_str("      uses: actions/setup-node@v3\n");
            out.push_str("      with:\n");
            out.push_str("        node-version: '18'\n");
        }
        Language::Go => {
            out.push_str("      uses: actions/setup-go@v3\n");
            out.push_str("      with:\n");
            out.push_str("        go-version: '1.19'\n");
        }
        Language::Python => {
            out.push_str("      uses: actions/setup-python@v3\n");
            out.push_str("      with:\n");
            out.push_str("        python-version: '3.9'\n");
        }
        Language::Unspecified => {}
    }
    out.push('\n');
}

/// Emit a named step with a literal-block `run:` body, one line per command.
/// An empty command list renders an empty run block.
fn push_run_step(out: &mut String, name: &str, condition: Option<&str>, commands: &[String]) {
    let _ = writeln!(out, "    - name: {}", name);
    if let Some(condition) = condition {
        let _ = writeln!(out, "      if: {}", condition);
    }
    out.push_str("      run: |\n");
    for command in commands {
        let _ = writeln!(out, "        {}", command);
    }
    out.push('\n');
}
