//! Built-in pipeline template catalog
//!
//! A fixed registration table: three templates, constructed on demand.
//! No dynamic registration, no persistence.

use crate::domain::entities::{Language, PipelineTemplate};

/// Catalog keys, sorted. Listing order follows this table.
const KEYS: [&str; 3] = ["go", "node", "python"];

/// Look up a built-in template by its short identifier.
pub fn lookup(name: &str) -> Option<PipelineTemplate> {
    match name {
        "node" => Some(PipelineTemplate::new(
            "Node.js",
            Language::Javascript,
            &["npm ci", "npm run build"],
            &["npm test", "npm run lint"],
            &["npm run deploy"],
        )),
        "go" => Some(PipelineTemplate::new(
            "Go",
            Language::Go,
            &["go mod download", "go build -v ./..."],
            &["go test -v ./...", "go vet ./..."],
            &["go build -o app"],
        )),
        "python" => Some(PipelineTemplate::new(
            "Python",
            Language::Python,
            &["pip install -r requirements.txt"],
            &["pytest", "flake8 ."],
            &["python setup.py sdist bdist_wheel"],
        )),
        _ => None,
    }
}

/// All catalog entries as `(key, template)` pairs, in key order.
pub fn all() -> Vec<(&'static str, PipelineTemplate)> {
    KEYS.iter()
        .map(|key| (*key, lookup(key).expect("catalog key must resolve")))
        .collect()
}

/// The available template keys, in listing order.
pub fn keys() -> Vec<String> {
    KEYS.iter().map(|k| k.to_string()).collect()
}
