//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent business logic violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("template '{}' not found (available: {})", .name, .available.join(", "))]
    TemplateNotFound {
        name: String,
        available: Vec<String>,
    },
}
