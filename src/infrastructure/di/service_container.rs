//! Service container for dependency injection
//!
//! Wires up the I/O boundary implementations and holds the in-memory
//! configuration. Command handlers construct services from these parts,
//! so there is no global mutable state anywhere.

use std::sync::Arc;

use crate::config::Config;
use crate::infrastructure::traits::{
    FileSystem, ProcessRunner, Prompter, RealFileSystem, StdinPrompter, StreamingProcessRunner,
};

/// Container holding the configuration and I/O boundary implementations.
pub struct ServiceContainer {
    /// In-memory configuration for this invocation
    pub config: Config,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Process runner abstraction
    pub runner: Arc<dyn ProcessRunner>,

    /// Interactive prompt abstraction
    pub prompter: Arc<dyn Prompter>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(config: Config) -> Self {
        Self::with_deps(
            config,
            Arc::new(RealFileSystem),
            Arc::new(StreamingProcessRunner),
            Arc::new(StdinPrompter),
        )
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        config: Config,
        fs: Arc<dyn FileSystem>,
        runner: Arc<dyn ProcessRunner>,
        prompter: Arc<dyn Prompter>,
    ) -> Self {
        Self {
            config,
            fs,
            runner,
            prompter,
        }
    }
}
