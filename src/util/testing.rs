//! Test support: logging setup and mock I/O boundary implementations
//!
//! The mocks implement the infrastructure traits with scripted behavior so
//! integration tests can assert on what would have been executed without
//! touching real processes or stdin.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, Once};

use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::infrastructure::traits::{FileSystem, ProcessRunner, Prompter};

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "debug");
        }
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::ENTER)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// One recorded subprocess invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

/// Mock process runner: records every call and returns scripted exit codes.
#[derive(Debug, Default)]
pub struct MockProcessRunner {
    calls: Mutex<Vec<RecordedCall>>,
    /// Exit codes returned call-by-call, in order; exhausted entries succeed.
    exit_codes: Mutex<VecDeque<i32>>,
}

impl MockProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner returning the given exit codes call-by-call; later calls exit 0.
    pub fn with_exit_codes(codes: &[i32]) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            exit_codes: Mutex::new(codes.iter().copied().collect()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl ProcessRunner for MockProcessRunner {
    fn run_streaming(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> io::Result<i32> {
        self.calls.lock().unwrap().push(RecordedCall {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cwd: cwd.map(|d| d.to_path_buf()),
        });
        Ok(self.exit_codes.lock().unwrap().pop_front().unwrap_or(0))
    }
}

/// Mock prompter: answers prompts from a scripted queue ("" once exhausted).
#[derive(Debug, Default)]
pub struct MockPrompter {
    responses: Mutex<VecDeque<String>>,
}

impl MockPrompter {
    pub fn with_responses(responses: &[&str]) -> Self {
        Self {
            responses: Mutex::new(responses.iter().map(|r| r.to_string()).collect()),
        }
    }
}

impl Prompter for MockPrompter {
    fn read_line(&self, _prompt: &str) -> io::Result<String> {
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_default())
    }
}

/// In-memory filesystem mock: captures writes and created directories.
#[derive(Debug, Default)]
pub struct MockFileSystem {
    files: Mutex<BTreeMap<PathBuf, String>>,
    dirs: Mutex<BTreeSet<PathBuf>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_content(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub fn written_paths(&self) -> Vec<PathBuf> {
        self.files.lock().unwrap().keys().cloned().collect()
    }

    pub fn created_dirs(&self) -> Vec<PathBuf> {
        self.dirs.lock().unwrap().iter().cloned().collect()
    }
}

impl FileSystem for MockFileSystem {
    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
            || self.dirs.lock().unwrap().contains(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.dirs.lock().unwrap().insert(path.to_path_buf());
        Ok(())
    }

    fn ensure_parent(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                self.create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}
