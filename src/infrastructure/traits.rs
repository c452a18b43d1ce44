//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::io;
use std::io::{BufRead, Write};
use std::path::Path;
use std::process::{Command, Stdio};

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Write string content to file.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a file.
    fn is_file(&self, path: &Path) -> bool;

    /// Create directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Create parent directories if needed.
    fn ensure_parent(&self, path: &Path) -> io::Result<()>;
}

/// External process runner abstraction.
///
/// The child inherits the parent's stdin/stdout/stderr: output streams
/// through live, nothing is captured, and the call blocks until the child
/// exits. Returns the child's exit code (`-1` if terminated by a signal).
pub trait ProcessRunner: Send + Sync {
    fn run_streaming(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> io::Result<i32>;
}

/// Interactive stdin prompt abstraction.
pub trait Prompter: Send + Sync {
    /// Print `prompt`, then read one line from stdin. Returns the trimmed
    /// line; EOF yields an empty string.
    fn read_line(&self, prompt: &str) -> io::Result<String>;

    /// Ask a yes/no question. Only `yes` or `y` (case-insensitive) proceed;
    /// anything else declines.
    fn confirm(&self, question: &str) -> io::Result<bool> {
        let answer = self.read_line(question)?;
        let answer = answer.trim().to_lowercase();
        Ok(answer == "yes" || answer == "y")
    }
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
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

/// Real process runner: spawns with inherited stdio and waits.
#[derive(Debug, Default)]
pub struct StreamingProcessRunner;

impl ProcessRunner for StreamingProcessRunner {
    fn run_streaming(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> io::Result<i32> {
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        let status = command.status()?;
        Ok(status.code().unwrap_or(-1))
    }
}

/// Real prompter reading line-buffered stdin, writing prompts to stdout.
#[derive(Debug, Default)]
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn read_line(&self, prompt: &str) -> io::Result<String> {
        print!("{} ", prompt);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        Ok(input.trim().to_string())
    }
}
