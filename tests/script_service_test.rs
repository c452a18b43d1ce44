//! Tests for the script command family

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use devopsctl::application::services::ScriptService;
use devopsctl::application::ApplicationError;
use devopsctl::infrastructure::traits::RealFileSystem;
use devopsctl::util::testing::MockProcessRunner;

fn service(runner: Arc<MockProcessRunner>) -> ScriptService {
    ScriptService::new(Arc::new(RealFileSystem), runner)
}

#[test]
fn given_directory_with_scripts_when_listed_then_returns_only_sh_files_sorted() {
    // Arrange
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("deploy.sh"), "#!/bin/bash\n").unwrap();
    fs::write(temp.path().join("backup.sh"), "#!/bin/bash\n").unwrap();
    fs::write(temp.path().join("notes.txt"), "not a script").unwrap();
    fs::create_dir(temp.path().join("nested")).unwrap();
    fs::write(temp.path().join("nested/inner.sh"), "#!/bin/bash\n").unwrap();
    let service = service(Arc::new(MockProcessRunner::new()));

    // Act
    let scripts = service.list(temp.path()).unwrap();

    // Assert: non-recursive, *.sh only, sorted by name
    let names: Vec<String> = scripts
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["backup.sh", "deploy.sh"]);
}

#[test]
fn given_empty_directory_when_listed_then_returns_no_scripts() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let service = service(Arc::new(MockProcessRunner::new()));

    // Act
    let scripts = service.list(temp.path()).unwrap();

    // Assert
    assert!(scripts.is_empty());
}

#[test]
fn given_missing_script_when_run_then_reports_script_not_found() {
    // Arrange
    let runner = Arc::new(MockProcessRunner::new());
    let service = service(runner.clone());

    // Act
    let err = service.run_bash("/no/such/script.sh".as_ref()).unwrap_err();

    // Assert: reported before any process launch
    assert!(matches!(err, ApplicationError::ScriptNotFound(_)));
    assert!(runner.calls().is_empty());
}

#[test]
fn given_existing_script_when_run_then_bash_is_invoked_with_path() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("task.sh");
    fs::write(&script, "#!/bin/bash\necho ok\n").unwrap();
    let runner = Arc::new(MockProcessRunner::new());
    let service = service(runner.clone());

    // Act
    service.run_bash(&script).unwrap();

    // Assert
    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].program, "bash");
    assert_eq!(calls[0].args, vec![script.to_string_lossy().to_string()]);
    assert_eq!(calls[0].cwd, None);
}

#[test]
fn given_failing_script_when_run_then_error_carries_exit_status() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("broken.sh");
    fs::write(&script, "#!/bin/bash\nexit 3\n").unwrap();
    let runner = Arc::new(MockProcessRunner::with_exit_codes(&[3]));
    let service = service(runner);

    // Act
    let err = service.run_bash(&script).unwrap_err();

    // Assert
    assert!(matches!(
        err,
        ApplicationError::CommandFailed { ref program, code: 3 } if program == "bash"
    ));
}
