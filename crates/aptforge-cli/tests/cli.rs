//! Smoke tests driving the built `aptforge` binary.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

fn aptforge(repo: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_aptforge"));
    cmd.arg(repo);
    cmd
}

#[test]
fn help_prints_usage() {
    let output = Command::new(env!("CARGO_BIN_EXE_aptforge"))
        .arg("--help")
        .output()
        .expect("failed to run aptforge");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("REPO_PATH"));
}

#[test]
fn empty_repository_build_succeeds() {
    let dir = TempDir::new().unwrap();
    let output = aptforge(dir.path()).output().expect("failed to run aptforge");
    assert!(output.status.success());
    for artifact in ["Packages", "Packages.gz", "Release"] {
        assert!(dir.path().join(artifact).is_file(), "missing {artifact}");
    }
}

#[test]
fn corrupt_archive_yields_nonzero_exit_naming_the_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("bad_1.0_amd64.deb"), "garbage").unwrap();

    let output = aptforge(dir.path()).output().expect("failed to run aptforge");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bad_1.0_amd64.deb"));
    assert!(!dir.path().join("Release").exists());
}

#[test]
fn debug_flag_enables_debug_output() {
    let dir = TempDir::new().unwrap();
    let output = aptforge(dir.path())
        .arg("--debug")
        .output()
        .expect("failed to run aptforge");
    assert!(output.status.success());

    let logs = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(logs.contains("building repository"), "no debug event in: {logs}");
}
