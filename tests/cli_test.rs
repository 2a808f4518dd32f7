//! Binary-level tests driving the CLI against fake jdeps executables.
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

fn install_fake_jdeps(jdk: &Path, body: &str) -> PathBuf {
    let bin = jdk.join("bin");
    fs::create_dir_all(&bin).unwrap();
    let tool = bin.join("jdeps");
    fs::write(&tool, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();
    tool
}

fn jdeps_runner() -> Command {
    let mut cmd = Command::cargo_bin("jdeps-runner").unwrap();
    // Keep the host's JAVA_HOME out of resolution.
    cmd.env_remove("JAVA_HOME");
    cmd
}

#[test]
fn test_locate_prints_toolchain_executable() {
    let dir = TempDir::new().unwrap();
    let jdk = dir.path().join("jdk");
    let tool = install_fake_jdeps(&jdk, "exit 0");

    jdeps_runner()
        .arg("locate")
        .arg("--toolchain")
        .arg(&jdk)
        .assert()
        .success()
        .stdout(format!("{}\n", tool.display()));
}

#[test]
fn test_locate_without_any_strategy_fails() {
    let output = jdeps_runner().arg("locate").output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("JAVA_HOME"));
}

#[test]
fn test_analyze_success_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let jdk = dir.path().join("jdk");
    install_fake_jdeps(&jdk, "echo 'deps listing'\necho 'warning: split package' >&2\nexit 0");

    let output = jdeps_runner()
        .arg("analyze")
        .arg(dir.path().join("classes"))
        .arg("--toolchain")
        .arg(&jdk)
        .arg("--output-directory")
        .arg(dir.path().join("out"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("deps listing"));
    assert!(stderr.contains("JDeps Warnings"));
    assert!(stderr.contains("warning: split package"));
}

#[test]
fn test_analyze_failure_exits_nonzero_with_diagnostics() {
    let dir = TempDir::new().unwrap();
    let jdk = dir.path().join("jdk");
    install_fake_jdeps(&jdk, "echo boom >&2\nexit 3");

    let output = jdeps_runner()
        .arg("analyze")
        .arg(dir.path().join("classes"))
        .arg("--toolchain")
        .arg(&jdk)
        .arg("--output-directory")
        .arg(dir.path().join("out"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Exit code: 3"));
    assert!(stderr.contains("boom"));
    assert!(stderr.contains("Command line was:"));
}

#[test]
fn test_analyze_maps_unrecognized_verbosity_to_generic_flag() {
    let dir = TempDir::new().unwrap();
    let jdk = dir.path().join("jdk");
    // The fake tool echoes its arguments so the built command line is visible.
    install_fake_jdeps(&jdk, "echo \"$@\"\nexit 0");

    let output = jdeps_runner()
        .arg("analyze")
        .arg(dir.path().join("classes"))
        .arg("--verbose")
        .arg("banana")
        .arg("--toolchain")
        .arg(&jdk)
        .arg("--output-directory")
        .arg(dir.path().join("out"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("-v -cp"));
    assert!(!stderr.contains("-verbose:"));
}

#[test]
fn test_config_file_supplies_toolchain() {
    let dir = TempDir::new().unwrap();
    let jdk = dir.path().join("jdk");
    let tool = install_fake_jdeps(&jdk, "exit 0");

    let config = dir.path().join("jdeps.toml");
    fs::write(
        &config,
        format!("[resolver]\ntoolchain = \"{}\"\n", jdk.display()),
    )
    .unwrap();

    jdeps_runner()
        .arg("locate")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(format!("{}\n", tool.display()));
}
