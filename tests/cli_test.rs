// tests/cli_test.rs
use std::fs;
use std::process::Command;
use tempfile::TempDir;
use vc::config::load_context;

fn vc() -> Command {
    Command::new(env!("CARGO_BIN_EXE_vc"))
}

#[test]
fn test_vc_help() {
    let output = vc().arg("--help").output().expect("Failed to execute vc");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("vc"));
    assert!(stdout.contains("dry-run"));
}

#[test]
fn test_tag_help_lists_flags() {
    let output = vc().args(["t", "--help"]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    for flag in ["--rc-name", "--imajor", "--irc", "--new", "--inc"] {
        assert!(stdout.contains(flag), "missing {} in:\n{}", flag, stdout);
    }
}

#[test]
fn test_new_with_version_in_dry_mode_persists() {
    let dir = TempDir::new().unwrap();
    let context = dir.path().join("ctx.toml");

    let output = vc()
        .current_dir(dir.path())
        .arg("--context")
        .arg(&context)
        .args(["new", "--version=v2.3.4-rc.5"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("dry mode"));
    assert!(stdout.contains("vc switch dry"));
    assert!(stdout.contains("git tag v2.3.4-rc.5"));
    assert!(stdout.contains("git push origin v2.3.4-rc.5"));

    let stored = load_context(&context).unwrap().unwrap();
    assert_eq!(stored.current_version().to_string(), "v2.3.4-rc.5");
}

#[test]
fn test_switch_dry_toggles_file() {
    let dir = TempDir::new().unwrap();
    let context = dir.path().join("ctx.toml");

    let status = vc()
        .arg("--context")
        .arg(&context)
        .args(["switch", "dry"])
        .status()
        .unwrap();
    assert!(status.success());

    let stored = load_context(&context).unwrap().unwrap();
    assert!(!stored.dry_mode);
}

#[test]
fn test_unreadable_context_fails() {
    let dir = TempDir::new().unwrap();
    let context = dir.path().join("ctx.toml");
    fs::write(&context, "dry_mode = [").unwrap();

    let output = vc()
        .arg("--context")
        .arg(&context)
        .arg("new")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to open context"));
}
