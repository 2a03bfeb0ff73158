//! End-to-end runs of the `diary` binary.

use pretty_assertions::assert_eq;
use std::io::Write;
use std::process::{Command, Stdio};

fn diary() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_diary"));
    // keep runs independent of any diary.toml in the developer's config dir
    cmd.arg("--config").arg("__no_such_diary_config__.toml");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn type_from_stdin_prints_full_text() {
    let mut child = diary()
        .args(["--output", "full", "type"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"the quick brown fox jumps over the lazy dog and")
        .unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "the quick brown fox jumps over the lazy\ndog and\n"
    );
}

#[test]
fn load_renders_faded_view() {
    let dir = tempfile::tempdir().unwrap();
    let entry = write_file(&dir, "entry.txt", "a\r\nb\r\nc\r\nd\r\nactive");
    let out = diary().arg("load").arg(&entry).output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "0.25  b");
    assert!(lines[1].starts_with("0.6") && lines[1].ends_with("  c"));
    assert_eq!(lines[2], "1.00  d");
    assert_eq!(lines[3], ">     active");
}

#[test]
fn type_continues_loaded_entry_with_config() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = write_file(&dir, "diary.toml", "[wrap]\nwidth = 10\n");
    let entry = write_file(&dir, "entry.txt", "first\nsecond");
    let keys = write_file(&dir, "keys.txt", "\u{7f}\u{7f}\u{7f}\u{7f}\u{7f}\u{7f}\u{7f} more words");
    let out = Command::new(env!("CARGO_BIN_EXE_diary"))
        .arg("--config")
        .arg(&cfg)
        .args(["--output", "full", "type", "--from"])
        .arg(&entry)
        .arg(&keys)
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "first more\nwords\n");
}

#[test]
fn missing_entry_fails_with_context() {
    let out = diary()
        .args(["load", "__definitely_missing_entry__.txt"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    let err = String::from_utf8(out.stderr).unwrap();
    assert!(err.contains("failed to read entry"));
}
