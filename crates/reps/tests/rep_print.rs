use anyhow::Result;
use serde_json::Value;
use std::fs;
use std::io::Write as _;
use std::process::{Command, Output, Stdio};
use tempfile::tempdir;

const PENDING: &str = r#"{
    "type": "object",
    "actor": "server1.conn1.child1/obj54",
    "class": "Promise",
    "promiseState": { "state": "pending" }
}"#;

fn rep_print() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_rep_print"));
    command.env("RUST_LOG", "off");
    command
}

fn run_with_stdin(args: &[&str], input: &str) -> Result<Output> {
    let mut child = rep_print()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input.as_bytes())?;
    }
    Ok(child.wait_with_output()?)
}

#[test]
fn prints_the_text_of_a_grip_file() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("pending.json");
    fs::write(&path, PENDING)?;

    let output = rep_print().arg(&path).output()?;
    assert!(output.status.success(), "{output:?}");
    assert_eq!(String::from_utf8(output.stdout)?, "Promise { <state>: \"pending\" }\n");
    Ok(())
}

#[test]
fn reads_stdin_and_honours_the_mode() -> Result<()> {
    let output = run_with_stdin(&["--mode=tiny", "-"], PENDING)?;
    assert!(output.status.success(), "{output:?}");
    assert_eq!(String::from_utf8(output.stdout)?, "Promise { \"pending\" }\n");
    Ok(())
}

#[test]
fn json_output_is_a_tree_snapshot() -> Result<()> {
    let output = run_with_stdin(&["--json", "-"], PENDING)?;
    assert!(output.status.success(), "{output:?}");
    let snapshot: Value = serde_json::from_slice(&output.stdout)?;
    assert!(snapshot["children"].as_array().is_some_and(|children| !children.is_empty()));
    Ok(())
}

#[test]
fn bad_arguments_exit_with_failure() -> Result<()> {
    let unknown_mode = run_with_stdin(&["--mode=verbose", "-"], PENDING)?;
    assert!(!unknown_mode.status.success());
    assert!(unknown_mode.stdout.is_empty());

    let dir = tempdir()?;
    let missing = rep_print().arg(dir.path().join("absent.json")).output()?;
    assert!(!missing.status.success());
    assert!(missing.stdout.is_empty());
    Ok(())
}
