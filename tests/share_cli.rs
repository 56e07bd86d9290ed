//! Runs the `wdte-share` binary against files on disk.

use std::fs;
use std::process::{Command, Output};

use tempfile::tempdir;
use wdte_playground::{decode, encode};

fn wdte_share(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wdte-share"))
        .args(args)
        .output()
        .expect("failed to run wdte-share")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_encode_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hello.wdte");
    let program = "io.stdout -> io.writeln 'hi #1 100%';\n";
    fs::write(&path, program).unwrap();

    let output = wdte_share(&["encode", path.to_str().unwrap()]);
    assert!(output.status.success());

    let fragment = stdout(&output);
    assert_eq!(fragment.trim_end(), encode(program));
    assert_eq!(decode(fragment.trim_end()).unwrap(), program);
}

#[test]
fn test_encode_with_base_url() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("one.wdte");
    fs::write(&path, "1").unwrap();

    let output = wdte_share(&[
        "encode",
        path.to_str().unwrap(),
        "--base-url",
        "https://play.example/wdte/#1:old",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end(), "https://play.example/wdte/#1:1");
}

#[test]
fn test_encode_compact() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("long.wdte");
    let program = "io.stdout -> io.writeln 'again';\n".repeat(50);
    fs::write(&path, &program).unwrap();

    let output = wdte_share(&["encode", "--compact", path.to_str().unwrap()]);
    assert!(output.status.success());

    let fragment = stdout(&output);
    assert!(fragment.starts_with("2:"));
    assert_eq!(decode(fragment.trim_end()).unwrap(), program);

    let output = wdte_share(&["decode", fragment.trim_end()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), program);
}

#[test]
fn test_decode_link() {
    let output = wdte_share(&["decode", "https://play.example/#1:fib%2030"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "fib 30\n");
}

#[test]
fn test_decode_corrupt_link_fails() {
    let output = wdte_share(&["decode", "#1:%zz"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid share link"));
}

#[test]
fn test_encode_missing_file_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.wdte");

    let output = wdte_share(&["encode", path.to_str().unwrap()]);
    assert!(!output.status.success());
}

#[test]
fn test_examples_listing_and_lookup() {
    let output = wdte_share(&["examples"]);
    assert!(output.status.success());
    let listing = stdout(&output);
    assert!(listing.lines().next().unwrap().starts_with("fib"));
    assert!(listing.contains("100 Doors"));

    let output = wdte_share(&["examples", "--id", "quine"]);
    assert!(output.status.success());
    let fragment = stdout(&output);
    let program = decode(fragment.trim_end()).unwrap();
    assert!(program.starts_with("let str => import 'strings';"));

    let output = wdte_share(&["examples", "--id", "nope"]);
    assert!(!output.status.success());
}
