use std::fs;

use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("t2s").unwrap()
}

#[test]
fn wrong_arity_prints_usage_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "漢字").unwrap();

    cmd().assert().success().stdout(contains("Usage: t2s"));
    cmd().arg(&input).assert().success().stdout(contains("Usage: t2s"));
    cmd()
        .arg(&input)
        .arg(&output)
        .arg(dir.path().join("extra.txt"))
        .assert()
        .success()
        .stdout(contains("Usage: t2s"));
    assert!(!output.exists());
}

#[test]
fn converts_traditional_to_simplified() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "中華人民共和國\n漢字\n").unwrap();

    cmd().arg(&input).arg(&output).assert().success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "中华人民共和国\n汉字\n");
}

#[test]
fn simplified_text_is_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let once = dir.path().join("once.txt");
    let twice = dir.path().join("twice.txt");
    fs::write(&input, "汉字，中华人民共和国。").unwrap();

    cmd().arg(&input).arg(&once).assert().success();
    cmd().arg(&once).arg(&twice).assert().success();

    let original = fs::read_to_string(&input).unwrap();
    assert_eq!(fs::read_to_string(&once).unwrap(), original);
    assert_eq!(fs::read_to_string(&twice).unwrap(), original);
}

#[test]
fn missing_input_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.txt");
    cmd()
        .arg(dir.path().join("absent.txt"))
        .arg(&output)
        .assert()
        .failure()
        .stderr(contains("absent.txt"));
    assert!(!output.exists());
}

#[test]
fn rejects_unknown_target() {
    cmd()
        .args(["--to", "klingon", "a.txt", "b.txt"])
        .assert()
        .failure()
        .stderr(contains("invalid value"));
}
