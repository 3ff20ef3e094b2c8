use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn stdin_stdout_reproduces_scenario_1() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("stepladder")?;
    cmd.write_stdin("3\n5\nCAT\nDAT\nBAT\nBAD\nCAD\n");
    cmd.assert().success().stdout(predicate::str::diff("6\n"));
    Ok(())
}

#[test]
fn empty_dictionary_reports_zero() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("stepladder")?;
    cmd.write_stdin("3\n0\n");
    cmd.assert().success().stdout(predicate::str::diff("0\n"));
    Ok(())
}

#[test]
fn reads_from_file_and_writes_to_file() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let input = temp.path().join("words.txt");
    let output = temp.path().join("out.txt");
    fs::write(&input, "1\n3\nA\nE\nI\n")?;

    let mut cmd = Command::cargo_bin("stepladder")?;
    cmd.arg("-f").arg(&input).arg("-o").arg(&output);
    cmd.assert().success();

    assert_eq!(fs::read_to_string(&output)?, "1\n");
    Ok(())
}
