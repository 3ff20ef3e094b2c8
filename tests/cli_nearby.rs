use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn stdin_stdout_reproduces_scenario_1() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nearby")?;
    cmd.write_stdin("3 0 2\n1 0.0 0.0\n2 1.0 0.0\n3 10.0 0.0\nt 2 0.1 0.0\nt 2 10.0 0.0\n");
    cmd.assert().success().stdout(predicate::str::diff("1 2\n3 2\n"));
    Ok(())
}

#[test]
fn question_queries_resolve_through_the_reverse_index() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nearby")?;
    cmd.write_stdin("2 1 1\n1 0.0 0.0\n2 10.0 0.0\n100 2 1 2\nq 1 0.0 0.0\n");
    cmd.assert().success().stdout(predicate::str::diff("100\n"));
    Ok(())
}

#[test]
fn reads_from_file_and_writes_to_file() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let input = temp.path().join("in.txt");
    let output = temp.path().join("out.txt");
    fs::write(&input, "2 0 1\n1 0.0 0.0\n2 0.0005 0.0\nt 2 0.0 0.0\n")?;

    let mut cmd = Command::cargo_bin("nearby")?;
    cmd.arg("-f").arg(&input).arg("-o").arg(&output);
    cmd.assert().success();

    assert_eq!(fs::read_to_string(&output)?, "2 1\n");
    Ok(())
}
