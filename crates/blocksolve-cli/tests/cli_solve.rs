use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const WORKED_EXAMPLE: &str = "1,10,20,30\n2,10,20\n3,20,30,40\n";
const NESTED_INPUT: &str = "1,1,2,3,10\n2,1,2,3,11\n3,1,2,10,11\n4,1,2,3,6\n";

fn write_input(temp: &TempDir, name: &str, content: &str) -> anyhow::Result<PathBuf> {
    let path = temp.path().join(name);
    fs::write(&path, content)?;
    Ok(path)
}

#[test]
fn command_solve_worked_example() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let input = write_input(&temp, "input.txt", WORKED_EXAMPLE)?;

    let mut cmd = Command::cargo_bin("blocksolve")?;
    let output = cmd.arg("solve").arg(&input).output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(output.status.success());
    assert_eq!(stdout, "C[10 20] P[1 2]\nC[20 30] P[1 3]\n");

    Ok(())
}

#[test]
fn command_solve_output_file() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let input = write_input(&temp, "input.txt", WORKED_EXAMPLE)?;
    let out = temp.path().join("blocks.txt");

    let mut cmd = Command::cargo_bin("blocksolve")?;
    cmd.arg("solve")
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(
        fs::read_to_string(&out)?,
        "C[10 20] P[1 2]\nC[20 30] P[1 3]\n"
    );

    Ok(())
}

#[test]
fn command_solve_weight_headers() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let input = write_input(&temp, "input.txt", WORKED_EXAMPLE)?;

    let mut cmd = Command::cargo_bin("blocksolve")?;
    cmd.arg("solve")
        .arg(&input)
        .arg("--weight-headers")
        .assert()
        .success()
        .stdout("# weight 4\nC[10 20] P[1 2]\nC[20 30] P[1 3]\n");

    Ok(())
}

#[test]
fn command_solve_absorption_toggle() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let input = write_input(&temp, "nested.txt", NESTED_INPUT)?;

    let mut cmd = Command::cargo_bin("blocksolve")?;
    cmd.arg("solve")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("C[1 2] P[1 2 3 4]\n"));

    let mut cmd = Command::cargo_bin("blocksolve")?;
    cmd.arg("solve")
        .arg(&input)
        .arg("--no-absorption")
        .assert()
        .success()
        .stdout(predicate::str::contains("C[1 2] P[3 4]\n"));

    Ok(())
}

#[test]
fn command_solve_min_overlap_from_config_file() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let input = write_input(&temp, "input.txt", WORKED_EXAMPLE)?;
    let config = write_input(&temp, "config.toml", "[discovery]\nmin-overlap = 3\n")?;

    let mut cmd = Command::cargo_bin("blocksolve")?;
    cmd.arg("solve")
        .arg(&input)
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    // The CLI flag wins over the file.
    let mut cmd = Command::cargo_bin("blocksolve")?;
    cmd.arg("solve")
        .arg(&input)
        .arg("-c")
        .arg(&config)
        .arg("-m")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("C[20] P[1 2 3]\n"));

    Ok(())
}

#[test]
fn command_solve_thread_count_does_not_change_output() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let content: String = (1..=40)
        .map(|p| format!("{},{},{},{},{}\n", p, p % 3 + 1, p % 5 + 10, p % 7 + 20, 99))
        .collect();
    let input = write_input(&temp, "wide.txt", &content)?;

    let mut single = Command::cargo_bin("blocksolve")?;
    let single = single.arg("-j").arg("1").arg("solve").arg(&input).output()?;
    let mut multi = Command::cargo_bin("blocksolve")?;
    let multi = multi.arg("-j").arg("4").arg("solve").arg(&input).output()?;

    assert!(single.status.success());
    assert!(multi.status.success());
    assert!(!single.stdout.is_empty());
    assert_eq!(single.stdout, multi.stdout);

    Ok(())
}

#[test]
fn command_solve_malformed_line_exit_code() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let input = write_input(&temp, "bad.txt", "1,10,20\n2,ten,20\n3,10,20\n")?;

    let mut cmd = Command::cargo_bin("blocksolve")?;
    cmd.arg("solve")
        .arg(&input)
        .assert()
        .code(65)
        .stderr(predicate::str::contains("line 2"));

    let mut cmd = Command::cargo_bin("blocksolve")?;
    cmd.arg("solve")
        .arg(&input)
        .arg("--skip-malformed")
        .assert()
        .success()
        .stdout("C[10 20] P[1 3]\n");

    Ok(())
}

#[test]
fn command_solve_duplicate_protein_exit_code() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let input = write_input(&temp, "dup.txt", "1,10,20\n2,10,20\n1,30,40\n")?;

    let mut cmd = Command::cargo_bin("blocksolve")?;
    cmd.arg("solve").arg(&input).assert().code(65);

    Ok(())
}

#[test]
fn command_solve_missing_input_exit_code() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let missing = temp.path().join("does-not-exist.txt");

    let mut cmd = Command::cargo_bin("blocksolve")?;
    cmd.arg("solve")
        .arg(&missing)
        .assert()
        .code(74)
        .stdout(predicate::str::is_empty());

    Ok(())
}

#[test]
fn command_solve_invalid_set_value_exit_code() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let input = write_input(&temp, "input.txt", WORKED_EXAMPLE)?;

    let mut cmd = Command::cargo_bin("blocksolve")?;
    cmd.arg("solve")
        .arg(&input)
        .arg("-S")
        .arg("discovery.min-overlap=zero")
        .assert()
        .code(78);

    let mut cmd = Command::cargo_bin("blocksolve")?;
    cmd.arg("solve")
        .arg(&input)
        .arg("-S")
        .arg("discovery.min-overlap=0")
        .assert()
        .code(78);

    Ok(())
}

#[test]
fn command_solve_missing_config_file_exit_code() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let input = write_input(&temp, "input.txt", WORKED_EXAMPLE)?;

    let mut cmd = Command::cargo_bin("blocksolve")?;
    cmd.arg("solve")
        .arg(&input)
        .arg("-c")
        .arg(temp.path().join("absent.toml"))
        .assert()
        .code(78)
        .stderr(predicate::str::contains("absent.toml"));

    Ok(())
}

#[test]
fn command_solve_non_utf8_line() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let input = temp.path().join("binary.txt");
    fs::write(&input, b"1,10,20\n2,10,\xff\xfe\n3,10,20\n")?;

    let mut cmd = Command::cargo_bin("blocksolve")?;
    cmd.arg("solve").arg(&input).assert().code(65);

    let mut cmd = Command::cargo_bin("blocksolve")?;
    cmd.arg("solve")
        .arg(&input)
        .arg("--skip-malformed")
        .assert()
        .success()
        .stdout("C[10 20] P[1 3]\n");

    Ok(())
}

#[test]
fn command_solve_empty_input() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let input = write_input(&temp, "empty.txt", "")?;

    let mut cmd = Command::cargo_bin("blocksolve")?;
    cmd.arg("solve")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    Ok(())
}
