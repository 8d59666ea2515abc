use assert_cmd::prelude::*;
use assert_fs::{prelude::*, NamedTempFile};
use predicates::prelude::*;
use std::{
    io::Write,
    process::{Command, Stdio},
};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn test_cmd(temp_file: &NamedTempFile) -> Result<std::process::Child> {
    let cmd = Command::cargo_bin("student-rec")?
        .arg("-f")
        .arg(temp_file.path())
        .stdin(Stdio::piped())
        .stderr(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;
    Ok(cmd)
}

fn send(cmd: &mut std::process::Child, input: &str) -> Result<()> {
    cmd.stdin
        .as_mut()
        .ok_or("stdin is not piped")?
        .write_all(input.as_bytes())?;
    Ok(())
}

#[test]
fn adds_and_views_students() -> Result<()> {
    let file = NamedTempFile::new("studentRec.txt")?;
    let mut cmd = test_cmd(&file)?;

    send(&mut cmd, "1\nAlice Jones\n1\n")?;
    send(&mut cmd, "1\nBob Brown\n2\n")?;
    send(&mut cmd, "2\n6\n")?;

    cmd.wait_with_output()?
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully written"))
        .stdout(predicate::str::contains("Alice Jones 1\nBob Brown 2\n"));

    file.assert("Alice Jones 1\nBob Brown 2\n");
    file.close()?;
    Ok(())
}

#[test]
fn persists_data() -> Result<()> {
    let file = NamedTempFile::new("studentRec.txt")?;
    let mut cmd = test_cmd(&file)?;

    for i in 1..4 {
        send(&mut cmd, &format!("1\nStudent{i} Last{i}\n{i}\n"))?;
    }
    send(&mut cmd, "6\n")?;
    cmd.wait_with_output()?.assert().success();

    let mut cmd = test_cmd(&file)?;
    send(&mut cmd, "3\n2\n6\n")?;

    cmd.wait_with_output()?
        .assert()
        .success()
        .stdout(predicate::str::contains("Student2 Last2\n"));

    file.close()?;
    Ok(())
}

#[test]
fn search_update_and_remove() -> Result<()> {
    let file = NamedTempFile::new("studentRec.txt")?;
    file.write_str("Alice 1\nBob 2\n")?;
    let mut cmd = test_cmd(&file)?;

    send(&mut cmd, "3\n2\n")?;
    send(&mut cmd, "4\n2\nRobert\nSmith\n")?;
    send(&mut cmd, "5\nAlice\n")?;
    send(&mut cmd, "2\n6\n")?;

    cmd.wait_with_output()?
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob\n"))
        .stdout(predicate::str::contains("Successfully updated"))
        .stdout(predicate::str::contains("Student removed"))
        .stdout(predicate::str::contains("Alice 1").not());

    file.assert("Robert Smith 2\n");
    file.close()?;
    Ok(())
}

#[test]
fn missing_roll_reported() -> Result<()> {
    let file = NamedTempFile::new("studentRec.txt")?;
    file.write_str("Alice 1\n")?;
    let mut cmd = test_cmd(&file)?;

    send(&mut cmd, "3\n42\n6\n")?;

    cmd.wait_with_output()?
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Student with roll number 42 not found.",
        ));

    file.close()?;
    Ok(())
}

#[test]
fn invalid_input_does_not_end_session() -> Result<()> {
    let file = NamedTempFile::new("studentRec.txt")?;
    let mut cmd = test_cmd(&file)?;

    send(&mut cmd, "8\n")?;
    send(&mut cmd, "1\n\n3\n")?;
    send(&mut cmd, "1\nCarol\n-5\n")?;
    send(&mut cmd, "1\nCarol\n5\n6\n")?;

    cmd.wait_with_output()?
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice"))
        .stdout(predicate::str::contains("error: name cannot be empty"))
        .stdout(predicate::str::contains(
            "error: roll number must be greater than 0, got -5",
        ));

    file.assert("Carol 5\n");
    file.close()?;
    Ok(())
}

#[test]
fn viewing_missing_file_reports_error() -> Result<()> {
    let file = NamedTempFile::new("studentRec.txt")?;
    let mut cmd = test_cmd(&file)?;

    send(&mut cmd, "2\n6\n")?;

    cmd.wait_with_output()?
        .assert()
        .success()
        .stdout(predicate::str::contains("error: unable to open"));

    file.assert(predicate::path::missing());
    file.close()?;
    Ok(())
}
