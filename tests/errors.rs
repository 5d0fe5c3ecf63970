mod common;

use common::{create_file, jscleanup_cmd};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_unknown_comment_filter() -> Result<(), Box<dyn std::error::Error>> {
    jscleanup_cmd()
        .args(["-c", "foo"])
        .write_stdin("a();\n")
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("unknown comment filter \"foo\""));
    Ok(())
}

#[test]
fn test_invalid_regex_filter() -> Result<(), Box<dyn std::error::Error>> {
    jscleanup_cmd()
        .args(["-c", "/(unclosed/"])
        .write_stdin("a();\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid comment filter regex"));
    Ok(())
}

#[test]
fn test_invalid_ecma_version() -> Result<(), Box<dyn std::error::Error>> {
    jscleanup_cmd()
        .args(["--ecma-version", "4"])
        .write_stdin("a();\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported ECMAScript version 4"));
    Ok(())
}

#[test]
fn test_parse_error_names_the_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let broken = create_file(temp.path(), "broken.js", "let s = `open\n")?;

    jscleanup_cmd()
        .arg(&broken)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unterminated template"))
        .stderr(predicate::str::contains("broken.js"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_parse_error_from_stdin() -> Result<(), Box<dyn std::error::Error>> {
    jscleanup_cmd()
        .write_stdin("/* never closed")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unterminated comment (1:0) in <stdin>"));
    Ok(())
}

#[test]
fn test_failing_file_does_not_stop_others() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let good = create_file(temp.path(), "good.js", "// x\ngood();\n")?;
    let bad = create_file(temp.path(), "bad.js", "'unterminated\n")?;

    jscleanup_cmd()
        .arg("-i")
        .arg(&bad)
        .arg(&good)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unterminated string constant"))
        .stderr(predicate::str::contains(
            "2 file(s): 1 changed, 0 unchanged, 1 failed",
        ));

    assert_eq!(fs::read_to_string(&good)?, "good();\n");
    assert_eq!(fs::read_to_string(&bad)?, "'unterminated\n");

    temp.close()?;
    Ok(())
}

#[test]
fn test_missing_input_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    jscleanup_cmd()
        .arg(temp.path().join("missing.js"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error accessing path"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_output_conflicts_with_in_place() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let input = create_file(temp.path(), "a.js", "a();\n")?;

    // clap rejects the combination itself, with its usage exit code.
    jscleanup_cmd()
        .arg(&input)
        .args(["-i", "-o", "out.js"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(2);

    temp.close()?;
    Ok(())
}

#[test]
fn test_output_file_with_several_inputs() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let a = create_file(temp.path(), "a.js", "a();\n")?;
    let b = create_file(temp.path(), "b.js", "b();\n")?;

    jscleanup_cmd()
        .arg(&a)
        .arg(&b)
        .args(["-o", "out.js"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot use"));

    assert!(!temp.path().join("out.js").exists());
    temp.close()?;
    Ok(())
}

#[test]
fn test_in_place_requires_files() -> Result<(), Box<dyn std::error::Error>> {
    jscleanup_cmd()
        .arg("--in-place")
        .write_stdin("a();\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot use"));
    Ok(())
}

#[test]
fn test_invalid_options_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let options = create_file(temp.path(), "bad.json", "{ \"maxEmptyLines\": \"two\" }")?;

    jscleanup_cmd()
        .arg("--options")
        .arg(&options)
        .write_stdin("a();\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid options file"));

    temp.close()?;
    Ok(())
}
