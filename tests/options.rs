mod common;

use common::{create_file, jscleanup_cmd};
use predicates::prelude::*;
use tempfile::tempdir;

const SPACED: &str = "a();\n\n\n\nb();\n";

#[test]
fn test_max_empty_lines() -> Result<(), Box<dyn std::error::Error>> {
    jscleanup_cmd()
        .args(["-l", "1"])
        .write_stdin(SPACED)
        .assert()
        .success()
        .stdout("a();\n\nb();\n");
    Ok(())
}

#[test]
fn test_negative_max_keeps_every_line() -> Result<(), Box<dyn std::error::Error>> {
    jscleanup_cmd()
        .args(["--max-empty-lines", "-1"])
        .write_stdin(SPACED)
        .assert()
        .success()
        .stdout(SPACED);
    Ok(())
}

#[test]
fn test_line_endings_win() -> Result<(), Box<dyn std::error::Error>> {
    jscleanup_cmd()
        .args(["-e", "win"])
        .write_stdin("a();\nb();\n")
        .assert()
        .success()
        .stdout("a();\r\nb();\r\n");
    Ok(())
}

#[test]
fn test_line_endings_mac() -> Result<(), Box<dyn std::error::Error>> {
    jscleanup_cmd()
        .args(["--line-endings", "mac", "-l", "1"])
        .write_stdin("a();\r\n\r\n\r\nb();")
        .assert()
        .success()
        .stdout("a();\r\rb();");
    Ok(())
}

#[test]
fn test_comments_all_keeps_everything() -> Result<(), Box<dyn std::error::Error>> {
    jscleanup_cmd()
        .args(["-c", "all"])
        .write_stdin("// keep\na(); /* me */\n")
        .assert()
        .success()
        .stdout("// keep\na(); /* me */\n");
    Ok(())
}

#[test]
fn test_comments_none_removes_licenses() -> Result<(), Box<dyn std::error::Error>> {
    jscleanup_cmd()
        .args(["-c", "none"])
        .write_stdin("/* @license MIT */\na();\n")
        .assert()
        .success()
        .stdout("a();\n");
    Ok(())
}

#[test]
fn test_comments_regex_and_preset() -> Result<(), Box<dyn std::error::Error>> {
    jscleanup_cmd()
        .args(["-c", "/TODO/i,eslint"])
        .write_stdin("// todo: a\n/* eslint-disable */\n// b\nx();\n")
        .assert()
        .success()
        .stdout("// todo: a\n/* eslint-disable */\nx();\n");
    Ok(())
}

#[test]
fn test_no_compact_comments_keeps_comment_layout() -> Result<(), Box<dyn std::error::Error>> {
    jscleanup_cmd()
        .arg("--no-compact-comments")
        .write_stdin("/*!\n * @preserve\n\n\n */\nx();\n")
        .assert()
        .success()
        .stdout("/*!\n * @preserve\n\n\n */\nx();\n");
    Ok(())
}

#[test]
fn test_script_source_type_html_comments() -> Result<(), Box<dyn std::error::Error>> {
    jscleanup_cmd()
        .args(["--source-type", "script"])
        .write_stdin("a();\n<!-- legacy\nb();\n")
        .assert()
        .success()
        .stdout("a();\nb();\n");
    Ok(())
}

#[test]
fn test_options_file_with_cli_override() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let options = create_file(
        temp.path(),
        "cleanup.json",
        r#"{ "comments": "all", "maxEmptyLines": 2, "include": ["*.js"] }"#,
    )?;

    // The file keeps all comments and two empty lines; the flag caps at one.
    jscleanup_cmd()
        .arg("--options")
        .arg(&options)
        .args(["-l", "1"])
        .write_stdin("// c\na();\n\n\n\nb();\n")
        .assert()
        .success()
        .stdout("// c\na();\n\nb();\n");

    temp.close()?;
    Ok(())
}

#[test]
fn test_options_file_line_ending_alias() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let options = create_file(temp.path(), "o.json", r#"{ "normalizeEols": "win" }"#)?;

    jscleanup_cmd()
        .arg("--options")
        .arg(&options)
        .write_stdin("a();\n")
        .assert()
        .success()
        .stdout(predicate::eq("a();\r\n"));

    temp.close()?;
    Ok(())
}
