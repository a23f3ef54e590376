//! Integration tests for render command

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::reftag_cmd;

#[test]
fn test_render_target_only() {
    let temp = TempDir::new().unwrap();

    reftag_cmd()
        .current_dir(temp.path())
        .arg("render")
        .arg("openai")
        .assert()
        .success()
        .stdout("<a href=\"http://en.wikipedia.org/openai\">openai</a>\n");
}

#[test]
fn test_render_target_and_title() {
    let temp = TempDir::new().unwrap();

    reftag_cmd()
        .current_dir(temp.path())
        .arg("render")
        .arg("openai:OpenAI")
        .assert()
        .success()
        .stdout("<a href=\"http://en.wikipedia.org/openai\">OpenAI</a>\n");
}

#[test]
fn test_render_title_with_spaces() {
    let temp = TempDir::new().unwrap();

    reftag_cmd()
        .current_dir(temp.path())
        .arg("render")
        .arg("new_york:New York City")
        .assert()
        .success()
        .stdout("<a href=\"http://en.wikipedia.org/new_york\">New York City</a>\n");
}

#[test]
fn test_render_empty_text_prints_error_marker() {
    let temp = TempDir::new().unwrap();

    reftag_cmd()
        .current_dir(temp.path())
        .arg("render")
        .arg("")
        .assert()
        .success()
        .stdout("<font color=\"#FF0000\">#ERROR! {wikipedia} tag</font>\n");
}

#[test]
fn test_render_trailing_colon() {
    let temp = TempDir::new().unwrap();

    reftag_cmd()
        .current_dir(temp.path())
        .arg("render")
        .arg("paris:")
        .assert()
        .success()
        .stdout("<a href=\"http://en.wikipedia.org/paris\">paris</a>\n");
}

#[test]
fn test_render_unknown_tag_fails_with_code_4() {
    let temp = TempDir::new().unwrap();

    reftag_cmd()
        .current_dir(temp.path())
        .arg("render")
        .arg("rfc9110")
        .arg("--tag")
        .arg("rfc")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Unknown tag: rfc"));
}

#[test]
fn test_render_uses_project_definitions() {
    let temp = TempDir::new().unwrap();

    reftag_cmd().arg("init").arg(temp.path()).assert().success();
    reftag_cmd()
        .current_dir(temp.path())
        .arg("define")
        .arg("rfc")
        .arg("https://www.rfc-editor.org/rfc/")
        .assert()
        .success();

    reftag_cmd()
        .current_dir(temp.path())
        .arg("render")
        .arg("rfc9110:HTTP Semantics")
        .arg("--tag")
        .arg("rfc")
        .assert()
        .success()
        .stdout("<a href=\"https://www.rfc-editor.org/rfc/rfc9110\">HTTP Semantics</a>\n");
}

#[test]
fn test_render_respects_escape_config() {
    let temp = TempDir::new().unwrap();

    reftag_cmd().arg("init").arg(temp.path()).assert().success();
    reftag_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("escape")
        .arg("true")
        .assert()
        .success();

    reftag_cmd()
        .current_dir(temp.path())
        .arg("render")
        .arg("a:x < y")
        .assert()
        .success()
        .stdout(predicate::str::contains("x &lt; y"));
}
