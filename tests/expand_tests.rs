//! Integration tests for expand command

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::reftag_cmd;

/// Helper to initialize a test project
fn init_project(temp: &TempDir) {
    reftag_cmd().arg("init").arg(temp.path()).assert().success();
}

/// Helper to create a document file with content
fn create_doc(temp: &TempDir, filename: &str, content: &str) {
    let doc_path = temp.path().join(filename);
    fs::write(doc_path, content).unwrap();
}

#[test]
fn test_expand_preview_to_stdout() {
    let temp = TempDir::new().unwrap();
    init_project(&temp);
    create_doc(&temp, "doc.md", "See {wikipedia rust:Rust} for details.\n");

    reftag_cmd()
        .current_dir(temp.path())
        .arg("expand")
        .arg("doc.md")
        .assert()
        .success()
        .stdout("See <a href=\"http://en.wikipedia.org/rust\">Rust</a> for details.\n");

    // Preview must not touch the file
    let content = fs::read_to_string(temp.path().join("doc.md")).unwrap();
    assert!(content.contains("{wikipedia rust:Rust}"));
}

#[test]
fn test_expand_write_rewrites_file() {
    let temp = TempDir::new().unwrap();
    init_project(&temp);
    create_doc(
        &temp,
        "doc.md",
        "{wikipedia openai} and {wikipedia new_york:New York City}\n",
    );

    reftag_cmd()
        .current_dir(temp.path())
        .arg("expand")
        .arg("doc.md")
        .arg("--write")
        .assert()
        .success()
        .stdout(predicate::str::contains("doc.md: 2 expanded"))
        .stdout(predicate::str::contains("Expanded 2 occurrences in 1 file"));

    let content = fs::read_to_string(temp.path().join("doc.md")).unwrap();
    assert!(content.contains("<a href=\"http://en.wikipedia.org/openai\">openai</a>"));
    assert!(content.contains("<a href=\"http://en.wikipedia.org/new_york\">New York City</a>"));
}

#[test]
fn test_expand_write_skips_unchanged_files() {
    let temp = TempDir::new().unwrap();
    init_project(&temp);
    create_doc(&temp, "doc.md", "No tags here.\n");

    reftag_cmd()
        .current_dir(temp.path())
        .arg("expand")
        .arg("doc.md")
        .arg("--write")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to expand"));
}

#[test]
fn test_expand_directory_recursively() {
    let temp = TempDir::new().unwrap();
    init_project(&temp);
    create_doc(&temp, "a.md", "{wikipedia a}\n");
    fs::create_dir(temp.path().join("sub")).unwrap();
    create_doc(&temp, "sub/b.txt", "{wikipedia b:B}\n");
    create_doc(&temp, "ignored.rs", "{wikipedia c}\n");

    reftag_cmd()
        .current_dir(temp.path())
        .arg("expand")
        .arg(".")
        .arg("--write")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expanded 2 occurrences in 2 files"));

    let a = fs::read_to_string(temp.path().join("a.md")).unwrap();
    assert!(a.contains("<a href=\"http://en.wikipedia.org/a\">a</a>"));

    let b = fs::read_to_string(temp.path().join("sub/b.txt")).unwrap();
    assert!(b.contains("<a href=\"http://en.wikipedia.org/b\">B</a>"));

    // Non-document files are not picked up from directories
    let ignored = fs::read_to_string(temp.path().join("ignored.rs")).unwrap();
    assert!(ignored.contains("{wikipedia c}"));
}

#[test]
fn test_expand_leaves_markdown_code_untouched() {
    let temp = TempDir::new().unwrap();
    init_project(&temp);
    create_doc(
        &temp,
        "doc.md",
        "Link {wikipedia a}\n\n```\n{wikipedia fenced}\n```\n\nInline `{wikipedia span}` stays.\n",
    );

    reftag_cmd()
        .current_dir(temp.path())
        .arg("expand")
        .arg("doc.md")
        .arg("--write")
        .assert()
        .success()
        .stdout(predicate::str::contains("doc.md: 1 expanded"));

    let content = fs::read_to_string(temp.path().join("doc.md")).unwrap();
    assert!(content.contains("<a href=\"http://en.wikipedia.org/a\">a</a>"));
    assert!(content.contains("{wikipedia fenced}"));
    assert!(content.contains("`{wikipedia span}`"));
}

#[test]
fn test_expand_plain_html_ignores_markdown_rules() {
    let temp = TempDir::new().unwrap();
    init_project(&temp);
    create_doc(
        &temp,
        "doc.html",
        "<pre>{wikipedia a}</pre> and {wikipedia b}\n",
    );

    reftag_cmd()
        .current_dir(temp.path())
        .arg("expand")
        .arg("doc.html")
        .arg("--write")
        .assert()
        .success()
        .stdout(predicate::str::contains("doc.html: 2 expanded"));
}

#[test]
fn test_expand_renders_error_marker_for_empty_tag() {
    let temp = TempDir::new().unwrap();
    init_project(&temp);
    create_doc(&temp, "doc.md", "Broken: {wikipedia}\n");

    reftag_cmd()
        .current_dir(temp.path())
        .arg("expand")
        .arg("doc.md")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<font color=\"#FF0000\">#ERROR! {wikipedia} tag</font>",
        ));
}

#[test]
fn test_expand_leaves_unknown_tags_verbatim() {
    let temp = TempDir::new().unwrap();
    init_project(&temp);
    create_doc(&temp, "doc.md", "Keep {code sample} and {link x:y}.\n");

    reftag_cmd()
        .current_dir(temp.path())
        .arg("expand")
        .arg("doc.md")
        .assert()
        .success()
        .stdout("Keep {code sample} and {link x:y}.\n");
}

#[test]
fn test_expand_uses_defined_tags() {
    let temp = TempDir::new().unwrap();
    init_project(&temp);
    reftag_cmd()
        .current_dir(temp.path())
        .arg("define")
        .arg("rfc")
        .arg("https://www.rfc-editor.org/rfc/")
        .assert()
        .success();
    create_doc(&temp, "doc.md", "Spec: {rfc rfc9110:HTTP Semantics}\n");

    reftag_cmd()
        .current_dir(temp.path())
        .arg("expand")
        .arg("doc.md")
        .assert()
        .success()
        .stdout(
            "Spec: <a href=\"https://www.rfc-editor.org/rfc/rfc9110\">HTTP Semantics</a>\n",
        );
}

#[test]
fn test_expand_outside_project_fails_with_code_2() {
    let temp = TempDir::new().unwrap();
    create_doc(&temp, "doc.md", "{wikipedia a}\n");

    reftag_cmd()
        .current_dir(temp.path())
        .arg("expand")
        .arg("doc.md")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Not a reftag project"));
}

#[test]
fn test_expand_missing_file_fails() {
    let temp = TempDir::new().unwrap();
    init_project(&temp);

    reftag_cmd()
        .current_dir(temp.path())
        .arg("expand")
        .arg("missing.md")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
