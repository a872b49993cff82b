use anyhow::Result;
use serde_json::Value;

use crate::CliTest;

/// A project where `Derived.run`'s only signature inherits from `Base.run`.
const INHERIT_TREE: &str = r#"{
    "name": "pkg",
    "kind": "project",
    "children": [
        {
            "name": "Base",
            "kind": "class",
            "children": [
                {"name": "run", "kind": "method", "children": [
                    {"name": "run", "kind": "callSignature",
                     "comment": {"shortText": "Runs the task.",
                                 "tags": [{"tag": "returns", "text": "the result"}]}}
                ]}
            ]
        },
        {
            "name": "Derived",
            "kind": "class",
            "children": [
                {"name": "run", "kind": "method", "children": [
                    {"name": "run", "kind": "callSignature",
                     "comment": {"tags": [{"tag": "inheritDoc", "param": "Base.run"}]}}
                ]}
            ]
        }
    ]
}"#;

const UNRESOLVED_TREE: &str = r#"{
    "name": "pkg",
    "kind": "project",
    "children": [
        {"name": "Child", "kind": "class",
         "comment": {"tags": [{"tag": "inheritdoc", "param": "Missing.symbol"}]}}
    ]
}"#;

/// Navigate a decoded tree by child names.
fn node<'a>(tree: &'a Value, path: &[&str]) -> &'a Value {
    let mut current = tree;
    for name in path {
        current = current["children"]
            .as_array()
            .unwrap()
            .iter()
            .find(|c| c["name"] == *name)
            .unwrap_or_else(|| panic!("no child named {}", name));
    }
    current
}

#[test]
fn test_resolve_copies_docs_across_inheritdoc() -> Result<()> {
    let test = CliTest::with_file("tree.json", INHERIT_TREE)?;

    let output = test.resolve_command("tree.json").output()?;
    assert!(output.status.success());

    let resolved: Value = serde_json::from_slice(&output.stdout)?;
    let sig = node(&resolved, &["Derived", "run", "run"]);
    assert_eq!(sig["comment"]["shortText"], "Runs the task.");

    let tags = sig["comment"]["tags"].as_array().unwrap();
    // The directive itself is preserved; the returns tag is inherited.
    assert!(tags.iter().any(|t| t["tag"] == "inheritdoc"));
    assert!(
        tags.iter()
            .any(|t| t["tag"] == "returns" && t["text"] == "the result")
    );

    // The source is untouched.
    let base_sig = node(&resolved, &["Base", "run", "run"]);
    assert_eq!(base_sig["comment"]["shortText"], "Runs the task.");

    Ok(())
}

#[test]
fn test_resolve_writes_output_file() -> Result<()> {
    let test = CliTest::with_file("tree.json", INHERIT_TREE)?;

    let output = test
        .resolve_command("tree.json")
        .args(["--output", "resolved.json", "--compact"])
        .output()?;
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let resolved: Value = serde_json::from_str(&test.read_file("resolved.json")?)?;
    let sig = node(&resolved, &["Derived", "run", "run"]);
    assert_eq!(sig["comment"]["shortText"], "Runs the task.");

    Ok(())
}

#[test]
fn test_unresolved_directive_is_not_an_error() -> Result<()> {
    let test = CliTest::with_file("tree.json", UNRESOLVED_TREE)?;

    let output = test.resolve_command("tree.json").output()?;
    assert!(output.status.success());

    // The tree comes back unchanged.
    let resolved: Value = serde_json::from_slice(&output.stdout)?;
    let input: Value = serde_json::from_str(UNRESOLVED_TREE)?;
    assert_eq!(resolved, input);

    Ok(())
}

#[test]
fn test_strict_mode_fails_on_skipped_directive() -> Result<()> {
    let test = CliTest::with_file("tree.json", UNRESOLVED_TREE)?;

    let output = test.resolve_command("tree.json").arg("--strict").output()?;
    assert_eq!(output.status.code(), Some(1));

    Ok(())
}

#[test]
fn test_verbose_prints_pass_summary_to_stderr() -> Result<()> {
    let test = CliTest::with_file("tree.json", INHERIT_TREE)?;

    let output = test.resolve_command("tree.json").arg("--verbose").output()?;
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("inherit-doc: 1 directive applied"), "{}", stderr);

    Ok(())
}

#[test]
fn test_missing_input_file_is_an_internal_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.resolve_command("absent.json").output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Failed to read input file"), "{}", stderr);

    Ok(())
}

#[test]
fn test_invalid_json_is_an_internal_error() -> Result<()> {
    let test = CliTest::with_file("tree.json", "{broken")?;

    let output = test.resolve_command("tree.json").output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Failed to parse reflection tree"), "{}", stderr);

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Usage:"), "{}", stdout);

    Ok(())
}
