//! End-to-end tests for the skillcheck binary.

use assert_cmd::Command;
use std::fs;
use std::path::Path;

const CLEAN_DOC: &str = r#"# n8n Example Skill

> **Example skill for polling workflows**

## Overview

Demonstrates a minimal polling workflow.

---

```javascript
return [{json: {}}];
```
"#;

const DEPRECATED_DOC: &str = r#"# n8n Broken Skill

> **Uses the workflow node-type format in tool calls**

## Overview

```javascript
nodeType: "n8n-nodes-base.slack"
```
"#;

fn write_skill(root: &Path, name: &str, content: &str) {
    let dir = root.join(name);
    fs::create_dir_all(&dir).expect("create skill dir");
    fs::write(dir.join("SKILL.md"), content).expect("write SKILL.md");
}

fn skillcheck() -> Command {
    let mut cmd = Command::cargo_bin("skillcheck").expect("binary builds");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_clean_corpus_passes() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    write_skill(tmp.path(), "example", CLEAN_DOC);

    let output = skillcheck()
        .arg(tmp.path())
        .output()
        .expect("run skillcheck");

    assert!(output.status.success(), "expected exit 0: {output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[PASS] example"));
    assert!(stdout.contains("Summary: 1 skills validated"));
    assert!(stdout.contains("  Errors: 0"));
    assert!(stdout.contains("  Warnings: 0"));
}

#[test]
fn test_deprecated_node_type_fails_the_run() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    write_skill(tmp.path(), "broken", DEPRECATED_DOC);

    let output = skillcheck()
        .arg(tmp.path())
        .output()
        .expect("run skillcheck");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[FAIL] broken"));
    assert_eq!(stdout.matches("ERROR:").count(), 2);
    assert!(stdout.contains("ERROR: Missing required section: ---"));
    assert!(stdout.contains("should use \"nodes-base.X\" format"));
    assert!(stdout.contains("  Errors: 2"));
}

#[test]
fn test_warnings_alone_exit_zero() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    write_skill(tmp.path(), "prose", "## Overview\n\n---\n\nProse only.\n");

    let output = skillcheck()
        .arg(tmp.path())
        .output()
        .expect("run skillcheck");

    assert!(output.status.success(), "warnings must not gate: {output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[PASS] prose"));
    assert!(stdout.contains("WARN:"));
    assert!(stdout.contains("  Errors: 0"));
}

#[test]
fn test_mixed_corpus_sorted_and_counted() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    write_skill(tmp.path(), "zeta", CLEAN_DOC);
    write_skill(tmp.path(), "alpha", DEPRECATED_DOC);

    let output = skillcheck()
        .arg(tmp.path())
        .output()
        .expect("run skillcheck");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);

    let alpha = stdout.find("[FAIL] alpha").expect("alpha line");
    let zeta = stdout.find("[PASS] zeta").expect("zeta line");
    assert!(alpha < zeta, "documents must be reported in sorted order");
    assert!(stdout.contains("Summary: 2 skills validated"));
}

#[test]
fn test_empty_root_exits_zero() {
    let tmp = tempfile::tempdir().expect("create temp dir");

    let output = skillcheck()
        .arg(tmp.path())
        .output()
        .expect("run skillcheck");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Summary: 0 skills validated"));
    assert!(stdout.contains("  Errors: 0"));
    assert!(stdout.contains("  Warnings: 0"));
}

#[test]
fn test_missing_root_is_fatal() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let missing = tmp.path().join("no-such-dir");

    let output = skillcheck()
        .arg(&missing)
        .output()
        .expect("run skillcheck");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Skills directory not found"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("[PASS]"));
    assert!(!stdout.contains("[FAIL]"));
}
