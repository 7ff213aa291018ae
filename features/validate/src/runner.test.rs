use super::*;
use crate::rules::RuleConfig;
use crate::rules::Severity;
use std::fs;
use std::path::Path;

fn engine() -> RuleEngine {
    RuleEngine::new(RuleConfig::default())
}

fn write_skill(root: &Path, name: &str, content: &str) {
    let dir = root.join(name);
    fs::create_dir_all(&dir).expect("mkdir skill");
    fs::write(dir.join(SKILL_MD), content).expect("write SKILL.md");
}

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

#[test]
fn test_missing_document_yields_single_error() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let result = validate_document(tmp.path(), "ghost", &engine());

    assert_eq!(result.name, "ghost");
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].severity, Severity::Error);
    assert_eq!(result.diagnostics[0].message, "SKILL.md not found");
    assert!(!result.is_valid());
}

#[test]
fn test_clean_document_is_valid() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    write_skill(tmp.path(), "example", CLEAN_DOC);

    let result = validate_document(tmp.path(), "example", &engine());
    assert!(result.is_valid());
    assert!(result.diagnostics.is_empty());
    assert_eq!(result.error_count(), 0);
    assert_eq!(result.warning_count(), 0);
}

#[test]
fn test_deprecated_document_has_two_errors() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    write_skill(tmp.path(), "broken", DEPRECATED_DOC);

    let result = validate_document(tmp.path(), "broken", &engine());
    assert!(!result.is_valid());
    assert_eq!(result.error_count(), 2);
    assert!(
        result
            .diagnostics
            .iter()
            .any(|d| d.message == "Missing required section: ---")
    );
    assert!(
        result
            .diagnostics
            .iter()
            .any(|d| d.message.contains("should use \"nodes-base.X\" format"))
    );
}

#[test]
fn test_warnings_do_not_affect_validity() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    write_skill(tmp.path(), "prose", "## Overview\n\n---\n\nProse only.\n");

    let result = validate_document(tmp.path(), "prose", &engine());
    assert!(result.is_valid());
    assert_eq!(result.error_count(), 0);
    assert_eq!(result.warning_count(), 3);
}

#[test]
fn test_validity_tracks_error_count() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    write_skill(tmp.path(), "clean", CLEAN_DOC);
    write_skill(tmp.path(), "broken", DEPRECATED_DOC);
    write_skill(tmp.path(), "prose", "## Overview\n\n---\n\nProse only.\n");

    let eng = engine();
    for name in ["clean", "broken", "prose"] {
        let result = validate_document(tmp.path(), name, &eng);
        assert_eq!(result.is_valid(), result.error_count() == 0, "{name}");
    }
}

#[test]
fn test_validation_is_idempotent() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    write_skill(tmp.path(), "broken", DEPRECATED_DOC);

    let eng = engine();
    let first = validate_document(tmp.path(), "broken", &eng);
    let second = validate_document(tmp.path(), "broken", &eng);
    assert_eq!(first, second);
}
