use super::*;
use crate::metadata::extract_metadata;

fn default_engine() -> RuleEngine {
    RuleEngine::new(RuleConfig::default())
}

fn run_rules(engine: &RuleEngine, content: &str) -> Vec<Diagnostic> {
    let metadata = extract_metadata(content);
    engine.run(content, &metadata)
}

fn errors(diagnostics: &[Diagnostic]) -> Vec<&Diagnostic> {
    diagnostics.iter().filter(|d| d.is_error()).collect()
}

fn warnings(diagnostics: &[Diagnostic]) -> Vec<&Diagnostic> {
    diagnostics.iter().filter(|d| !d.is_error()).collect()
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

#[test]
fn test_clean_document_has_no_diagnostics() {
    let diagnostics = run_rules(&default_engine(), CLEAN_DOC);
    assert!(diagnostics.is_empty(), "unexpected: {diagnostics:?}");
}

#[test]
fn test_missing_required_section_is_error() {
    let engine = default_engine();
    let content = "# n8n T\n\n> **d**\n\n## Overview\n\n```\n```\n";
    let diagnostics = run_rules(&engine, content);
    assert_eq!(errors(&diagnostics).len(), 1);
    assert!(
        diagnostics
            .iter()
            .any(|d| d.message == "Missing required section: ---")
    );
}

#[test]
fn test_each_missing_section_reported() {
    let engine = default_engine();
    let content = "# n8n T\n\n> **d**\n\n```\n```\n";
    let diagnostics = run_rules(&engine, content);
    let messages: Vec<&str> = errors(&diagnostics)
        .iter()
        .map(|d| d.message.as_str())
        .collect();
    assert_eq!(
        messages,
        vec![
            "Missing required section: ## Overview",
            "Missing required section: ---",
        ]
    );
}

#[test]
fn test_title_prefix_warning() {
    let engine = default_engine();
    let content = "# Webhook Skill\n\n> **d**\n\n## Overview\n\n---\n\n```\n```\n";
    let diagnostics = run_rules(&engine, content);
    assert!(
        diagnostics
            .iter()
            .any(|d| d.message == "Title should start with \"# n8n \"")
    );
    assert!(errors(&diagnostics).is_empty());
}

#[test]
fn test_missing_description_warning() {
    let engine = default_engine();
    let content = "# n8n T\n\n## Overview\n\n---\n\n```\n```\n";
    let diagnostics = run_rules(&engine, content);
    assert!(
        diagnostics
            .iter()
            .any(|d| d.message == "Missing description blockquote (> **...**)")
    );
}

#[test]
fn test_deprecated_node_type_double_quotes() {
    let engine = default_engine();
    let content = format!("{CLEAN_DOC}\nnodeType: \"n8n-nodes-base.slack\"\n");
    let diagnostics = run_rules(&engine, &content);
    let errs = errors(&diagnostics);
    assert_eq!(errs.len(), 1);
    assert!(errs[0].message.contains("should use \"nodes-base.X\" format"));
}

#[test]
fn test_deprecated_node_type_single_quotes() {
    let engine = default_engine();
    let content = format!("{CLEAN_DOC}\nnodeType: 'n8n-nodes-base.slack'\n");
    let diagnostics = run_rules(&engine, &content);
    assert_eq!(errors(&diagnostics).len(), 1);
}

#[test]
fn test_search_format_node_type_is_allowed() {
    let engine = default_engine();
    let content = format!("{CLEAN_DOC}\nnodeType: \"nodes-base.slack\"\n");
    let diagnostics = run_rules(&engine, &content);
    assert!(errors(&diagnostics).is_empty());
}

#[test]
fn test_workflow_format_outside_tool_call_is_allowed() {
    // The workflow format is fine in prose; only the nodeType argument
    // context is reserved for the search format.
    let engine = default_engine();
    let content = format!("{CLEAN_DOC}\nWorkflows reference n8n-nodes-base.slack directly.\n");
    let diagnostics = run_rules(&engine, &content);
    assert!(errors(&diagnostics).is_empty());
}

#[test]
fn test_invalid_term_is_error() {
    let engine = default_engine();
    let content = format!("{CLEAN_DOC}\nConnect via ai_retriever.\n");
    let diagnostics = run_rules(&engine, &content);
    let errs = errors(&diagnostics);
    assert_eq!(errs.len(), 1);
    assert_eq!(
        errs[0].message,
        "ai_retriever is not a valid connection type. Use ai_textSplitter instead."
    );
}

#[test]
fn test_invalid_term_fires_once_for_repeated_uses() {
    let engine = default_engine();
    let content = format!("{CLEAN_DOC}\nai_retriever here, ai_retriever there, ai_retriever.\n");
    let diagnostics = run_rules(&engine, &content);
    assert_eq!(errors(&diagnostics).len(), 1);
}

#[test]
fn test_js_return_without_wrapper_warns() {
    let engine = default_engine();
    let content = "# n8n T\n\n> **d**\n\n## Overview\n\n---\n\n```javascript\nreturn [1, 2, 3];\n```\n";
    let diagnostics = run_rules(&engine, content);
    assert!(
        diagnostics
            .iter()
            .any(|d| d.message == "JavaScript return may be missing json wrapper")
    );
}

#[test]
fn test_js_return_with_quoted_wrapper_is_clean() {
    let engine = default_engine();
    for quoted in ["'json'", "\"json\""] {
        let content = format!(
            "# n8n T\n\n> **d**\n\n## Overview\n\n---\n\n```javascript\nreturn [{{ {quoted}: {{}} }}];\n```\n"
        );
        let diagnostics = run_rules(&engine, &content);
        assert!(
            warnings(&diagnostics).is_empty(),
            "wrapper {quoted} flagged: {diagnostics:?}"
        );
    }
}

#[test]
fn test_js_return_with_bare_key_is_clean() {
    let diagnostics = run_rules(&default_engine(), CLEAN_DOC);
    assert!(warnings(&diagnostics).is_empty());
}

#[test]
fn test_non_javascript_block_not_checked() {
    let engine = default_engine();
    let content = "# n8n T\n\n> **d**\n\n## Overview\n\n---\n\n```python\nreturn [1]\n```\n";
    let diagnostics = run_rules(&engine, content);
    assert!(
        !diagnostics
            .iter()
            .any(|d| d.message.contains("json wrapper"))
    );
}

#[test]
fn test_absolute_link_warns_with_link_cited() {
    let engine = default_engine();
    let content = format!("{CLEAN_DOC}\nSee [setup](/docs/setup.md) for details.\n");
    let diagnostics = run_rules(&engine, &content);
    assert!(
        diagnostics
            .iter()
            .any(|d| d.message == "Absolute path in link: [setup](/docs/setup.md)")
    );
}

#[test]
fn test_relative_and_external_links_are_clean() {
    let engine = default_engine();
    let content = format!(
        "{CLEAN_DOC}\nSee [a](docs/a.md) and [b](https://example.com/b) and [c](../c.md).\n"
    );
    let diagnostics = run_rules(&engine, &content);
    assert!(!diagnostics.iter().any(|d| d.message.contains("Absolute path")));
}

#[test]
fn test_multiple_absolute_links_fire_once() {
    let engine = default_engine();
    let content = format!("{CLEAN_DOC}\n[a](/one.md) then [b](/two.md)\n");
    let diagnostics = run_rules(&engine, &content);
    let offenders: Vec<&Diagnostic> = diagnostics
        .iter()
        .filter(|d| d.message.contains("Absolute path"))
        .collect();
    assert_eq!(offenders.len(), 1);
    assert!(offenders[0].message.contains("/one.md"));
}

#[test]
fn test_missing_code_examples_warns() {
    let engine = default_engine();
    let content = "# n8n T\n\n> **d**\n\n## Overview\n\n---\n\nProse only.\n";
    let diagnostics = run_rules(&engine, content);
    assert!(
        diagnostics
            .iter()
            .any(|d| d.message == "No code examples found")
    );
}

#[test]
fn test_diagnostics_preserve_table_order() {
    let engine = default_engine();
    // Violates: required section (error), title prefix (warning),
    // description (warning), code examples (warning).
    let content = "Nothing conventional here. ---\n";
    let diagnostics = run_rules(&engine, content);
    let messages: Vec<&str> = diagnostics.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Missing required section: ## Overview",
            "Title should start with \"# n8n \"",
            "Missing description blockquote (> **...**)",
            "No code examples found",
        ]
    );
}

#[test]
fn test_custom_rule_config() {
    let engine = RuleEngine::new(RuleConfig {
        required_sections: vec!["## Usage".to_string()],
        title_prefix: "# Docs ".to_string(),
        search_node_prefix: "tools.".to_string(),
        deprecated_node_prefix: "legacy-tools.".to_string(),
        invalid_terms: vec![InvalidTerm::new("old_name", "old_name was renamed.")],
    });

    let content = "# Docs Example\n\n> **d**\n\n## Usage\n\n```\n```\n";
    let diagnostics = run_rules(&engine, content);
    assert!(diagnostics.is_empty(), "unexpected: {diagnostics:?}");

    let content = "# Docs Example\n\n> **d**\n\n## Usage\n\nold_name and nodeType: \"legacy-tools.x\"\n\n```\n```\n";
    let diagnostics = run_rules(&engine, content);
    let messages: Vec<&str> = errors(&diagnostics)
        .iter()
        .map(|d| d.message.as_str())
        .collect();
    assert_eq!(
        messages,
        vec![
            "MCP tools (search_nodes, get_node) should use \"tools.X\" format, not \"legacy-tools.X\"",
            "old_name was renamed.",
        ]
    );
}

#[test]
fn test_escape_literal_handles_metacharacters() {
    assert_eq!(escape_literal("n8n-nodes-base."), r"n8n-nodes-base\.");
    assert_eq!(escape_literal("a+b*c"), r"a\+b\*c");
    assert_eq!(escape_literal("plain"), "plain");
}
