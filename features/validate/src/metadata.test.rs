use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_title_extracted() {
    let meta = extract_metadata("# n8n Webhook Skill\n\nBody text.\n");
    assert_eq!(meta.title, "n8n Webhook Skill");
}

#[test]
fn test_title_takes_first_heading() {
    let meta = extract_metadata("# First Title\n\n# Second Title\n");
    assert_eq!(meta.title, "First Title");
}

#[test]
fn test_title_default_when_absent() {
    let meta = extract_metadata("No heading here.\n\n## Only a subsection\n");
    assert_eq!(meta.title, DEFAULT_TITLE);
}

#[test]
fn test_subsection_is_not_a_title() {
    // "## Overview" must not match the top-level heading pattern
    let meta = extract_metadata("## Overview\n\ncontent\n");
    assert_eq!(meta.title, DEFAULT_TITLE);
}

#[test]
fn test_description_extracted() {
    let meta = extract_metadata("# T\n\n> **Polls an HTTP endpoint on a schedule**\n");
    assert_eq!(meta.description, "Polls an HTTP endpoint on a schedule");
}

#[test]
fn test_description_default_when_absent() {
    let meta = extract_metadata("# T\n\n> plain quote, not emphasized\n");
    assert_eq!(meta.description, DEFAULT_DESCRIPTION);
}

#[test]
fn test_tool_reference_flags() {
    assert!(extract_metadata("call search_nodes first").has_tool_references);
    assert!(extract_metadata("then get_node details").has_tool_references);
    assert!(extract_metadata("run validate_workflow on it").has_tool_references);
    assert!(!extract_metadata("no tool mentions here").has_tool_references);
}

#[test]
fn test_code_example_flag() {
    assert!(extract_metadata("```javascript\nreturn [];\n```\n").has_code_examples);
    assert!(!extract_metadata("inline `code` only\n").has_code_examples);
}

#[test]
fn test_related_section_flag() {
    assert!(extract_metadata("## Related Skills\n\n- other\n").has_related_section);
    assert!(!extract_metadata("## Overview\n").has_related_section);
}

#[test]
fn test_extraction_is_deterministic() {
    let content = "# n8n Slack Skill\n\n> **Sends messages**\n\n```js\n```\n";
    assert_eq!(extract_metadata(content), extract_metadata(content));
}

#[test]
fn test_empty_input_yields_defaults() {
    let meta = extract_metadata("");
    assert_eq!(meta.title, DEFAULT_TITLE);
    assert_eq!(meta.description, DEFAULT_DESCRIPTION);
    assert!(!meta.has_tool_references);
    assert!(!meta.has_code_examples);
    assert!(!meta.has_related_section);
}
