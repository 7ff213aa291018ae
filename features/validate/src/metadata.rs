//! Metadata extraction from document text.
//!
//! Derives a small structured summary from a document via line-anchored
//! pattern matching. Extraction is pure and total: unmatched fields fall
//! back to documented defaults, so it never fails and identical input
//! always yields identical metadata.

use regex_lite::Regex;

/// Title used when the document has no top-level heading.
pub const DEFAULT_TITLE: &str = "Unknown";

/// Description used when the document has no emphasized block quote.
pub const DEFAULT_DESCRIPTION: &str = "No description";

/// Keywords whose presence marks a document as referencing MCP tools.
const TOOL_KEYWORDS: &[&str] = &["search_nodes", "get_node", "validate_"];

/// Section marker for the related-skills listing.
const RELATED_SECTION: &str = "## Related Skills";

fn title_regex() -> Regex {
    Regex::new(r"(?m)^# (.+)$").expect("valid title regex")
}

fn description_regex() -> Regex {
    Regex::new(r"(?m)^> \*\*(.+)\*\*$").expect("valid description regex")
}

/// Structured summary of a skill document.
///
/// Derived purely from the document text; carries no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// First top-level heading, minus the marker.
    pub title: String,

    /// First `> **...**` block-quote line, minus the markers.
    pub description: String,

    /// Whether the text references any MCP tool keyword.
    pub has_tool_references: bool,

    /// Whether the text contains a fenced code block.
    pub has_code_examples: bool,

    /// Whether the text contains a related-skills section.
    pub has_related_section: bool,
}

/// Extracts [`Metadata`] from raw document text.
pub fn extract_metadata(content: &str) -> Metadata {
    let title = title_regex()
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| DEFAULT_TITLE.to_string(), |m| m.as_str().to_string());

    let description = description_regex()
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map_or_else(
            || DEFAULT_DESCRIPTION.to_string(),
            |m| m.as_str().to_string(),
        );

    Metadata {
        title,
        description,
        has_tool_references: TOOL_KEYWORDS.iter().any(|kw| content.contains(kw)),
        has_code_examples: content.contains("```"),
        has_related_section: content.contains(RELATED_SECTION),
    }
}

#[cfg(test)]
#[path = "metadata.test.rs"]
mod tests;
