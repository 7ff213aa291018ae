//! Rule checks for document validation.
//!
//! A fixed, ordered table of independent checks. Each rule consumes the
//! raw document text (and, where relevant, the extracted [`Metadata`]) and
//! contributes zero or more [`Diagnostic`]s. Rules never depend on each
//! other's output; the aggregate list preserves table order so reports are
//! reproducible.
//!
//! A rule that matches several places in one document still fires once:
//! multiplicity decides whether the rule triggers, not how many
//! diagnostics it emits.

use regex_lite::Regex;

use crate::metadata::Metadata;

/// Severity of a reported issue.
///
/// Errors gate the corpus verdict; warnings are advisory only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// One reported issue: a severity plus a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    /// Creates an error-severity diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Creates a warning-severity diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    /// Returns `true` if this diagnostic has error severity.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// A known-invalid vocabulary term and the message reported when it is
/// found in a document.
#[derive(Debug, Clone)]
pub struct InvalidTerm {
    pub term: String,
    pub message: String,
}

impl InvalidTerm {
    pub fn new(term: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            message: message.into(),
        }
    }
}

/// Immutable configuration for the rule table.
///
/// Injected at engine construction so rule sets are swappable in tests.
/// The defaults carry the canonical corpus conventions.
#[derive(Debug, Clone)]
pub struct RuleConfig {
    /// Section markers every document must contain.
    pub required_sections: Vec<String>,

    /// Leading phrase every document title is expected to start with.
    pub title_prefix: String,

    /// Node-type prefix expected in MCP tool arguments.
    pub search_node_prefix: String,

    /// Workflow-format node-type prefix that must not appear as an MCP
    /// tool argument.
    pub deprecated_node_prefix: String,

    /// Retired vocabulary terms that must not appear at all.
    pub invalid_terms: Vec<InvalidTerm>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            required_sections: vec!["## Overview".to_string(), "---".to_string()],
            title_prefix: "# n8n ".to_string(),
            search_node_prefix: "nodes-base.".to_string(),
            deprecated_node_prefix: "n8n-nodes-base.".to_string(),
            invalid_terms: vec![InvalidTerm::new(
                "ai_retriever",
                "ai_retriever is not a valid connection type. Use ai_textSplitter instead.",
            )],
        }
    }
}

/// Runs the fixed rule table over a document.
///
/// Patterns derived from the configuration are compiled once at
/// construction time.
pub struct RuleEngine {
    config: RuleConfig,
    deprecated_node_type: Regex,
    js_block: Regex,
    markdown_link: Regex,
}

impl RuleEngine {
    /// Creates an engine with the given rule configuration.
    pub fn new(config: RuleConfig) -> Self {
        let deprecated_node_type = Regex::new(&format!(
            r#"nodeType:\s*["']{}"#,
            escape_literal(&config.deprecated_node_prefix)
        ))
        .expect("valid node type regex");
        let js_block = Regex::new(r"(?s)```javascript.*?```").expect("valid code block regex");
        let markdown_link = Regex::new(r"\[[^\]]*\]\(([^)]+)\)").expect("valid link regex");

        Self {
            config,
            deprecated_node_type,
            js_block,
            markdown_link,
        }
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Runs every rule in table order, collecting all diagnostics.
    pub fn run(&self, content: &str, metadata: &Metadata) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        self.check_required_sections(content, &mut diagnostics);
        self.check_title_prefix(content, &mut diagnostics);
        self.check_description(content, &mut diagnostics);
        self.check_deprecated_node_types(content, &mut diagnostics);
        self.check_invalid_terms(content, &mut diagnostics);
        self.check_code_blocks(content, &mut diagnostics);
        self.check_links(content, &mut diagnostics);
        self.check_code_examples(metadata, &mut diagnostics);

        diagnostics
    }

    /// Every configured section marker must appear somewhere in the text.
    fn check_required_sections(&self, content: &str, diagnostics: &mut Vec<Diagnostic>) {
        for section in &self.config.required_sections {
            if !content.contains(section.as_str()) {
                diagnostics.push(Diagnostic::error(format!(
                    "Missing required section: {section}"
                )));
            }
        }
    }

    /// The document is expected to open with the configured title phrase.
    fn check_title_prefix(&self, content: &str, diagnostics: &mut Vec<Diagnostic>) {
        if !content.starts_with(&self.config.title_prefix) {
            diagnostics.push(Diagnostic::warning(format!(
                "Title should start with \"{}\"",
                self.config.title_prefix
            )));
        }
    }

    /// A `> **...**` description line must be present.
    fn check_description(&self, content: &str, diagnostics: &mut Vec<Diagnostic>) {
        if !content.contains("> **") {
            diagnostics.push(Diagnostic::warning(
                "Missing description blockquote (> **...**)",
            ));
        }
    }

    /// The workflow-format node-type prefix must not be passed to MCP
    /// tools, which expect the search format.
    fn check_deprecated_node_types(&self, content: &str, diagnostics: &mut Vec<Diagnostic>) {
        if self.deprecated_node_type.is_match(content) {
            diagnostics.push(Diagnostic::error(format!(
                "MCP tools (search_nodes, get_node) should use \"{}X\" format, not \"{}X\"",
                self.config.search_node_prefix, self.config.deprecated_node_prefix
            )));
        }
    }

    /// Retired vocabulary terms are rejected wherever they appear.
    fn check_invalid_terms(&self, content: &str, diagnostics: &mut Vec<Diagnostic>) {
        for invalid in &self.config.invalid_terms {
            if content.contains(invalid.term.as_str()) {
                diagnostics.push(Diagnostic::error(invalid.message.clone()));
            }
        }
    }

    /// JavaScript examples returning item arrays must wrap each item in a
    /// `json` key (quoted or bare).
    fn check_code_blocks(&self, content: &str, diagnostics: &mut Vec<Diagnostic>) {
        let fired = self.js_block.find_iter(content).any(|block| {
            let text = block.as_str();
            text.contains("return [") && !has_json_wrapper(text)
        });

        if fired {
            diagnostics.push(Diagnostic::warning(
                "JavaScript return may be missing json wrapper",
            ));
        }
    }

    /// Internal markdown links must be relative, not absolute paths.
    fn check_links(&self, content: &str, diagnostics: &mut Vec<Diagnostic>) {
        for caps in self.markdown_link.captures_iter(content) {
            let Some(target) = caps.get(1) else { continue };
            if target.as_str().starts_with('/') {
                let link = caps.get(0).map_or("", |m| m.as_str());
                diagnostics.push(Diagnostic::warning(format!("Absolute path in link: {link}")));
                break;
            }
        }
    }

    /// Documents without any fenced code block get flagged.
    fn check_code_examples(&self, metadata: &Metadata, diagnostics: &mut Vec<Diagnostic>) {
        if !metadata.has_code_examples {
            diagnostics.push(Diagnostic::warning("No code examples found"));
        }
    }
}

/// Returns `true` if a code block carries the `json` wrapper key in either
/// quoting style or as a bare object key.
fn has_json_wrapper(block: &str) -> bool {
    block.contains("'json'") || block.contains("\"json\"") || block.contains("json:")
}

/// Escapes regex metacharacters so a configured literal can be embedded in
/// a pattern.
fn escape_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(
            c,
            '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
#[path = "rules.test.rs"]
mod tests;
