//! Per-document validation orchestration.
//!
//! Ties loading, metadata extraction, and the rule engine together for one
//! document. Failures are captured as diagnostics, never propagated: a
//! document either yields its complete diagnostic list or the single
//! not-found error.

use std::path::Path;

use crate::document::SKILL_MD;
use crate::document::load_document;
use crate::metadata::extract_metadata;
use crate::rules::Diagnostic;
use crate::rules::RuleEngine;

/// The outcome of validating a single document.
///
/// Validity is derived from the diagnostic list and never stored
/// independently: a result is valid iff it contains no error-severity
/// diagnostics. Warnings do not affect validity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Document identifier (the skill directory name).
    pub name: String,

    /// All diagnostics, in rule-table order.
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    /// Returns `true` if no error-severity diagnostic was recorded.
    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }

    /// Number of error-severity diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    /// Number of warning-severity diagnostics.
    pub fn warning_count(&self) -> usize {
        self.diagnostics.len() - self.error_count()
    }
}

/// Validates one document under `root`.
///
/// A missing document yields exactly one error diagnostic and skips
/// extraction and rules entirely; otherwise the full rule table runs and
/// every diagnostic is collected.
pub fn validate_document(root: &Path, name: &str, engine: &RuleEngine) -> ValidationResult {
    let Some(document) = load_document(root, name) else {
        return ValidationResult {
            name: name.to_string(),
            diagnostics: vec![Diagnostic::error(format!("{SKILL_MD} not found"))],
        };
    };

    let metadata = extract_metadata(&document.content);
    let diagnostics = engine.run(&document.content, &metadata);

    ValidationResult {
        name: document.name,
        diagnostics,
    }
}

#[cfg(test)]
#[path = "runner.test.rs"]
mod tests;
