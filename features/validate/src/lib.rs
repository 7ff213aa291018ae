//! Validation engine for skill-definition documents.
//!
//! This crate implements a rule-based consistency checker for a corpus of
//! skill documents (one `SKILL.md` per skill directory):
//! - Loading raw document text from skill directories
//! - Extracting lightweight metadata (title, description, feature flags)
//! - Running a fixed, ordered set of independent rule checks
//! - Aggregating per-document diagnostics into a corpus-wide report
//!
//! # Architecture
//!
//! Documents flow through a pipeline:
//!
//! 1. **Scan** - [`scanner`] lists the document directories under a root
//! 2. **Load** - [`document`] reads each directory's `SKILL.md`
//! 3. **Extract** - [`metadata`] derives a [`Metadata`] summary from the text
//! 4. **Check** - [`rules::RuleEngine`] produces [`Diagnostic`]s per document
//! 5. **Report** - [`report`] folds results into a [`Summary`] and formats
//!    the console report
//!
//! Per-document failures are captured as data (diagnostics) and never abort
//! the run; only a missing corpus root is fatal.

pub mod document;
pub mod metadata;
pub mod report;
pub mod rules;
pub mod runner;
pub mod scanner;

mod error;

// Re-export primary types
pub use document::SkillDocument;
pub use document::load_document;
pub use metadata::Metadata;
pub use metadata::extract_metadata;
pub use report::Reporter;
pub use report::Summary;
pub use report::run_report;
pub use rules::Diagnostic;
pub use rules::InvalidTerm;
pub use rules::RuleConfig;
pub use rules::RuleEngine;
pub use rules::Severity;
pub use runner::ValidationResult;
pub use runner::validate_document;
pub use scanner::scan_documents;

// Re-export the error type
pub use error::Result;
pub use error::ValidateError;
