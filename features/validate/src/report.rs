//! Report formatting and corpus-wide aggregation.
//!
//! The [`Reporter`] is a pure formatting layer over any [`Write`] sink, so
//! the engine stays testable without a console. [`run_report`] drives the
//! whole pipeline: scan, validate each document, print its status line,
//! and fold everything into a [`Summary`].

use std::io;
use std::io::Write;
use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Style;
use snafu::ResultExt;

use crate::error::Result;
use crate::error::validate_error::IoSnafu;
use crate::rules::RuleEngine;
use crate::rules::Severity;
use crate::runner::ValidationResult;
use crate::runner::validate_document;
use crate::scanner::scan_documents;

const BANNER: &str = "============================================================";
const REPORT_TITLE: &str = "Skill Validation Report";

/// Aggregate totals over a validation run.
///
/// Accumulated by a single sequential fold; owned exclusively by the run
/// that builds it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Documents processed.
    pub documents: usize,

    /// Total error-severity diagnostics across all documents.
    pub errors: usize,

    /// Total warning-severity diagnostics across all documents.
    pub warnings: usize,
}

impl Summary {
    /// Folds one document result into the totals.
    pub fn record(&mut self, result: &ValidationResult) {
        self.documents += 1;
        self.errors += result.error_count();
        self.warnings += result.warning_count();
    }

    /// Returns `true` if any document produced an error.
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}

/// Formats the validation report onto a [`Write`] sink.
pub struct Reporter<W> {
    out: W,
    color: bool,
}

impl<W: Write> Reporter<W> {
    /// Creates a reporter. ANSI styling is applied only when `color` is
    /// set.
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    fn styled(&self, text: &str, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    /// Writes the report banner.
    pub fn header(&mut self) -> io::Result<()> {
        writeln!(self.out, "{BANNER}")?;
        writeln!(self.out, "{REPORT_TITLE}")?;
        writeln!(self.out, "{BANNER}")?;
        writeln!(self.out)
    }

    /// Writes one document's status line and its diagnostics.
    pub fn document(&mut self, result: &ValidationResult) -> io::Result<()> {
        let status = if result.is_valid() {
            self.styled("PASS", Style::new().green())
        } else {
            self.styled("FAIL", Style::new().red())
        };
        writeln!(self.out, "[{status}] {}", result.name)?;

        for diagnostic in &result.diagnostics {
            let line = match diagnostic.severity {
                Severity::Error => self.styled(
                    &format!("ERROR: {}", diagnostic.message),
                    Style::new().red(),
                ),
                Severity::Warning => self.styled(
                    &format!("WARN: {}", diagnostic.message),
                    Style::new().yellow(),
                ),
            };
            writeln!(self.out, "    {line}")?;
        }

        Ok(())
    }

    /// Writes the trailing summary block.
    pub fn summary(&mut self, summary: &Summary) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{BANNER}")?;
        writeln!(self.out, "Summary: {} skills validated", summary.documents)?;
        writeln!(self.out, "  Errors: {}", summary.errors)?;
        writeln!(self.out, "  Warnings: {}", summary.warnings)?;
        writeln!(self.out, "{BANNER}")
    }
}

/// Validates every document under `root`, printing the report as it goes.
///
/// Documents are processed one at a time in sorted order. Returns the
/// folded [`Summary`]; the caller derives the process exit status from it.
/// The only fatal conditions are a missing root and an unwritable sink.
pub fn run_report<W: Write>(
    root: &Path,
    engine: &RuleEngine,
    reporter: &mut Reporter<W>,
) -> Result<Summary> {
    let names = scan_documents(root)?;

    reporter.header().context(IoSnafu {
        message: "write report",
    })?;

    let mut summary = Summary::default();
    for name in &names {
        let result = validate_document(root, name, engine);
        reporter.document(&result).context(IoSnafu {
            message: "write report",
        })?;
        summary.record(&result);
    }

    reporter.summary(&summary).context(IoSnafu {
        message: "write report",
    })?;

    Ok(summary)
}

#[cfg(test)]
#[path = "report.test.rs"]
mod tests;
