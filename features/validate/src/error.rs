//! Error types for the validation engine.

use skillcheck_error::ErrorExt;
use skillcheck_error::Location;
use skillcheck_error::StatusCode;
use snafu::Snafu;
use std::any::Any;
use std::path::PathBuf;

/// Validation engine error type.
///
/// Per-document problems are never errors; they are recorded as
/// [`crate::Diagnostic`]s. Only environmental conditions (missing corpus
/// root, unwritable report sink) surface here.
///
/// Use snafu context selectors from the `validate_error` module within the
/// crate:
/// ```ignore
/// use crate::error::validate_error::*;
/// use snafu::ResultExt;
///
/// // Wrapping std::io::Error
/// writeln!(out, "...").context(IoSnafu { message: "write report" })?;
///
/// // For errors without a source, use .fail()
/// return RootNotFoundSnafu { path }.fail();
/// ```
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)), module)]
pub enum ValidateError {
    /// The corpus root directory does not exist.
    #[snafu(display("Skills directory not found: {}", path.display()))]
    RootNotFound {
        path: PathBuf,
        #[snafu(implicit)]
        location: Location,
    },

    /// I/O error (wraps std::io::Error).
    #[snafu(display("IO error: {message}"))]
    Io {
        message: String,
        #[snafu(source)]
        source: std::io::Error,
        #[snafu(implicit)]
        location: Location,
    },
}

impl ErrorExt for ValidateError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::RootNotFound { .. } => StatusCode::FileNotFound,
            Self::Io { .. } => StatusCode::IoError,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Result type alias for validation operations.
pub type Result<T> = std::result::Result<T, ValidateError>;
