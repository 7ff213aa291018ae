//! Error extension trait and helpers.
//!
//! [`ErrorExt`] is implemented by every crate-level error enum in the
//! workspace so callers can classify an error without matching on the
//! concrete type. [`PlainError`] and [`boxed`] wrap ad-hoc errors that
//! need a status code but no dedicated variant.

use std::any::Any;
use std::error::Error;
use std::fmt;

use crate::status_code::StatusCode;

/// Extension trait for workspace error types.
pub trait ErrorExt: Error {
    /// The status code classifying this error.
    fn status_code(&self) -> StatusCode {
        StatusCode::Unknown
    }

    /// Downcast support.
    fn as_any(&self) -> &dyn Any;

    /// Message suitable for end-user output.
    ///
    /// Errors whose status code is flagged for logging carry internal
    /// detail that should not reach the user; those render as an opaque
    /// code reference instead.
    fn output_msg(&self) -> String
    where
        Self: Sized,
    {
        let code = self.status_code();
        if code.should_log_error() {
            format!("Internal error: {}", code as i32)
        } else {
            self.to_string()
        }
    }

    /// Whether retrying the failed operation may succeed.
    fn is_retryable(&self) -> bool {
        self.status_code().is_retryable()
    }
}

/// A plain message error with an attached status code.
#[derive(Debug)]
pub struct PlainError {
    message: String,
    status_code: StatusCode,
}

impl PlainError {
    /// Creates a new plain error.
    pub fn new(message: impl Into<String>, status_code: StatusCode) -> Self {
        Self {
            message: message.into(),
            status_code,
        }
    }
}

impl fmt::Display for PlainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for PlainError {}

impl ErrorExt for PlainError {
    fn status_code(&self) -> StatusCode {
        self.status_code
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// An external error wrapped with a status code, preserving the source.
#[derive(Debug)]
pub struct BoxedError {
    source: Box<dyn Error + Send + Sync>,
    status_code: StatusCode,
}

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl Error for BoxedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl ErrorExt for BoxedError {
    fn status_code(&self) -> StatusCode {
        self.status_code
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Wraps an arbitrary error with a status code.
pub fn boxed(source: impl Error + Send + Sync + 'static, status_code: StatusCode) -> BoxedError {
    BoxedError {
        source: Box::new(source),
        status_code,
    }
}

#[cfg(test)]
#[path = "ext.test.rs"]
mod tests;
