//! Shared error infrastructure for the skillcheck workspace.
//!
//! Provides a unified [`StatusCode`] registry for classifying errors and
//! the [`ErrorExt`] trait implemented by every crate-level error type.

mod ext;
mod status_code;

pub use ext::BoxedError;
pub use ext::ErrorExt;
pub use ext::PlainError;
pub use ext::boxed;
pub use status_code::StatusCategory;
pub use status_code::StatusCode;
pub use status_code::StatusMeta;

// Snafu's implicit location is the workspace-wide convention for error
// construction sites.
pub use snafu::Location;
