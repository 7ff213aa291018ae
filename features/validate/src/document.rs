//! Document loading from skill directories.
//!
//! Each skill directory is expected to contain a `SKILL.md` file with the
//! document text. Absence is a signal, not an error: the caller records a
//! "not found" diagnostic and the rest of the corpus still validates.

use std::fs;
use std::path::Path;

/// The expected document file name in each skill directory.
pub const SKILL_MD: &str = "SKILL.md";

/// A skill document loaded from disk.
///
/// Immutable once loaded; owned by the validation pass that loaded it and
/// discarded when that pass completes.
#[derive(Debug, Clone)]
pub struct SkillDocument {
    /// Document identifier (the skill directory name).
    pub name: String,

    /// Raw text content of `SKILL.md`.
    pub content: String,
}

/// Loads the document for `name` from under `root`.
///
/// Reads `<root>/<name>/SKILL.md`. Returns `None` when the file does not
/// exist or cannot be read; read failures are logged at debug level and
/// treated the same as absence so one unreadable document cannot abort the
/// run.
pub fn load_document(root: &Path, name: &str) -> Option<SkillDocument> {
    let md_path = root.join(name).join(SKILL_MD);

    match fs::read_to_string(&md_path) {
        Ok(content) => Some(SkillDocument {
            name: name.to_string(),
            content,
        }),
        Err(err) => {
            tracing::debug!(
                path = %md_path.display(),
                error = %err,
                "failed to read skill document"
            );
            None
        }
    }
}

#[cfg(test)]
#[path = "document.test.rs"]
mod tests;
