//! Corpus discovery.
//!
//! Lists the document directories under a corpus root. Each immediate
//! subdirectory is one document identifier; ordering is sorted by name so
//! reports are reproducible.

use std::path::Path;
use walkdir::WalkDir;

use crate::error::Result;
use crate::error::validate_error::RootNotFoundSnafu;

/// Returns the document identifiers under `root` in sorted order.
///
/// Only immediate subdirectories count; plain files in the root are
/// ignored. Inaccessible entries are logged and skipped. A missing root is
/// the one fatal condition of the whole run.
pub fn scan_documents(root: &Path) -> Result<Vec<String>> {
    if !root.is_dir() {
        return RootNotFoundSnafu {
            path: root.to_path_buf(),
        }
        .fail();
    }

    let mut names = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                tracing::debug!(
                    error = %err,
                    "skipping inaccessible entry during corpus scan"
                );
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        match entry.file_name().to_str() {
            Some(name) => names.push(name.to_string()),
            None => {
                tracing::debug!(
                    path = %entry.path().display(),
                    "skipping directory with non-UTF-8 name"
                );
            }
        }
    }

    tracing::debug!(
        root = %root.display(),
        count = names.len(),
        "scanned corpus root"
    );

    Ok(names)
}

#[cfg(test)]
#[path = "scanner.test.rs"]
mod tests;
