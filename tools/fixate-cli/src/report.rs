//! Report artifact writers.

use std::path::Path;

use fixate_common::{FixateError, FixateResult};

/// Write a text artifact, labeling failures with what was being written.
pub fn write_text(path: &Path, contents: &str, what: &str) -> FixateResult<()> {
    std::fs::write(path, contents).map_err(|e| {
        FixateError::report(format!("failed to write {what} to {}: {e}", path.display()))
    })
}
