//! Target directory probing for project creation.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// What currently lives at a path the scaffolder wants to write into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    /// Nothing exists at the path yet.
    Missing,
    /// The path is a directory with no entries.
    Empty,
    /// The path is a directory holding at least one entry.
    NotEmpty,
}

/// Stat the path and, if it is a directory, check whether it has entries.
///
/// "Not found" maps to [`TargetState::Missing`]; every other I/O error
/// (permissions, the path being a regular file, ...) is returned as-is.
pub fn probe_target(path: &Path) -> std::io::Result<TargetState> {
    match fs::metadata(path) {
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(TargetState::Missing),
        Err(e) => return Err(e),
    }

    let mut entries = fs::read_dir(path)?;
    match entries.next() {
        None => Ok(TargetState::Empty),
        Some(entry) => {
            entry?;
            Ok(TargetState::NotEmpty)
        }
    }
}
