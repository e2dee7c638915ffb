//! Load and save a ledger at a filesystem path.
//!
//! The serialized text is just a snapshot; no cross-process synchronization
//! is provided. Two processes saving to the same path may race.

use std::fs::File;
use std::path::Path;

use crate::fs::atomic;
use crate::types::errors::{Error, ErrorKind, Result};

use super::List;

/// Durably persist the rendered ledger at `path` (atomic replace plus
/// parent-directory fsync).
///
/// # Errors
///
/// `ErrorKind::Io` if any write step fails.
pub fn save(list: &List, path: &Path) -> Result<()> {
    let text = list.render();
    atomic::write_atomic(path, text.as_bytes())
        .map_err(|e| Error::new(ErrorKind::Io, format!("save {}: {e}", path.display())))
}

/// Read a previously saved ledger back from `path`.
///
/// # Errors
///
/// `ErrorKind::Io` if the file cannot be opened or read;
/// `ErrorKind::Format` if its contents are malformed.
pub fn load(path: &Path) -> Result<List> {
    let f = File::open(path)
        .map_err(|e| Error::new(ErrorKind::Io, format!("open {}: {e}", path.display())))?;
    List::parse(f)
}
