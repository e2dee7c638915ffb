//! Durable-write and unlink primitives used by the ledger.
//!
//! Persisting a ledger follows the usual atomic-replace sequence: write to a
//! temporary sibling, fsync the file, rename into place, fsync the parent
//! directory.

use std::fs;
use std::io::Write;
use std::path::Path;

use rustix::fs::{unlinkat, AtFlags, CWD};
use rustix::io::Errno;

use crate::constants::TMP_SUFFIX;

fn errno_to_io(e: Errno) -> std::io::Error {
    std::io::Error::from_raw_os_error(e.raw_os_error())
}

/// Fsync the parent directory of `path` for durability.
///
/// # Errors
///
/// Returns an IO error if the parent directory cannot be opened or fsynced.
pub(crate) fn fsync_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        let dir = fs::File::open(parent)?;
        dir.sync_all()?;
    }
    Ok(())
}

/// Unlink the file at `path`.
///
/// # Errors
///
/// Returns an IO error if the unlink fails; `ErrorKind::NotFound` when the
/// path is already absent.
pub(crate) fn unlink(path: &Path) -> std::io::Result<()> {
    unlinkat(CWD, path, AtFlags::empty()).map_err(errno_to_io)
}

/// Replace the contents of `path` with `bytes` via a temporary sibling and
/// rename, so readers never observe a half-written ledger.
///
/// # Errors
///
/// Returns an IO error from any step; the temporary file is removed on a
/// failed rename.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let fname = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("footprint");
    let pid = std::process::id();
    let tmp = path.with_file_name(format!(".{fname}.{pid}{TMP_SUFFIX}"));

    let mut f = fs::File::create(&tmp)?;
    f.write_all(bytes)?;
    f.sync_all()?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = unlink(&tmp);
        return Err(e);
    }
    fsync_parent_dir(path)?;
    Ok(())
}
