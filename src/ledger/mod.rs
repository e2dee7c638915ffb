//! The footprint ledger: an ordered, lock-guarded collection of entries.
//!
//! A [`List`] records every filesystem entry a program has placed on disk so
//! the program can later audit or remove its complete installation
//! footprint. Entries keep their insertion order, duplicates are permitted
//! (this is a log, not a set), and each ledger instance carries its own
//! reader/writer lock.

pub mod format;
pub mod persist;

use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, warn};

use crate::adapters::identity::{HostIdentityResolver, IdentityResolver};
use crate::fs::{atomic, meta};
use crate::policy::Policy;
use crate::types::entry::Entry;
use crate::types::errors::{Error, ErrorKind, Result};
use crate::types::report::{Drift, DriftRow, ValidateReport};

/// The ordered collection of entries for one logical footprint.
///
/// `List::default()` is an empty, immediately usable ledger; no explicit
/// initialization step exists. All access goes through the per-instance
/// lock: writers exclude everything, any number of readers proceed
/// together.
#[derive(Debug, Default)]
pub struct List {
    entries: RwLock<Vec<Entry>>,
    policy: Policy,
}

impl List {
    /// An empty ledger with the default [`Policy`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty ledger with an explicit [`Policy`].
    #[must_use]
    pub fn with_policy(policy: Policy) -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            policy,
        }
    }

    // Lock poisoning cannot leave the plain Vec in an inconsistent state,
    // so a poisoned guard is usable as-is.
    fn read_entries(&self) -> RwLockReadGuard<'_, Vec<Entry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_entries(&self) -> RwLockWriteGuard<'_, Vec<Entry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append an entry. No validation is performed; the entry becomes
    /// observable to readers once the write lock releases.
    pub fn add(&self, entry: Entry) {
        self.write_entries().push(entry);
    }

    /// Current number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read_entries().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read_entries().is_empty()
    }

    /// A point-in-time copy of the entries, in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Entry> {
        self.read_entries().clone()
    }

    /// Create (or truncate) a file at `path` and register it with the
    /// ledger, returning the open handle. The caller owns the handle's
    /// lifecycle from this point on.
    ///
    /// # Errors
    ///
    /// `ErrorKind::Io` if the OS refuses the creation; the ledger is not
    /// mutated. If entry construction fails after the file was created, the
    /// error propagates and the file is left on disk untracked unless
    /// [`Policy::unlink_on_track_failure`] is set.
    pub fn create(&self, path: &Path) -> Result<File> {
        self.create_with(path, &HostIdentityResolver)
    }

    /// Like [`List::create`], with an injected identity resolver.
    pub fn create_with(&self, path: &Path, ids: &dyn IdentityResolver) -> Result<File> {
        let file = File::create(path)
            .map_err(|e| Error::new(ErrorKind::Io, format!("create {}: {e}", path.display())))?;

        let entry = match Entry::from_file_with(&file, path, ids) {
            Ok(entry) => entry,
            Err(e) => {
                if self.policy.unlink_on_track_failure {
                    match atomic::unlink(path) {
                        Ok(()) => debug!("unlinked untrackable file {}", path.display()),
                        Err(ue) => warn!("orphan left at {}: unlink failed: {ue}", path.display()),
                    }
                }
                return Err(e);
            }
        };

        debug!("tracking {}", entry.path().display());
        self.add(entry);
        Ok(file)
    }

    /// Render the whole ledger: every entry's line followed by `\n`, in
    /// insertion order. An empty ledger renders to the empty string.
    ///
    /// The read lock is held for the entire traversal, so the result is a
    /// consistent snapshot.
    #[must_use]
    pub fn render(&self) -> String {
        let entries = self.read_entries();
        let mut out = String::new();
        for entry in entries.iter() {
            out.push_str(&entry.render());
            out.push('\n');
        }
        out
    }

    /// Write the rendered ledger to `w`. Produces the same bytes as
    /// [`List::render`]; the read lock is held across all writes.
    ///
    /// # Errors
    ///
    /// `ErrorKind::Io` if any write fails.
    pub fn write_to<W: Write>(&self, w: &mut W) -> Result<()> {
        let entries = self.read_entries();
        for entry in entries.iter() {
            writeln!(w, "{}", entry.render())
                .map_err(|e| Error::new(ErrorKind::Io, format!("write entry: {e}")))?;
        }
        Ok(())
    }

    /// Reconstruct a ledger from serialized text, line by line until
    /// end-of-stream. Parsing is all-or-nothing: any malformed line aborts
    /// the whole parse and no partial ledger is returned.
    ///
    /// # Errors
    ///
    /// `ErrorKind::Io` on a read failure other than clean end-of-stream;
    /// `ErrorKind::Format` on any malformed line.
    pub fn parse<R: Read>(r: R) -> Result<Self> {
        let buf = BufReader::new(r);
        let mut entries = Vec::new();
        for line in buf.lines() {
            let line = line.map_err(|e| Error::new(ErrorKind::Io, format!("read line: {e}")))?;
            entries.push(format::parse_line(&line)?);
        }
        Ok(Self {
            entries: RwLock::new(entries),
            policy: Policy::default(),
        })
    }

    /// Check every tracked entry against the live filesystem and report
    /// drift: missing paths, changed permission bits, changed ownership.
    /// Never mutates; an entry that cannot be inspected becomes a report
    /// row rather than failing the whole pass.
    #[must_use]
    pub fn validate(&self) -> ValidateReport {
        self.validate_with(&HostIdentityResolver)
    }

    /// Like [`List::validate`], with an injected identity resolver.
    #[must_use]
    pub fn validate_with(&self, ids: &dyn IdentityResolver) -> ValidateReport {
        let entries = self.read_entries();
        let mut report = ValidateReport::default();
        for entry in entries.iter() {
            report.checked += 1;
            let md = match std::fs::symlink_metadata(entry.path()) {
                Ok(md) => md,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    warn!("drift: {} is missing", entry.path().display());
                    report.drift.push(DriftRow {
                        path: entry.path().to_path_buf(),
                        drift: Drift::Missing,
                    });
                    continue;
                }
                Err(e) => {
                    report.drift.push(DriftRow {
                        path: entry.path().to_path_buf(),
                        drift: Drift::Unreadable {
                            error: e.to_string(),
                        },
                    });
                    continue;
                }
            };

            let actual = meta::perm_bits(&md);
            if actual != entry.perms() {
                warn!(
                    "drift: {} permissions {:o} -> {:o}",
                    entry.path().display(),
                    entry.perms(),
                    actual
                );
                report.drift.push(DriftRow {
                    path: entry.path().to_path_buf(),
                    drift: Drift::Permissions {
                        expected: entry.perms(),
                        actual,
                    },
                });
            }

            match (ids.user_name(meta::uid(&md)), ids.group_name(meta::gid(&md))) {
                (Ok(owner), Ok(group)) => {
                    if owner != entry.owner() || group != entry.group() {
                        report.drift.push(DriftRow {
                            path: entry.path().to_path_buf(),
                            drift: Drift::Ownership {
                                expected: format!("{}/{}", entry.owner(), entry.group()),
                                actual: format!("{owner}/{group}"),
                            },
                        });
                    }
                }
                (Err(e), _) | (_, Err(e)) => {
                    report.drift.push(DriftRow {
                        path: entry.path().to_path_buf(),
                        drift: Drift::Unreadable {
                            error: e.to_string(),
                        },
                    });
                }
            }
        }
        report
    }

    /// Unlink the file at `path` and drop every matching entry, returning
    /// the number of entries dropped (duplicates included).
    ///
    /// # Errors
    ///
    /// `ErrorKind::Io` if the unlink fails. A missing file is tolerated
    /// when [`Policy::remove_missing_ok`] is set (the default); the stale
    /// entries are still dropped. On error the ledger is untouched.
    pub fn remove(&self, path: &Path) -> Result<usize> {
        // Entries store canonical paths; resolve the argument the same way.
        // If the file is already gone, fall back to the path as given.
        let target: PathBuf =
            std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

        match atomic::unlink(&target) {
            Ok(()) => debug!("unlinked {}", target.display()),
            Err(e)
                if e.kind() == std::io::ErrorKind::NotFound
                    && self.policy.remove_missing_ok =>
            {
                debug!("remove {}: already absent", target.display());
            }
            Err(e) => {
                return Err(Error::new(
                    ErrorKind::Io,
                    format!("unlink {}: {e}", target.display()),
                ));
            }
        }

        let mut entries = self.write_entries();
        let before = entries.len();
        entries.retain(|entry| entry.path() != target);
        Ok(before - entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_value_is_usable() {
        let list = List::default();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_eq!(list.render(), "");
    }

    #[test]
    fn parse_empty_input_yields_empty_ledger() {
        let list = List::parse(std::io::empty()).expect("empty input is a valid ledger");
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn parse_keeps_file_order_and_duplicates() {
        let text = "-rw-r--r--\ta/b\t/one\n-rwxr-xr-x\tc/d\t/two\n-rw-r--r--\ta/b\t/one\n";
        let list = List::parse(text.as_bytes()).expect("well-formed");
        let entries = list.snapshot();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].path(), Path::new("/one"));
        assert_eq!(entries[1].path(), Path::new("/two"));
        assert_eq!(entries[0], entries[2]);
    }

    #[test]
    fn parse_is_all_or_nothing() {
        let text = "-rw-r--r--\ta/b\t/one\nnot a footprint line\n";
        assert_eq!(
            List::parse(text.as_bytes()).expect_err("bad second line").kind,
            ErrorKind::Format
        );
    }

    #[test]
    fn render_terminates_every_line() {
        let list = List::parse("-rw-r--r--\ta/b\t/one\n".as_bytes()).expect("well-formed");
        assert_eq!(list.render(), "-rw-r--r--\ta/b\t/one\n");
    }

    #[test]
    fn write_to_matches_render() {
        let list =
            List::parse("-rw-r--r--\ta/b\t/one\n-rwxrwxrwx\tc/d\t/two\n".as_bytes()).expect("ok");
        let mut out = Vec::new();
        list.write_to(&mut out).expect("write to vec");
        assert_eq!(out, list.render().into_bytes());
    }

    #[test]
    fn len_is_stable_without_adds() {
        let list = List::parse("-rw-r--r--\ta/b\t/one\n".as_bytes()).expect("ok");
        let n = list.len();
        assert_eq!(list.len(), n);
        assert_eq!(list.len(), n);
    }
}
