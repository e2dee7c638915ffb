//! Data-only type for one tracked filesystem object.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::{Error, ErrorKind, Result};
use crate::adapters::identity::{HostIdentityResolver, IdentityResolver};
use crate::fs::meta;
use crate::ledger::format;

/// One filesystem object under management: its permission bits, canonical
/// absolute path, and symbolic owner/group names.
///
/// An `Entry` is immutable after construction. Ownership is stored by name
/// rather than numeric ID, so a round-tripped entry reflects the names that
/// were valid when it was created; identity changes between save and load
/// are not detected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    perms: u32,
    path: PathBuf,
    owner: String,
    group: String,
}

impl Entry {
    /// Build an `Entry` by inspecting a live file handle.
    ///
    /// Stats the handle for mode and numeric ownership, canonicalizes
    /// `path`, and resolves the numeric IDs to symbolic names through the
    /// host user/group database.
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::Stat` if the handle cannot be statted,
    /// `ErrorKind::PathResolution` if `path` cannot be canonicalized, and
    /// `ErrorKind::IdentityLookup` if the owning uid or gid has no matching
    /// account. Any failure aborts construction; no partial entry exists.
    pub fn from_file(file: &File, path: &Path) -> Result<Self> {
        Self::from_file_with(file, path, &HostIdentityResolver)
    }

    /// Like [`Entry::from_file`], with an injected identity resolver.
    pub fn from_file_with(file: &File, path: &Path, ids: &dyn IdentityResolver) -> Result<Self> {
        let md = file
            .metadata()
            .map_err(|e| Error::new(ErrorKind::Stat, format!("stat {}: {e}", path.display())))?;
        let abs = std::fs::canonicalize(path).map_err(|e| {
            Error::new(
                ErrorKind::PathResolution,
                format!("canonicalize {}: {e}", path.display()),
            )
        })?;
        let owner = ids.user_name(meta::uid(&md))?;
        let group = ids.group_name(meta::gid(&md))?;
        Ok(Self {
            perms: meta::perm_bits(&md),
            path: abs,
            owner,
            group,
        })
    }

    /// Assemble an entry from already-parsed fields.
    pub(crate) fn from_parts(perms: u32, path: PathBuf, owner: String, group: String) -> Self {
        Self {
            perms,
            path,
            owner,
            group,
        }
    }

    /// The nine permission bits recorded for this entry.
    #[must_use]
    pub fn perms(&self) -> u32 {
        self.perms
    }

    /// The canonical absolute path of this entry.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Symbolic name of the owning user.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Symbolic name of the owning group.
    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Render the entry as one tab-delimited line, without a trailing
    /// newline: `<perms><TAB><owner>/<group><TAB><path>`.
    ///
    /// The leading character of the permission field is always `-`; the
    /// ledger models permission bits only, never the file type.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "{}\t{}/{}\t{}",
            format::render_perms(self.perms),
            self.owner,
            self.group,
            self.path.display()
        )
    }
}
