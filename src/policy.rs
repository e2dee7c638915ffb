//! Policy knobs governing ledger side effects.

/// Behavior toggles for the mutating ledger operations.
///
/// The defaults preserve the historical contract: a file created by
/// [`crate::List::create`] is left on disk even when tracking it fails, and
/// removing an already-absent file still drops its entries.
#[derive(Clone, Copy, Debug)]
pub struct Policy {
    /// Unlink a freshly created file when building its entry fails
    /// afterward. Off by default: the file stays on disk, untracked.
    pub unlink_on_track_failure: bool,
    /// Treat removal of an already-absent file as success and still drop
    /// its ledger entries.
    pub remove_missing_ok: bool,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            unlink_on_track_failure: false,
            remove_missing_ok: true,
        }
    }
}

impl Policy {
    /// A policy that never leaves orphans: created files are unlinked when
    /// tracking fails, and removal insists the file actually existed.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            unlink_on_track_failure: true,
            remove_missing_ok: false,
        }
    }
}
