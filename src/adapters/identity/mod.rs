pub mod host;
pub use host::HostIdentityResolver;

use crate::types::errors::Result;

/// Resolves numeric user and group IDs to their symbolic names.
///
/// The ledger stores names, not IDs; this is the seam through which they are
/// obtained at entry-construction time.
pub trait IdentityResolver: Send + Sync {
    /// Resolve a numeric user ID to its account name.
    /// # Errors
    /// Returns an error if the uid has no matching account.
    fn user_name(&self, uid: u32) -> Result<String>;

    /// Resolve a numeric group ID to its group name.
    /// # Errors
    /// Returns an error if the gid has no matching group.
    fn group_name(&self, gid: u32) -> Result<String>;
}
