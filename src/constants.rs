//! Shared crate-wide constants for the footprint ledger.
//!
//! Centralizes the magic values of the serialized text format.
//! Adjusting these here will propagate through the crate.

/// Length of a symbolic permission string, e.g. `drwxr-xr-x`.
pub const PERM_STRING_LEN: usize = 10;

/// Separator between the three fields of a serialized entry line.
pub const FIELD_SEPARATOR: char = '\t';

/// Separator between the owner and group names inside the ownership field.
pub const OWNER_SEPARATOR: char = '/';

/// Mask selecting the nine permission bits the ledger models.
pub const MODE_MASK: u32 = 0o777;

/// Temporary filename suffix used when persisting a ledger atomically.
/// The temporary name is constructed as `.{fname}.{pid}{TMP_SUFFIX}`.
pub const TMP_SUFFIX: &str = ".footprint.tmp";
