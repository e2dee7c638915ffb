//! Error types used across the footprint crate.
use thiserror::Error;

/// High-level error categories for entry construction and ledger operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("stat failed")]
    Stat,
    #[error("path resolution failed")]
    PathResolution,
    #[error("identity lookup failed")]
    IdentityLookup,
    #[error("malformed footprint text")]
    Format,
    #[error("io error")]
    Io,
}

/// Structured error with a kind and human message.
///
/// The message carries the diagnosable context (offending line, offending
/// byte, or underlying OS error text) for the failure.
#[derive(Debug, Error)]
#[error("{kind}: {msg}")]
pub struct Error {
    pub kind: ErrorKind,
    pub msg: String,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self {
            kind,
            msg: msg.into(),
        }
    }
}

/// Convenient alias for results returning a `types::Error`.
pub type Result<T> = std::result::Result<T, Error>;
