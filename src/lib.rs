#![forbid(unsafe_code)]
//! Footprint: a ledger of every filesystem entry a program places on disk.
//!
//! Programs that install or generate files can register each one with a
//! [`List`]; the ledger can later be rendered to a stable tab-separated text
//! format (one entry per line, in the style of CRUX `.footprint` files),
//! parsed back, checked against the live filesystem, or used to remove
//! tracked files again.
//!
//! Model highlights:
//! - An [`Entry`] is immutable once constructed and stores symbolic
//!   owner/group names, not numeric IDs, so the persisted text stays
//!   human-readable.
//! - Each `List` guards its entries with its own reader/writer lock; the
//!   zero value (`List::default()`) is immediately usable.
//! - Identity lookups go through the [`adapters::IdentityResolver`] seam.
//! - This crate forbids `unsafe` and uses `rustix` for syscalls. Unix-only.

pub mod adapters;
pub mod constants;
pub mod fs;
pub mod ledger;
pub mod policy;
pub mod types;

pub use ledger::{persist, List};
pub use policy::Policy;
pub use types::{Entry, Error, ErrorKind, Result};
