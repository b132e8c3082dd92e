//! Validated, permission-checked user directory.
//!
//! [`Directory`] owns the records and the reference data the validators read.
//! Every operation takes the [`Requester`](roster_types::Requester) explicitly
//! and returns a [`DirectoryError`] on failure; nothing is stored globally.

mod directory;
mod error;
mod shared;
mod validate;

pub use directory::*;
pub use error::*;
pub use shared::*;
pub use validate::*;
