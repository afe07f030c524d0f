//! Resident identity number parsing and validation
//!
//! This crate decodes the 18-character Chinese resident identity number:
//! the weighted MOD-11 checksum, the embedded `YYYYMMDD` birth date, the
//! gender parity bit, and the administrative division prefix.
//!
//! Construction is deliberately lazy: [`IdentityNumber::parse`] only
//! uppercases the input, and callers must run [`IdentityNumber::validate`]
//! before trusting the derived accessors. `raw.parse::<IdentityNumber>()`
//! is the eager alternative that rejects invalid input up front.

pub mod checksum;
pub mod division;
pub mod error;
pub mod identity;

pub use division::{DivisionCode, DivisionError};
pub use error::IdentityError;
pub use identity::{Gender, IdentityNumber, ID_LENGTH};
