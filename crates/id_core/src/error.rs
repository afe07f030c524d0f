//! Validation errors for identity numbers

use thiserror::Error;

/// Errors produced while validating or decoding an identity number
///
/// Validation stops at the first failing check, so a value failing several
/// checks at once reports exactly one of these kinds (see
/// [`IdentityNumber::validate`](crate::IdentityNumber::validate) for the
/// order).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// The value is not exactly 18 characters long
    #[error("identity number must be 18 characters, found {found}")]
    Length { found: usize },

    /// A character among the first 17 positions is not an ASCII digit
    #[error("non-digit character at position {position}")]
    NonDigit { position: usize },

    /// The checksum character does not match the weighted check
    #[error("checksum mismatch: expected {expected}, found {found}")]
    Checksum { expected: char, found: char },

    /// The embedded birth date segment is not a real calendar date
    #[error("invalid birth date segment: {segment}")]
    InvalidDate { segment: String },
}
