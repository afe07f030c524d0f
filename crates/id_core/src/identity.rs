//! The identity number value type
//!
//! [`IdentityNumber`] wraps a raw character sequence without validating it:
//! [`IdentityNumber::parse`] only uppercases the input so a trailing `x`
//! check letter compares equal to `X`. Callers must run
//! [`IdentityNumber::validate`] before trusting the positional accessors;
//! the `FromStr` impl bundles both steps for callers that want to fail
//! fast.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::checksum;
use crate::division::{DivisionCode, DivisionError};
use crate::error::IdentityError;

/// Length of an identity number in characters
pub const ID_LENGTH: usize = 18;

/// Gender encoded by the sequence-code parity digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// An 18-character resident identity number
///
/// Positions 1-6 carry the administrative division code, 7-14 the birth
/// date as `YYYYMMDD`, 15-17 the per-day sequence code whose last digit
/// encodes gender, and 18 the MOD-11 check character.
///
/// The value is immutable once constructed. Accessors that slice into the
/// raw string re-check bounds and report [`IdentityError::Length`] on a
/// value that is too short, so calling them on an unvalidated number is
/// safe but not meaningful - run [`IdentityNumber::validate`] first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityNumber {
    raw: String,
}

impl IdentityNumber {
    /// Wraps a raw character sequence, uppercasing it so a lowercase `x`
    /// check letter is normalized to `X`.
    ///
    /// Never fails; no checks beyond the normalization are performed.
    pub fn parse(raw: impl AsRef<str>) -> Self {
        Self {
            raw: raw.as_ref().to_uppercase(),
        }
    }

    /// Returns the normalized raw string
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Checks the value against the full set of structural rules.
    ///
    /// Checks run in a fixed order and stop at the first failure:
    /// character count, digit composition of the first 17 positions, the
    /// weighted checksum, then the embedded calendar date. A value failing
    /// several rules at once therefore reports the earliest failing kind
    /// in that order.
    pub fn validate(&self) -> Result<(), IdentityError> {
        let count = self.raw.chars().count();
        if count != ID_LENGTH {
            return Err(IdentityError::Length { found: count });
        }

        let mut digits = [0u8; 17];
        for (position, c) in self.raw.chars().take(ID_LENGTH - 1).enumerate() {
            let digit = c
                .to_digit(10)
                .ok_or(IdentityError::NonDigit { position })?;
            digits[position] = digit as u8;
        }

        let expected = checksum::check_char(&digits);
        let found = self
            .raw
            .chars()
            .nth(ID_LENGTH - 1)
            .ok_or(IdentityError::Length { found: count })?;
        if found != expected {
            return Err(IdentityError::Checksum { expected, found });
        }

        self.birth_date().map(|_| ())
    }

    /// Returns true when [`IdentityNumber::validate`] succeeds
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Returns the six-character administrative division prefix verbatim.
    ///
    /// Performs no validation beyond confirming the characters exist;
    /// a shorter value reports [`IdentityError::Length`].
    pub fn administrative_code(&self) -> Result<&str, IdentityError> {
        self.raw.get(..6).ok_or(IdentityError::Length {
            found: self.raw.chars().count(),
        })
    }

    /// Returns the administrative division prefix as a typed code
    pub fn division(&self) -> Result<DivisionCode, IdentityError> {
        let count = self.raw.chars().count();
        let code = self.administrative_code()?;
        code.parse().map_err(|err| match err {
            DivisionError::Length { .. } => IdentityError::Length { found: count },
            DivisionError::NonDigit { position } => IdentityError::NonDigit { position },
        })
    }

    /// Parses positions 7-14 as a `YYYYMMDD` calendar date.
    ///
    /// Does not re-run the checksum; a segment that is present but does
    /// not denote a real date (month 13, February 30th) reports
    /// [`IdentityError::InvalidDate`].
    pub fn birth_date(&self) -> Result<NaiveDate, IdentityError> {
        let segment: String = self.raw.chars().skip(6).take(8).collect();
        if segment.chars().count() != 8 {
            return Err(IdentityError::Length {
                found: self.raw.chars().count(),
            });
        }
        NaiveDate::parse_from_str(&segment, "%Y%m%d")
            .map_err(|_| IdentityError::InvalidDate { segment })
    }

    /// Whole years elapsed from the embedded birth date to `on`.
    ///
    /// Returns 0 when `on` precedes the birth date.
    pub fn age_on(&self, on: NaiveDate) -> Result<u32, IdentityError> {
        let birth = self.birth_date()?;
        let mut age = on.year() - birth.year();

        // Adjust if the birthday hasn't occurred yet that year
        if (on.month(), on.day()) < (birth.month(), birth.day()) {
            age -= 1;
        }

        Ok(age.max(0) as u32)
    }

    /// Gender encoded by the parity of the sequence digit at position 17.
    ///
    /// An even digit reports [`Gender::Female`]; an odd digit reports
    /// [`Gender::Male`]. A missing or unreadable character also reports
    /// `Male` - the scheme's lenient default, kept deliberately so this
    /// accessor never fails.
    pub fn gender(&self) -> Gender {
        match self.raw.chars().nth(16).and_then(|c| c.to_digit(10)) {
            Some(digit) if digit % 2 == 0 => Gender::Female,
            _ => Gender::Male,
        }
    }
}

impl fmt::Display for IdentityNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl AsRef<str> for IdentityNumber {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl FromStr for IdentityNumber {
    type Err = IdentityError;

    /// Eager construction: normalizes and validates in one step
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = Self::parse(s);
        id.validate()?;
        Ok(id)
    }
}

impl Serialize for IdentityNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for IdentityNumber {
    /// Deserializes through [`IdentityNumber::parse`]: the value is
    /// normalized but not validated, matching the lazy construction
    /// contract.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uppercases_check_letter() {
        let id = IdentityNumber::parse("43102220200101133x");
        assert_eq!(id.as_str(), "43102220200101133X");
    }

    #[test]
    fn test_display_matches_raw() {
        let id = IdentityNumber::parse("43102220200101133X");
        assert_eq!(id.to_string(), "43102220200101133X");
    }

    #[test]
    fn test_gender_defaults_to_male_on_unreadable_digit() {
        assert_eq!(IdentityNumber::parse("").gender(), Gender::Male);
        assert_eq!(IdentityNumber::parse("4310222020010113?X").gender(), Gender::Male);
    }
}
