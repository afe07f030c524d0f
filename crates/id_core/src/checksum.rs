//! MOD-11 weighted checksum for identity numbers
//!
//! The first 17 digits are combined with fixed positional weights; the sum
//! modulo 11 indexes a table of eleven check characters (`'0'`-`'9'` plus
//! `'X'`). For any 17-digit prefix exactly one check character satisfies
//! the scheme.

use crate::error::IdentityError;

/// Positional weights for the first 17 digits (GB 11643-1999).
pub const WEIGHTS: [u32; 17] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];

/// Check characters indexed by the weighted sum modulo 11.
pub const CHECK_CHARS: [char; 11] = ['1', '0', 'X', '9', '8', '7', '6', '5', '4', '3', '2'];

/// Returns the check character for a 17-digit prefix.
pub fn check_char(digits: &[u8; 17]) -> char {
    let sum: u32 = digits
        .iter()
        .zip(WEIGHTS.iter())
        .map(|(&digit, &weight)| u32::from(digit) * weight)
        .sum();
    CHECK_CHARS[(sum % 11) as usize]
}

/// Computes the check character for the leading 17 characters of `prefix`.
///
/// Fails with [`IdentityError::Length`] when fewer than 17 characters are
/// present, and with [`IdentityError::NonDigit`] when one of them is not an
/// ASCII digit. Characters past the 17th are ignored, so the full
/// 18-character form can be passed as-is.
pub fn check_char_for(prefix: &str) -> Result<char, IdentityError> {
    let mut digits = [0u8; 17];
    let mut chars = prefix.chars();
    for (position, slot) in digits.iter_mut().enumerate() {
        let c = chars.next().ok_or_else(|| IdentityError::Length {
            found: prefix.chars().count(),
        })?;
        let digit = c.to_digit(10).ok_or(IdentityError::NonDigit { position })?;
        *slot = digit as u8;
    }
    Ok(check_char(&digits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_prefix_maps_to_x() {
        assert_eq!(check_char_for("43102220200101133").unwrap(), 'X');
    }

    #[test]
    fn test_extra_characters_are_ignored() {
        assert_eq!(check_char_for("43102220200101133X").unwrap(), 'X');
    }

    #[test]
    fn test_short_prefix_reports_length() {
        assert_eq!(
            check_char_for("431022"),
            Err(IdentityError::Length { found: 6 })
        );
    }

    #[test]
    fn test_non_digit_reports_position() {
        assert_eq!(
            check_char_for("4310A2202001011330"),
            Err(IdentityError::NonDigit { position: 4 })
        );
    }
}
