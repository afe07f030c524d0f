//! Tests for the MOD-11 weighted checksum
//!
//! The key property: for any 17-digit prefix with a real embedded date,
//! exactly one of the eleven check characters produces a valid number and
//! every other one is rejected as a checksum mismatch.

use id_core::checksum::{self, CHECK_CHARS, WEIGHTS};
use id_core::{IdentityError, IdentityNumber};
use proptest::prelude::*;
use test_utils::generators;

#[test]
fn test_tables_have_the_standard_shape() {
    assert_eq!(WEIGHTS.len(), 17);
    assert_eq!(CHECK_CHARS.len(), 11);
    // Remainder 2 is the only one mapped to a letter.
    assert_eq!(CHECK_CHARS[2], 'X');
}

#[test]
fn test_check_char_for_known_vectors() {
    assert_eq!(checksum::check_char_for("43102220200101133").unwrap(), 'X');
    assert_eq!(checksum::check_char_for("43102220200101134").unwrap(), '8');
    assert_eq!(checksum::check_char_for("11010519491231002").unwrap(), 'X');
    assert_eq!(checksum::check_char_for("31010119900307782").unwrap(), '7');
}

#[test]
fn test_check_char_over_digit_array() {
    let digits = [4, 3, 1, 0, 2, 2, 2, 0, 2, 0, 0, 1, 0, 1, 1, 3, 3];
    assert_eq!(checksum::check_char(&digits), 'X');
}

#[test]
fn test_short_prefix_is_a_length_error() {
    assert_eq!(
        checksum::check_char_for("123"),
        Err(IdentityError::Length { found: 3 })
    );
}

#[test]
fn test_non_digit_prefix_reports_position() {
    assert_eq!(
        checksum::check_char_for("4310222020010113X0"),
        Err(IdentityError::NonDigit { position: 16 })
    );
}

proptest! {
    #[test]
    fn prop_exactly_one_check_char_validates(prefix in generators::digit_prefix_strategy()) {
        let expected = checksum::check_char_for(&prefix).unwrap();
        let mut passing = 0;
        for &candidate in CHECK_CHARS.iter() {
            let id = IdentityNumber::parse(format!("{}{}", prefix, candidate));
            match id.validate() {
                Ok(()) => {
                    prop_assert_eq!(candidate, expected);
                    passing += 1;
                }
                Err(IdentityError::Checksum { expected: reported, found }) => {
                    prop_assert_eq!(reported, expected);
                    prop_assert_eq!(found, candidate);
                }
                Err(other) => {
                    prop_assert!(false, "unexpected error kind: {:?}", other);
                }
            }
        }
        prop_assert_eq!(passing, 1);
    }
}
