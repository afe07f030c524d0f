//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random identity numbers
//! that maintain the structural invariants: digit-only prefixes, real
//! embedded calendar dates, and check characters derived from the prefix.

use chrono::NaiveDate;
use id_core::checksum;
use proptest::prelude::*;

/// Strategy for generating plausible birth dates (1900 through 2099)
pub fn birth_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2100, 1u32..=12, 1u32..=28).prop_map(|(year, month, day)| {
        NaiveDate::from_ymd_opt(year, month, day).expect("days 1-28 exist in every month")
    })
}

/// Strategy for generating six-digit division code values
pub fn division_code_strategy() -> impl Strategy<Value = u32> {
    110_000u32..830_000
}

/// Strategy for generating three-digit sequence codes
pub fn sequence_code_strategy() -> impl Strategy<Value = u32> {
    0u32..1000
}

/// Strategy for generating 17-digit prefixes with a real embedded date
pub fn digit_prefix_strategy() -> impl Strategy<Value = String> {
    (
        division_code_strategy(),
        birth_date_strategy(),
        sequence_code_strategy(),
    )
        .prop_map(|(division, date, sequence)| {
            format!("{:06}{}{:03}", division, date.format("%Y%m%d"), sequence)
        })
}

/// Strategy for generating fully valid 18-character identity numbers
pub fn valid_identity_strategy() -> impl Strategy<Value = String> {
    digit_prefix_strategy().prop_map(|prefix| {
        let check = checksum::check_char_for(&prefix).expect("prefix is 17 digits");
        format!("{}{}", prefix, check)
    })
}
