//! Pre-built Test Fixtures
//!
//! Ready-to-use identity number literals with known properties. Every
//! "valid" literal carries the check character derived from its first 17
//! digits, so fixtures stay self-consistent without recomputation at test
//! time.

use id_core::IdentityNumber;

/// Fixture for identity number test data
pub struct IdentityFixtures;

impl IdentityFixtures {
    /// A valid number: division 431022 (Hunan), born 2020-01-01, male
    pub const VALID_MALE: &'static str = "43102220200101133X";

    /// The same prefix with an even sequence digit and recomputed checksum
    pub const VALID_FEMALE: &'static str = "431022202001011348";

    /// Checksum is correct but the date segment is February 30th
    pub const IMPOSSIBLE_DATE: &'static str = "431022202002301339";

    /// [`Self::VALID_MALE`] with the check letter lowercased
    pub const VALID_MALE_LOWERCASE: &'static str = "43102220200101133x";

    /// [`Self::VALID_MALE`] with the check character flipped
    pub const WRONG_CHECKSUM: &'static str = "431022202001011331";

    /// One character short of the required 18
    pub const TOO_SHORT: &'static str = "43102220200101133";

    /// One character past the required 18
    pub const TOO_LONG: &'static str = "43102220200101133X0";

    /// A letter inside the digit-only region
    pub const NON_DIGIT: &'static str = "4310A220200101133X";

    /// Parses the canonical valid male number
    pub fn valid_male() -> IdentityNumber {
        IdentityNumber::parse(Self::VALID_MALE)
    }

    /// Parses the canonical valid female number
    pub fn valid_female() -> IdentityNumber {
        IdentityNumber::parse(Self::VALID_FEMALE)
    }

    /// Valid numbers spanning several divisions, decades, and genders
    pub fn valid_numbers() -> Vec<IdentityNumber> {
        [
            Self::VALID_MALE,
            Self::VALID_FEMALE,
            "11010519491231002X",
            "310101199003077827",
            "440301198511234513",
            "110102197602231523",
        ]
        .iter()
        .map(IdentityNumber::parse)
        .collect()
    }
}
