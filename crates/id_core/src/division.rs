//! Administrative division codes
//!
//! The leading six digits of an identity number follow the GB/T 2260
//! layout: digits one and two name the province-level region, digits three
//! and four the prefecture-level city (01-20 and 51-70 for province-run
//! cities, 21-50 for regions and leagues), and digits five and six the
//! county.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when reading a division code
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DivisionError {
    /// The code is not exactly 6 characters long
    #[error("division code must be 6 digits, found {found} characters")]
    Length { found: usize },

    /// A character in the code is not an ASCII digit
    #[error("non-digit character at position {position}")]
    NonDigit { position: usize },
}

/// A six-digit administrative division code
///
/// Stored as its numeric value; `Display` restores the zero-padded form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DivisionCode(u32);

impl DivisionCode {
    /// Returns the numeric value of the full six-digit code
    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// Province-level segment (digits one and two)
    pub fn province(&self) -> u32 {
        self.0 / 10_000
    }

    /// Prefecture-level segment (digits three and four)
    pub fn prefecture(&self) -> u32 {
        self.0 / 100 % 100
    }

    /// County-level segment (digits five and six)
    pub fn county(&self) -> u32 {
        self.0 % 100
    }

    /// English name of the province-level region, when the province segment
    /// is an assigned GB/T 2260 top-level code
    pub fn province_name(&self) -> Option<&'static str> {
        let name = match self.province() {
            11 => "Beijing",
            12 => "Tianjin",
            13 => "Hebei",
            14 => "Shanxi",
            15 => "Inner Mongolia",
            21 => "Liaoning",
            22 => "Jilin",
            23 => "Heilongjiang",
            31 => "Shanghai",
            32 => "Jiangsu",
            33 => "Zhejiang",
            34 => "Anhui",
            35 => "Fujian",
            36 => "Jiangxi",
            37 => "Shandong",
            41 => "Henan",
            42 => "Hubei",
            43 => "Hunan",
            44 => "Guangdong",
            45 => "Guangxi",
            46 => "Hainan",
            50 => "Chongqing",
            51 => "Sichuan",
            52 => "Guizhou",
            53 => "Yunnan",
            54 => "Tibet",
            61 => "Shaanxi",
            62 => "Gansu",
            63 => "Qinghai",
            64 => "Ningxia",
            65 => "Xinjiang",
            71 => "Taiwan",
            81 => "Hong Kong",
            82 => "Macau",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for DivisionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06}", self.0)
    }
}

impl FromStr for DivisionCode {
    type Err = DivisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = s.chars().count();
        if count != 6 {
            return Err(DivisionError::Length { found: count });
        }
        let mut value = 0u32;
        for (position, c) in s.chars().enumerate() {
            let digit = c.to_digit(10).ok_or(DivisionError::NonDigit { position })?;
            value = value * 10 + digit;
        }
        Ok(Self(value))
    }
}
