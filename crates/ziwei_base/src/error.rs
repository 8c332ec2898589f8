//! Error types for cycle arithmetic and chart rules.

use thiserror::Error;

/// Errors from the base rules: range checks and pillar parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BaseError {
    /// Calendar year outside 1..=9999.
    #[error("year {0} outside supported range 1..=9999")]
    YearOutOfRange(i32),
    /// Wraparound requested with a zero or negative modulus.
    #[error("modulus must be positive, got {0}")]
    InvalidModulus(i32),
    /// Four-pillar string is not exactly 8 characters.
    #[error("four-pillar input must be 8 characters like 甲子乙丑丙寅丁卯, got {0}")]
    PillarLength(usize),
    /// A two-character unit is not a stem followed by a branch.
    #[error("invalid pillar \"{unit}\" at position {position}")]
    InvalidPillar { unit: String, position: usize },
    /// A ring or cycle index fell outside its table.
    #[error("{what} index {index} out of range")]
    IndexOutOfRange { what: &'static str, index: i64 },
}
