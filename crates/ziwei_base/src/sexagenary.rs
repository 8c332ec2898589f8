//! Sexagenary (60-unit stem/branch) year cycle and four-pillar strings.
//!
//! CE 4 is the Jia-Zi year, so the stem and branch of a CE year are
//! `(year - 4) mod 10` and `(year - 4) mod 12`.

use std::fmt;

use serde::Serialize;

use crate::branch::Branch;
use crate::error::BaseError;
use crate::stem::Stem;

/// Reference epoch: CE 4 = Jia-Zi.
pub const SEXAGENARY_EPOCH_YEAR: i32 = 4;

/// Lowest supported calendar year.
pub const MIN_YEAR: i32 = 1;

/// Highest supported calendar year.
pub const MAX_YEAR: i32 = 9999;

/// A stem/branch pair: one pillar of the four-pillar notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Parse a two-character unit like `甲子`.
    pub fn parse(unit: &str) -> Option<Self> {
        let mut chars = unit.chars();
        let stem = Stem::from_hanzi(chars.next()?)?;
        let branch = Branch::from_hanzi(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Self { stem, branch })
    }

    /// Position of this pair in the 60-unit cycle, if it is a valid pair.
    ///
    /// Only same-parity stem/branch pairs occur in the cycle.
    pub fn cycle_index(self) -> Option<u8> {
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        if (s - b).rem_euclid(2) != 0 {
            return None;
        }
        (0..60u8).find(|&i| i as i32 % 10 == s && i as i32 % 12 == b)
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem.hanzi(), self.branch.hanzi())
    }
}

/// Year, month, day and hour pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    /// Parse a compact 8-character string such as `甲子乙丑丙寅丁卯`.
    ///
    /// Surrounding whitespace is ignored. Fails with
    /// [`BaseError::PillarLength`] when the trimmed input is not 8 characters
    /// and with [`BaseError::InvalidPillar`] naming the first bad unit.
    pub fn parse(input: &str) -> Result<Self, BaseError> {
        let chars: Vec<char> = input.trim().chars().collect();
        if chars.len() != 8 {
            return Err(BaseError::PillarLength(chars.len()));
        }

        let mut pillars = [Pillar::new(Stem::Jia, Branch::Zi); 4];
        for (position, unit) in chars.chunks(2).enumerate() {
            let text: String = unit.iter().collect();
            pillars[position] = Pillar::parse(&text).ok_or_else(|| BaseError::InvalidPillar {
                unit: text.clone(),
                position,
            })?;
        }

        Ok(Self {
            year: pillars[0],
            month: pillars[1],
            day: pillars[2],
            hour: pillars[3],
        })
    }

    /// The four pillars in year, month, day, hour order.
    pub const fn as_array(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }
}

impl fmt::Display for FourPillars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

/// Stem and branch of a calendar year.
///
/// Fails with [`BaseError::YearOutOfRange`] outside `1..=9999`.
pub fn stem_branch_of_year(year: i32) -> Result<(Stem, Branch), BaseError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(BaseError::YearOutOfRange(year));
    }
    let offset = year - SEXAGENARY_EPOCH_YEAR;
    Ok((Stem::from_index(offset), Branch::from_index(offset)))
}

/// Year pillar of a calendar year.
pub fn year_pillar(year: i32) -> Result<Pillar, BaseError> {
    let (stem, branch) = stem_branch_of_year(year)?;
    Ok(Pillar::new(stem, branch))
}
