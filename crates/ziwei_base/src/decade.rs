//! Ten-year life periods ("da xian") and the flowing-year overlay.
//!
//! Decade `i` (0..12) sits at ring position `main + direction * i` and covers
//! ages `[s + 10i, s + 10i + 9]`, where `s` is the five-element scheme value.
//! Ages are nominal (the birth year counts as age 1).

use serde::Serialize;

use crate::branch::Branch;
use crate::cycle::{jump, wrap12};
use crate::palace::PALACE_COUNT;
use crate::stem::{Gender, Stem};

/// Years per decade.
pub const DECADE_YEARS: u32 = 10;

/// Inclusive nominal-age window of one decade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecadeRange {
    pub start: u32,
    pub end: u32,
}

impl DecadeRange {
    pub const fn contains(self, age: i32) -> bool {
        age >= self.start as i32 && age <= self.end as i32
    }
}

/// One flowing-year entry; `year == 0 && age == 0` marks an empty slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct YearlyEntry {
    pub year: i32,
    pub age: u32,
}

impl YearlyEntry {
    pub const EMPTY: Self = Self { year: 0, age: 0 };

    pub const fn is_empty(self) -> bool {
        self.year == 0 && self.age == 0
    }
}

/// `+1` (clockwise) when gender polarity matches the year-stem polarity,
/// otherwise `-1`.
pub const fn decade_direction(year_stem: Stem, gender: Gender) -> i32 {
    if gender.polarity().index() == year_stem.polarity().index() {
        1
    } else {
        -1
    }
}

/// Age window of every ring position.
pub fn decade_ranges(main: usize, direction: i32, scheme_value: u8) -> [DecadeRange; PALACE_COUNT] {
    let mut ranges = [DecadeRange { start: 0, end: 0 }; PALACE_COUNT];
    for i in 0..PALACE_COUNT as u32 {
        let position = jump(main, direction * i as i32);
        let start = scheme_value as u32 + DECADE_YEARS * i;
        ranges[position] = DecadeRange {
            start,
            end: start + DECADE_YEARS - 1,
        };
    }
    ranges
}

/// Ring position where the flowing years of a decade begin.
///
/// The birth-year branch holds age 1; the decade's first year sits
/// `start_age - 1` positions further on.
pub const fn yearly_start_index(birth_year_branch: Branch, start_age: u32) -> usize {
    wrap12(birth_year_branch.ring_position() as i32 + start_age as i32 - 1)
}

/// Flowing-year entry of ring position `position` within a decade.
///
/// Only the ten positions from `yearly_start` onward carry a year; the other
/// two are [`YearlyEntry::EMPTY`].
pub const fn yearly_entry(
    position: usize,
    yearly_start: usize,
    birth_year: i32,
    start_age: u32,
) -> YearlyEntry {
    let offset = wrap12(position as i32 - yearly_start as i32) as u32;
    if offset >= DECADE_YEARS {
        return YearlyEntry::EMPTY;
    }
    YearlyEntry {
        year: birth_year + start_age as i32 + offset as i32 - 1,
        age: start_age + offset,
    }
}

/// Position whose window contains `age`, falling back to 0.
pub fn active_decade_index(ranges: &[DecadeRange], age: i32) -> usize {
    ranges.iter().position(|r| r.contains(age)).unwrap_or(0)
}

/// Nominal age in a given lunisolar year.
pub const fn nominal_age(year: i32, birth_year: i32) -> i32 {
    year - birth_year + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_by_polarity() {
        // Jia is a Yang stem.
        assert_eq!(decade_direction(Stem::Jia, Gender::Male), 1);
        assert_eq!(decade_direction(Stem::Jia, Gender::Female), -1);
        assert_eq!(decade_direction(Stem::Yi, Gender::Female), 1);
        assert_eq!(decade_direction(Stem::Yi, Gender::Male), -1);
    }

    #[test]
    fn ranges_cover_120_years_without_gaps() {
        for direction in [1, -1] {
            for value in 2..=6u8 {
                let ranges = decade_ranges(5, direction, value);
                let mut starts: Vec<u32> = ranges.iter().map(|r| r.start).collect();
                starts.sort_unstable();
                for (i, s) in starts.iter().enumerate() {
                    assert_eq!(*s, value as u32 + 10 * i as u32);
                }
                assert!(ranges.iter().all(|r| r.end == r.start + 9));
            }
        }
    }

    #[test]
    fn ranges_walk_direction() {
        let ranges = decade_ranges(3, -1, 4);
        assert_eq!(ranges[3], DecadeRange { start: 4, end: 13 });
        assert_eq!(ranges[2], DecadeRange { start: 14, end: 23 });
        assert_eq!(ranges[4], DecadeRange { start: 114, end: 123 });
    }

    #[test]
    fn yearly_overlay() {
        // Birth branch Chen sits at ring 2; decade starting at age 4.
        let start = yearly_start_index(Branch::Chen, 4);
        assert_eq!(start, 5);
        let first = yearly_entry(5, start, 2000, 4);
        assert_eq!(first, YearlyEntry { year: 2003, age: 4 });
        let last = yearly_entry(2, start, 2000, 4);
        assert_eq!(last, YearlyEntry { year: 2012, age: 13 });
        assert!(yearly_entry(3, start, 2000, 4).is_empty());
        assert!(yearly_entry(4, start, 2000, 4).is_empty());
    }

    #[test]
    fn active_index_fallback() {
        let ranges = decade_ranges(0, 1, 2);
        assert_eq!(active_decade_index(&ranges, 2), 0);
        assert_eq!(active_decade_index(&ranges, 35), 3);
        assert_eq!(active_decade_index(&ranges, 1), 0);
        assert_eq!(active_decade_index(&ranges, 500), 0);
    }
}
