//! Lunisolar dates and the calendar-conversion service contract.
//!
//! Converting between the Gregorian and the Chinese lunisolar calendar is
//! delegated to a [`CalendarService`]. The engine only ever asks it to
//! convert, shift by whole days and enumerate pillar matches; it never
//! derives month lengths or leap months itself.

use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;
use ziwei_base::FourPillars;

use crate::error::CalendarError;

/// A lunisolar date with wall-clock time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LunisolarDate {
    /// Lunisolar year (the Gregorian year in which it starts).
    pub year: i32,
    /// Month number 1..=12.
    pub month: u32,
    /// Whether this is the intercalary repeat of `month`.
    pub is_leap: bool,
    /// Day of month 1..=30.
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl LunisolarDate {
    /// Ordinary (non-leap) month at midnight.
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            is_leap: false,
            day,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }

    /// Same date, marked as falling in the leap month.
    pub const fn leap(mut self) -> Self {
        self.is_leap = true;
        self
    }

    /// Same date at another time of day.
    pub const fn with_time(mut self, hour: u32, minute: u32, second: u32) -> Self {
        self.hour = hour;
        self.minute = minute;
        self.second = second;
        self
    }

    /// Month number, negated for a leap month.
    pub const fn month_with_leap(&self) -> i32 {
        if self.is_leap {
            -(self.month as i32)
        } else {
            self.month as i32
        }
    }

    /// Time-of-day fields as a tuple.
    pub const fn time(&self) -> (u32, u32, u32) {
        (self.hour, self.minute, self.second)
    }
}

impl fmt::Display for LunisolarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let leap = if self.is_leap { "L" } else { "" };
        write!(
            f,
            "{}-{leap}{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// External lunisolar calendar oracle.
///
/// All wall-clock values are local civil time; the caller applies any
/// timezone, DST or true-solar-time correction before asking.
pub trait CalendarService: Send + Sync {
    /// Lunisolar date of a local wall-clock instant. The time of day is
    /// carried over unchanged.
    fn solar_to_lunisolar(&self, local: NaiveDateTime) -> Result<LunisolarDate, CalendarError>;

    /// Local wall-clock instant of a lunisolar date and time.
    fn lunisolar_to_solar(&self, date: &LunisolarDate) -> Result<NaiveDateTime, CalendarError>;

    /// Move by whole lunisolar days, keeping the time of day.
    fn shift_days(&self, date: &LunisolarDate, days: i32) -> Result<LunisolarDate, CalendarError>;

    /// Year, month, day and hour pillars of a lunisolar date.
    fn four_pillars(&self, date: &LunisolarDate) -> Result<FourPillars, CalendarError>;

    /// Local instants whose four pillars equal `pillars`, for Gregorian
    /// years `start_year..=end_year`, in ascending order.
    fn solar_times_for_pillars(
        &self,
        pillars: &FourPillars,
        start_year: i32,
        end_year: i32,
    ) -> Result<Vec<NaiveDateTime>, CalendarError>;
}
