//! An arithmetic lunisolar calendar for deterministic tests and benchmarks.
//!
//! Every month has 30 days and every year 12 months, plus at most one
//! configured leap month per year that repeats its ordinary month. Lunisolar
//! day 2000-01-01 falls on Gregorian 2000-01-01 and both calendars share the
//! time of day. The day pillar counts from Jia-Zi on that epoch day; month
//! and hour pillars follow the Five Tigers and Five Rats rules.
//!
//! This is not an astronomical calendar: real conversions belong to a
//! [`CalendarService`] backed by ephemeris tables.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use ziwei_base::{
    Branch, FourPillars, Pillar, Stem, hour_slot, palace_stems_and_branches, wrap12, year_pillar,
};

use crate::error::CalendarError;
use crate::lunisolar::{CalendarService, LunisolarDate};

const EPOCH_YEAR: i32 = 2000;
const DAYS_PER_MONTH: i64 = 30;
const MONTHS_PER_YEAR: u32 = 12;

/// Arithmetic 30-day-month calendar.
#[derive(Debug, Clone, Default)]
pub struct SyntheticCalendar {
    leap_months: BTreeMap<i32, u32>,
}

impl SyntheticCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a leap repeat of `month` into `year` (one per year).
    pub fn with_leap_month(mut self, year: i32, month: u32) -> Self {
        self.leap_months.insert(year, month);
        self
    }

    fn epoch() -> Result<NaiveDate, CalendarError> {
        NaiveDate::from_ymd_opt(EPOCH_YEAR, 1, 1)
            .ok_or_else(|| CalendarError::Service("invalid epoch".to_string()))
    }

    /// `(month, is_leap)` slots of a year in order.
    fn month_slots(&self, year: i32) -> Vec<(u32, bool)> {
        let leap = self.leap_months.get(&year).copied();
        let mut slots = Vec::with_capacity(13);
        for m in 1..=MONTHS_PER_YEAR {
            slots.push((m, false));
            if leap == Some(m) {
                slots.push((m, true));
            }
        }
        slots
    }

    fn year_len(&self, year: i32) -> i64 {
        self.month_slots(year).len() as i64 * DAYS_PER_MONTH
    }

    /// Days since the epoch of a lunisolar date.
    fn day_number(&self, date: &LunisolarDate) -> Result<i64, CalendarError> {
        if date.day == 0 || date.day as i64 > DAYS_PER_MONTH {
            return Err(CalendarError::Service(format!("day out of range: {date}")));
        }
        let slot = self
            .month_slots(date.year)
            .iter()
            .position(|&s| s == (date.month, date.is_leap))
            .ok_or_else(|| CalendarError::Service(format!("no such month: {date}")))?;

        let mut days = 0i64;
        if date.year >= EPOCH_YEAR {
            for y in EPOCH_YEAR..date.year {
                days += self.year_len(y);
            }
        } else {
            for y in date.year..EPOCH_YEAR {
                days -= self.year_len(y);
            }
        }
        Ok(days + slot as i64 * DAYS_PER_MONTH + date.day as i64 - 1)
    }

    fn date_at_day_number(&self, mut n: i64) -> LunisolarDate {
        let mut year = EPOCH_YEAR;
        while n < 0 {
            year -= 1;
            n += self.year_len(year);
        }
        while n >= self.year_len(year) {
            n -= self.year_len(year);
            year += 1;
        }
        let slots = self.month_slots(year);
        let (month, is_leap) = slots[(n / DAYS_PER_MONTH) as usize];
        LunisolarDate {
            year,
            month,
            is_leap,
            day: (n % DAYS_PER_MONTH) as u32 + 1,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }

    fn day_pillar(day_number: i64) -> Pillar {
        let n = day_number.rem_euclid(60) as i32;
        Pillar::new(Stem::from_index(n), Branch::from_index(n))
    }

    /// Five Rats: the Zi-hour stem follows the day stem.
    fn hour_pillar(day_stem: Stem, hour_index: u32) -> Pillar {
        let start = (day_stem.index() % 5) as i32 * 2;
        Pillar::new(
            Stem::from_index(start + hour_index as i32),
            Branch::from_index(hour_index as i32),
        )
    }
}

impl CalendarService for SyntheticCalendar {
    fn solar_to_lunisolar(&self, local: NaiveDateTime) -> Result<LunisolarDate, CalendarError> {
        let n = (local.date() - Self::epoch()?).num_days();
        Ok(self
            .date_at_day_number(n)
            .with_time(local.hour(), local.minute(), local.second()))
    }

    fn lunisolar_to_solar(&self, date: &LunisolarDate) -> Result<NaiveDateTime, CalendarError> {
        let n = self.day_number(date)?;
        let day = Self::epoch()?
            .checked_add_signed(chrono::Duration::days(n))
            .ok_or_else(|| CalendarError::Service(format!("date out of range: {date}")))?;
        day.and_hms_opt(date.hour, date.minute, date.second)
            .ok_or_else(|| CalendarError::Service(format!("invalid time: {date}")))
    }

    fn shift_days(&self, date: &LunisolarDate, days: i32) -> Result<LunisolarDate, CalendarError> {
        let n = self.day_number(date)? + days as i64;
        Ok(self
            .date_at_day_number(n)
            .with_time(date.hour, date.minute, date.second))
    }

    fn four_pillars(&self, date: &LunisolarDate) -> Result<FourPillars, CalendarError> {
        let n = self.day_number(date)?;
        let year = year_pillar(date.year)?;
        let month = palace_stems_and_branches(year.stem)[(date.month - 1) as usize];
        let day = Self::day_pillar(n);
        let hour_index = wrap12(hour_slot(date.hour) as i32) as u32;
        Ok(FourPillars {
            year,
            month,
            day,
            hour: Self::hour_pillar(day.stem, hour_index),
        })
    }

    fn solar_times_for_pillars(
        &self,
        pillars: &FourPillars,
        start_year: i32,
        end_year: i32,
    ) -> Result<Vec<NaiveDateTime>, CalendarError> {
        let mut found = Vec::new();
        for year in start_year..=end_year {
            if year_pillar(year)? != pillars.year {
                continue;
            }
            let months = palace_stems_and_branches(pillars.year.stem);
            for (month, is_leap) in self.month_slots(year) {
                if months[(month - 1) as usize] != pillars.month {
                    continue;
                }
                for day in 1..=DAYS_PER_MONTH as u32 {
                    let date = LunisolarDate {
                        is_leap,
                        ..LunisolarDate::new(year, month, day)
                    };
                    let n = self.day_number(&date)?;
                    let day_pillar = Self::day_pillar(n);
                    if day_pillar != pillars.day {
                        continue;
                    }
                    for hour_index in 0..12u32 {
                        if Self::hour_pillar(day_pillar.stem, hour_index) == pillars.hour {
                            let hour = hour_index * 2;
                            found.push(self.lunisolar_to_solar(&date.with_time(hour, 0, 0))?);
                        }
                    }
                }
            }
        }
        Ok(found)
    }
}
