//! Day, month and year boundary policies, and the natal-date normaliser.
//!
//! Two boundaries are ambiguous in the lunisolar calendar: the Zi hour that
//! starts at 23:00 straddles two days, and a leap month has to be read as
//! either its preceding or its following ordinary month. The policies here
//! settle both. Late-hour rollover always runs before leap-month fixing.

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use ziwei_base::{Branch, Stem, hour_slot, stem_branch_of_year, wrap12};

use crate::error::CalendarError;
use crate::lunisolar::{CalendarService, LunisolarDate};

/// Days stepped to leave a leap month.
const LEAP_STEP_DAYS: i32 = 30;

/// Where the lunisolar year begins.
///
/// `SpringBased` is accepted and stored but no rule reads it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum YearDivision {
    #[default]
    Normal,
    SpringBased,
}

/// How a leap month maps onto an ordinary month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MonthDivision {
    /// Days up to the 15th belong to the previous month, later days to the next.
    #[default]
    Normal,
    /// Always the previous month.
    #[serde(alias = "last")]
    ForceLast,
    /// Always the next month.
    #[serde(alias = "next")]
    ForceNext,
}

/// How the late Zi hour (23:00-23:59) is dated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DayDivision {
    /// 23:00 already belongs to the next day.
    #[default]
    Normal,
    /// 23:00 stays on the current day.
    CurrentDayForLateHour,
}

/// The three boundary policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DivisionConfig {
    pub year: YearDivision,
    pub month: MonthDivision,
    pub day: DayDivision,
}

/// Calendar inputs of a chart after boundary normalisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NatalDate {
    pub stem: Stem,
    pub branch: Branch,
    /// Lunisolar year after normalisation.
    pub year: i32,
    /// 0-based month index.
    pub month_index: u32,
    /// Day of month 1..=30.
    pub day: u32,
    /// Hour-branch index 0..=11.
    pub hour_index: u32,
    /// The normalised date itself.
    pub date: LunisolarDate,
}

/// Roll a 23:xx time onto the next lunisolar day under [`DayDivision::Normal`].
pub fn normalize_late_hour(
    calendar: &dyn CalendarService,
    date: &LunisolarDate,
    config: &DivisionConfig,
) -> Result<LunisolarDate, CalendarError> {
    if config.day == DayDivision::Normal && date.hour == 23 {
        let next = calendar.shift_days(date, 1)?;
        trace!("late Zi hour: {date} -> {next}");
        return Ok(next.with_time(date.hour, date.minute, date.second));
    }
    Ok(*date)
}

/// Map a leap-month date onto an ordinary month by stepping 30 days.
///
/// Under [`MonthDivision::Normal`] the first half of the leap month
/// (before day 15, or day 15 outside the late Zi hour) steps back, the rest
/// steps forward.
pub fn fix_leap_month(
    calendar: &dyn CalendarService,
    date: &LunisolarDate,
    config: &DivisionConfig,
) -> Result<LunisolarDate, CalendarError> {
    if !date.is_leap {
        return Ok(*date);
    }
    let step = match config.month {
        MonthDivision::ForceLast => -LEAP_STEP_DAYS,
        MonthDivision::ForceNext => LEAP_STEP_DAYS,
        MonthDivision::Normal => {
            if date.day < 15 || (date.day == 15 && date.hour != 23) {
                -LEAP_STEP_DAYS
            } else {
                LEAP_STEP_DAYS
            }
        }
    };
    let fixed = calendar.shift_days(date, step)?;
    trace!("leap month: {date} -> {fixed}");
    Ok(fixed.with_time(date.hour, date.minute, date.second))
}

/// Normalise a raw lunisolar birth date and derive the chart's indices.
pub fn natal_date(
    calendar: &dyn CalendarService,
    date: &LunisolarDate,
    config: &DivisionConfig,
) -> Result<NatalDate, CalendarError> {
    let rolled = normalize_late_hour(calendar, date, config)?;
    let fixed = fix_leap_month(calendar, &rolled, config)?;
    let (stem, branch) = stem_branch_of_year(fixed.year)?;
    let natal = NatalDate {
        stem,
        branch,
        year: fixed.year,
        month_index: fixed.month.saturating_sub(1),
        day: fixed.day,
        hour_index: wrap12(hour_slot(fixed.hour) as i32) as u32,
        date: fixed,
    };
    debug!(
        "natal date {date} -> {fixed} (month {}, day {}, hour {})",
        natal.month_index, natal.day, natal.hour_index
    );
    Ok(natal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthetic::SyntheticCalendar;

    fn late(day: DayDivision) -> DivisionConfig {
        DivisionConfig {
            day,
            ..DivisionConfig::default()
        }
    }

    #[test]
    fn late_hour_rolls_under_normal() {
        let cal = SyntheticCalendar::new();
        let d = LunisolarDate::new(2024, 1, 1).with_time(23, 0, 0);
        let n = normalize_late_hour(&cal, &d, &late(DayDivision::Normal)).unwrap();
        assert_eq!(n, LunisolarDate::new(2024, 1, 2).with_time(23, 0, 0));
    }

    #[test]
    fn late_hour_kept_for_current_day() {
        let cal = SyntheticCalendar::new();
        let d = LunisolarDate::new(2024, 1, 1).with_time(23, 0, 0);
        let n = normalize_late_hour(&cal, &d, &late(DayDivision::CurrentDayForLateHour)).unwrap();
        assert_eq!(n, d);
    }

    #[test]
    fn hour_index_wraps_late_zi() {
        let cal = SyntheticCalendar::new();
        let d = LunisolarDate::new(2024, 1, 1).with_time(23, 30, 0);
        let normal = natal_date(&cal, &d, &late(DayDivision::Normal)).unwrap();
        assert_eq!(normal.hour_index, 0);
        assert_eq!(normal.day, 2);
        let current = natal_date(&cal, &d, &late(DayDivision::CurrentDayForLateHour)).unwrap();
        assert_eq!(current.hour_index, 0);
        assert_eq!(current.day, 1);
    }

    #[test]
    fn leap_month_threshold() {
        let cal = SyntheticCalendar::new().with_leap_month(2023, 2);
        let cfg = DivisionConfig::default();
        let early = LunisolarDate::new(2023, 2, 14).leap().with_time(10, 0, 0);
        let fixed = fix_leap_month(&cal, &early, &cfg).unwrap();
        assert_eq!((fixed.month, fixed.is_leap, fixed.day), (2, false, 14));

        let late = LunisolarDate::new(2023, 2, 16).leap();
        let fixed = fix_leap_month(&cal, &late, &cfg).unwrap();
        assert_eq!((fixed.month, fixed.is_leap, fixed.day), (3, false, 16));

        let mid = LunisolarDate::new(2023, 2, 15).leap().with_time(23, 0, 0);
        let fixed = fix_leap_month(&cal, &mid, &cfg).unwrap();
        assert_eq!(fixed.month, 3);
    }

    #[test]
    fn forced_leap_directions() {
        let cal = SyntheticCalendar::new().with_leap_month(2023, 2);
        let d = LunisolarDate::new(2023, 2, 20).leap();
        let last = DivisionConfig {
            month: MonthDivision::ForceLast,
            ..DivisionConfig::default()
        };
        let next = DivisionConfig {
            month: MonthDivision::ForceNext,
            ..DivisionConfig::default()
        };
        assert_eq!(fix_leap_month(&cal, &d, &last).unwrap().month, 2);
        assert_eq!(fix_leap_month(&cal, &d, &next).unwrap().month, 3);
    }

    #[test]
    fn non_leap_untouched() {
        let cal = SyntheticCalendar::new();
        let d = LunisolarDate::new(2023, 5, 20);
        let cfg = DivisionConfig {
            month: MonthDivision::ForceNext,
            ..DivisionConfig::default()
        };
        assert_eq!(fix_leap_month(&cal, &d, &cfg).unwrap(), d);
    }
}
