//! Integration tests for the solar → lunisolar → natal-date path.
//!
//! Uses the arithmetic [`SyntheticCalendar`]; no ephemeris data needed.

use chrono::{DateTime, Duration, TimeZone, Utc};
use ziwei_base::{Branch, Stem};
use ziwei_calendar::{
    CalendarService, DayDivision, DivisionConfig, LunisolarDate, MonthDivision,
    SyntheticCalendar, natal_date, normalize_dst, to_local, true_solar_correction_minutes,
    true_solar_time,
};

fn cst(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap() - Duration::hours(8)
}

// ---------------------------------------------------------------------------
// Late Zi hour
// ---------------------------------------------------------------------------

#[test]
fn late_zi_hour_policies() {
    let cal = SyntheticCalendar::new();
    let raw = LunisolarDate::new(2024, 1, 1).with_time(23, 0, 0);

    let normal = natal_date(&cal, &raw, &DivisionConfig::default()).unwrap();
    assert_eq!(normal.date, LunisolarDate::new(2024, 1, 2).with_time(23, 0, 0));

    let keep = DivisionConfig {
        day: DayDivision::CurrentDayForLateHour,
        ..DivisionConfig::default()
    };
    let current = natal_date(&cal, &raw, &keep).unwrap();
    assert_eq!(current.date, raw);
}

#[test]
fn late_zi_on_year_end_changes_year() {
    let cal = SyntheticCalendar::new();
    let raw = LunisolarDate::new(2023, 12, 30).with_time(23, 15, 0);
    let n = natal_date(&cal, &raw, &DivisionConfig::default()).unwrap();
    assert_eq!(n.year, 2024);
    assert_eq!((n.stem, n.branch), (Stem::Jia, Branch::Chen));
    assert_eq!((n.month_index, n.day, n.hour_index), (0, 1, 0));
}

// ---------------------------------------------------------------------------
// Leap months
// ---------------------------------------------------------------------------

#[test]
fn late_hour_runs_before_leap_fix() {
    // Day 14 of leap month 2 at 23:00 rolls to day 15 first; day 15 at
    // hour 23 then belongs to the following month.
    let cal = SyntheticCalendar::new().with_leap_month(2023, 2);
    let raw = LunisolarDate::new(2023, 2, 14).leap().with_time(23, 0, 0);
    let n = natal_date(&cal, &raw, &DivisionConfig::default()).unwrap();
    assert_eq!((n.date.month, n.date.is_leap, n.date.day), (3, false, 15));
    assert_eq!(n.month_index, 2);

    // Same instant with the late hour kept: day 14 steps back.
    let keep = DivisionConfig {
        day: DayDivision::CurrentDayForLateHour,
        ..DivisionConfig::default()
    };
    let n = natal_date(&cal, &raw, &keep).unwrap();
    assert_eq!((n.date.month, n.date.is_leap, n.date.day), (2, false, 14));
}

#[test]
fn forced_leap_policy_from_solar() {
    let cal = SyntheticCalendar::new().with_leap_month(2001, 4);
    // Lunisolar 2001 L4/20 in the synthetic calendar.
    let leap_day = LunisolarDate::new(2001, 4, 20).leap().with_time(10, 0, 0);
    let local = cal.lunisolar_to_solar(&leap_day).unwrap();
    let lunar = cal.solar_to_lunisolar(local).unwrap();
    assert_eq!(lunar, leap_day);

    let last = DivisionConfig {
        month: MonthDivision::ForceLast,
        ..DivisionConfig::default()
    };
    assert_eq!(natal_date(&cal, &lunar, &last).unwrap().month_index, 3);
    let next = DivisionConfig {
        month: MonthDivision::ForceNext,
        ..DivisionConfig::default()
    };
    assert_eq!(natal_date(&cal, &lunar, &next).unwrap().month_index, 4);
}

// ---------------------------------------------------------------------------
// Solar corrections
// ---------------------------------------------------------------------------

#[test]
fn true_solar_reference_value() {
    let c = true_solar_correction_minutes(cst(2024, 3, 5, 8, 0), 116.38333, 8.0).unwrap();
    assert!((c + 26.3092).abs() < 0.001, "correction = {c}");
}

#[test]
fn dst_then_true_solar_then_lunisolar() {
    let cal = SyntheticCalendar::new();
    // 1988-07-01 12:00 daylight time = 11:00 standard time.
    let recorded = cst(1988, 7, 1, 12, 0);
    let standard = normalize_dst(recorded, 8.0).unwrap();
    assert_eq!(standard, cst(1988, 7, 1, 11, 0));

    let solar = true_solar_time(standard, 116.38333, 8.0).unwrap();
    let local = to_local(solar, 8.0).unwrap();
    assert_eq!(local.format("%H").to_string(), "10");
    let lunar = cal.solar_to_lunisolar(local).unwrap();
    let n = natal_date(&cal, &lunar, &DivisionConfig::default()).unwrap();
    // 10:xx falls in the Si hour (index 5).
    assert_eq!(n.hour_index, 5);
}
