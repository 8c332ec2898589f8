//! Fixed-offset conversion between UTC instants and local wall-clock time.
//!
//! Offsets are hours east of UTC and may be fractional (e.g. 5.5, 9.5).
//! Offsets outside [-14, 14] or non-finite are rejected.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};

use crate::error::CalendarError;

/// Default civil offset (China Standard Time).
pub const DEFAULT_TIMEZONE_HOURS: f64 = 8.0;

/// Largest accepted offset magnitude, in hours.
pub const MAX_TIMEZONE_HOURS: i32 = 14;

/// Validate a timezone offset.
pub fn check_timezone(tz_hours: f64) -> Result<f64, CalendarError> {
    let max = MAX_TIMEZONE_HOURS as f64;
    if tz_hours.is_finite() && (-max..=max).contains(&tz_hours) {
        Ok(tz_hours)
    } else {
        Err(CalendarError::OutOfRange {
            quantity: "timezone",
            value: tz_hours.to_string(),
            min: -MAX_TIMEZONE_HOURS,
            max: MAX_TIMEZONE_HOURS,
        })
    }
}

/// An hour offset as a duration, rounded to the millisecond.
///
/// Callers pass offsets that went through [`check_timezone`].
pub fn offset_duration(tz_hours: f64) -> Duration {
    Duration::milliseconds((tz_hours * 3_600_000.0).round() as i64)
}

/// Local wall-clock time of a UTC instant.
pub fn to_local(instant: DateTime<Utc>, tz_hours: f64) -> Result<NaiveDateTime, CalendarError> {
    let offset = offset_duration(check_timezone(tz_hours)?);
    instant
        .naive_utc()
        .checked_add_signed(offset)
        .ok_or_else(|| CalendarError::Overflow(instant.to_string()))
}

/// UTC instant of a local wall-clock time.
pub fn from_local(local: NaiveDateTime, tz_hours: f64) -> Result<DateTime<Utc>, CalendarError> {
    let offset = offset_duration(check_timezone(tz_hours)?);
    local
        .checked_sub_signed(offset)
        .map(|utc| DateTime::from_naive_utc_and_offset(utc, Utc))
        .ok_or_else(|| CalendarError::Overflow(local.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn local_round_trip() {
        let t = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
        let local = to_local(t, 8.0).unwrap();
        assert_eq!(
            local,
            NaiveDate::from_ymd_opt(2024, 3, 5)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap()
        );
        assert_eq!(from_local(local, 8.0).unwrap(), t);
    }

    #[test]
    fn fractional_offset() {
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let local = to_local(t, 5.5).unwrap();
        assert_eq!(local.format("%H:%M").to_string(), "05:30");
        assert_eq!(from_local(to_local(t, -3.5).unwrap(), -3.5).unwrap(), t);
    }

    #[test]
    fn rejects_bad_offsets() {
        let t = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        for tz in [1.0e12, -14.5, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(to_local(t, tz), Err(CalendarError::OutOfRange { quantity: "timezone", .. })),
                "tz {tz}"
            );
        }
        assert!(to_local(t, 14.0).is_ok());
        assert!(to_local(t, -14.0).is_ok());
    }

    #[test]
    fn overflow_is_an_error() {
        assert!(matches!(
            to_local(DateTime::<Utc>::MAX_UTC, 1.0),
            Err(CalendarError::Overflow(_))
        ));
        assert!(matches!(
            from_local(NaiveDateTime::MIN, 1.0),
            Err(CalendarError::Overflow(_))
        ));
    }
}
