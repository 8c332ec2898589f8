//! True (apparent) solar time.
//!
//! The correction is the NOAA equation of time plus four minutes per degree
//! of longitude, minus the zone offset:
//!
//! ```text
//! γ   = 2π (doy − 1 + min/1440) / 365
//! EoT = 229.18 (0.000075 + 0.001868 cos γ − 0.032077 sin γ
//!              − 0.014615 cos 2γ − 0.040849 sin 2γ)
//! Δ   = EoT + 4·lon − 60·tz            (minutes)
//! ```
//!
//! `doy` and `min` are taken from local standard time. Longitudes must be
//! finite and inside [-180, 180].

use std::f64::consts::PI;

use chrono::{DateTime, Datelike, Duration, Timelike, Utc};

use crate::error::CalendarError;
use crate::zone::to_local;

/// Default longitude (Beijing, degrees east).
pub const DEFAULT_LONGITUDE_DEG: f64 = 116.38333;

/// Largest accepted longitude magnitude, in degrees.
pub const MAX_LONGITUDE_DEG: i32 = 180;

/// Validate a longitude in degrees east.
pub fn check_longitude(longitude_deg: f64) -> Result<f64, CalendarError> {
    let max = MAX_LONGITUDE_DEG as f64;
    if longitude_deg.is_finite() && (-max..=max).contains(&longitude_deg) {
        Ok(longitude_deg)
    } else {
        Err(CalendarError::OutOfRange {
            quantity: "longitude",
            value: longitude_deg.to_string(),
            min: -MAX_LONGITUDE_DEG,
            max: MAX_LONGITUDE_DEG,
        })
    }
}

/// Equation of time in minutes for a fractional-year angle.
pub fn equation_of_time_minutes(gamma: f64) -> f64 {
    229.18
        * (0.000075 + 0.001868 * gamma.cos()
            - 0.032077 * gamma.sin()
            - 0.014615 * (2.0 * gamma).cos()
            - 0.040849 * (2.0 * gamma).sin())
}

/// Fractional-year angle (radians) from a day of year and minutes past midnight.
pub fn fractional_year(day_of_year: u32, minutes: f64) -> f64 {
    2.0 * PI * (day_of_year as f64 - 1.0 + minutes / 1440.0) / 365.0
}

/// Total true-solar-time correction in minutes.
pub fn true_solar_correction_minutes(
    instant: DateTime<Utc>,
    longitude_deg: f64,
    tz_hours: f64,
) -> Result<f64, CalendarError> {
    let longitude_deg = check_longitude(longitude_deg)?;
    let local = to_local(instant, tz_hours)?;
    let minutes = local.hour() as f64 * 60.0
        + local.minute() as f64
        + local.second() as f64 / 60.0
        + (local.nanosecond() / 1_000_000) as f64 / 60_000.0;
    let gamma = fractional_year(local.ordinal(), minutes);
    Ok(equation_of_time_minutes(gamma) + 4.0 * longitude_deg - tz_hours * 60.0)
}

/// Shift an instant to true solar time at the given longitude.
///
/// The shift is truncated to whole milliseconds.
pub fn true_solar_time(
    instant: DateTime<Utc>,
    longitude_deg: f64,
    tz_hours: f64,
) -> Result<DateTime<Utc>, CalendarError> {
    let correction = true_solar_correction_minutes(instant, longitude_deg, tz_hours)?;
    instant
        .checked_add_signed(Duration::milliseconds((correction * 60_000.0) as i64))
        .ok_or_else(|| CalendarError::Overflow(instant.to_string()))
}
