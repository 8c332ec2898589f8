//! Calendar plumbing for purple-star charts.
//!
//! This crate provides:
//! - The [`CalendarService`] contract for lunisolar conversion
//! - Late-hour and leap-month boundary policies ([`natal_date`])
//! - Historical daylight-saving and true-solar-time correction
//! - Four-pillar string resolution inside a 60-year window
//! - Compact `YYYY-M-D-H` parsing and date text
//! - [`SyntheticCalendar`], an arithmetic calendar for tests and benches

pub mod division;
pub mod dst;
pub mod error;
pub mod format;
pub mod lunisolar;
pub mod pillars;
pub mod synthetic;
pub mod true_solar;
pub mod zone;

pub use division::{
    DayDivision, DivisionConfig, MonthDivision, NatalDate, YearDivision, fix_leap_month,
    natal_date, normalize_late_hour,
};
pub use dst::{CHINA_DST_WINDOWS, DST_TIMEZONE_HOURS, DstWindow, dst_window, normalize_dst};
pub use error::CalendarError;
pub use format::{
    CompactLunisolar, lunisolar_date_text, lunisolar_day_name, lunisolar_month_name,
    solar_date_text,
};
pub use lunisolar::{CalendarService, LunisolarDate};
pub use pillars::{CYCLE_SPAN_YEARS, PillarMatch, resolve_pillars};
pub use synthetic::SyntheticCalendar;
pub use true_solar::{
    DEFAULT_LONGITUDE_DEG, MAX_LONGITUDE_DEG, check_longitude, equation_of_time_minutes,
    fractional_year, true_solar_correction_minutes, true_solar_time,
};
pub use zone::{
    DEFAULT_TIMEZONE_HOURS, MAX_TIMEZONE_HOURS, check_timezone, from_local, offset_duration,
    to_local,
};
