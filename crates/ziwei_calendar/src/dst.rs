//! Historical daylight-saving correction.
//!
//! China observed daylight saving from 1986 to 1991. Inside those windows
//! civil clocks ran one hour ahead of standard time, so a recorded birth time
//! must be moved back one hour. Only the UTC+8 zone has rules; other offsets
//! and years pass through unchanged.
//!
//! Windows are half-open in local civil time: the start instant is already
//! shifted, the end instant is not.

use chrono::{DateTime, Datelike, Duration, Timelike, Utc};
use log::trace;

use crate::error::CalendarError;
use crate::zone::to_local;

/// Offset (hours) the daylight-saving table applies to.
pub const DST_TIMEZONE_HOURS: f64 = 8.0;

/// Local `(month, day, hour)` start and end of one year's daylight saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DstWindow {
    pub year: i32,
    pub start: (u32, u32, u32),
    pub end: (u32, u32, u32),
}

/// Daylight-saving windows for UTC+8.
pub const CHINA_DST_WINDOWS: [DstWindow; 6] = [
    DstWindow {
        year: 1986,
        start: (5, 4, 2),
        end: (9, 14, 2),
    },
    DstWindow {
        year: 1987,
        start: (4, 12, 2),
        end: (9, 13, 2),
    },
    DstWindow {
        year: 1988,
        start: (4, 10, 2),
        end: (9, 11, 2),
    },
    DstWindow {
        year: 1989,
        start: (4, 16, 2),
        end: (9, 17, 2),
    },
    DstWindow {
        year: 1990,
        start: (4, 15, 2),
        end: (9, 16, 2),
    },
    DstWindow {
        year: 1991,
        start: (4, 14, 2),
        end: (9, 15, 2),
    },
];

/// Window for a local year, if the offset has rules for it.
pub fn dst_window(year: i32, tz_hours: f64) -> Option<&'static DstWindow> {
    if (tz_hours - DST_TIMEZONE_HOURS).abs() > f64::EPSILON {
        return None;
    }
    CHINA_DST_WINDOWS.iter().find(|w| w.year == year)
}

/// Move an instant recorded in daylight-saving time back to standard time.
pub fn normalize_dst(
    instant: DateTime<Utc>,
    tz_hours: f64,
) -> Result<DateTime<Utc>, CalendarError> {
    let local = to_local(instant, tz_hours)?;
    let Some(window) = dst_window(local.year(), tz_hours) else {
        return Ok(instant);
    };

    // Lexicographic comparison at nanosecond resolution.
    let now = (
        local.month(),
        local.day(),
        local.hour(),
        local.minute(),
        local.second(),
        local.nanosecond(),
    );
    let (sm, sd, sh) = window.start;
    let (em, ed, eh) = window.end;
    if now >= (sm, sd, sh, 0, 0, 0) && now < (em, ed, eh, 0, 0, 0) {
        let shifted = instant
            .checked_sub_signed(Duration::hours(1))
            .ok_or_else(|| CalendarError::Overflow(instant.to_string()))?;
        trace!("daylight saving: {instant} -> {shifted}");
        return Ok(shifted);
    }
    Ok(instant)
}
