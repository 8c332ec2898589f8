//! Error types for calendar conversion and boundary normalisation.

use thiserror::Error;
use ziwei_base::BaseError;

/// Errors from lunisolar conversion, pillar resolution and date parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// A base rule rejected its input (year range, pillar string, ...).
    #[error(transparent)]
    Base(#[from] BaseError),
    /// The calendar service could not convert a date.
    #[error("calendar service error: {0}")]
    Service(String),
    /// No instant matches the pillars inside the search window.
    #[error("no time matching {pillars} found in {start}-{end}")]
    NoPillarMatch { pillars: String, start: i32, end: i32 },
    /// Compact lunisolar date string is malformed.
    #[error("invalid lunisolar date \"{0}\", expected YYYY-M-D-H")]
    LunisolarFormat(String),
    /// A timezone offset or longitude is non-finite or outside its range.
    #[error("{quantity} {value} outside [{min}, {max}]")]
    OutOfRange {
        quantity: &'static str,
        value: String,
        min: i32,
        max: i32,
    },
    /// Shifting an instant left chrono's representable range.
    #[error("date arithmetic overflow at {0}")]
    Overflow(String),
}
