//! Error type for chart assembly.

use thiserror::Error;
use ziwei_base::BaseError;
use ziwei_calendar::CalendarError;

/// Errors from configuration, translation tables and chart assembly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ChartError {
    #[error(transparent)]
    Base(#[from] BaseError),
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    /// Configuration or translation table could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),
    /// A file could not be read.
    #[error("io error: {0}")]
    Io(String),
    /// The palace carries no decade window (simulated charts).
    #[error("palace {0} has no decade range")]
    MissingDecade(usize),
}
