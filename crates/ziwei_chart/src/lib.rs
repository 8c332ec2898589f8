//! Natal chart assembly for the purple-star engine.
//!
//! Builds a twelve-palace chart with star placements, transformation
//! annotations and decade overlays from a birth instant, a compact
//! lunisolar date or a four-pillar string.
//!
//! # Quick start
//!
//! Real charts need a [`CalendarService`] backed by an astronomical
//! lunisolar calendar. [`SyntheticCalendar`] below is a 30-day arithmetic
//! stand-in for tests and benches; its charts are not astrologically valid.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use chrono::{TimeZone, Utc};
//! use ziwei_chart::*;
//!
//! // Swap in your own `impl CalendarService` for real dates.
//! let ctx = ChartContext::builder(Arc::new(SyntheticCalendar::new()))
//!     .translator(Arc::new(TableTranslator::builtin()?))
//!     .build();
//! let birth = Utc.with_ymd_and_hms(1990, 6, 12, 0, 30, 0).unwrap();
//! let chart = chart_from_solar(&ctx, &SolarRequest::new(Gender::Male, birth))?;
//! println!("{} {}", chart.main_palace_branch.name, chart.five_element_scheme.name);
//! ```

pub mod chart_types;
pub mod config;
pub mod context;
pub mod decade;
pub mod error;
pub mod natal;
pub mod palaces;
pub mod pipeline;
pub mod stars;
pub mod translate;

pub use chart_types::{Chart, DecadeEntry, Named, Palace, StarEntry, TransformationEntry};
pub use config::ChartConfig;
pub use context::{ChartContext, ChartContextBuilder, Clock, FixedClock, SystemClock};
pub use decade::{active_decade_index, all_decade_tables, decade_table, decade_table_for_date};
pub use error::ChartError;
pub use natal::{NatalInput, assemble_chart};
pub use pipeline::{
    LunisolarRequest, SexagenaryRequest, SolarRequest, StemBranchRequest, chart_from_lunisolar,
    chart_from_sexagenary, chart_from_solar, palaces_from_stem_branch,
};
pub use translate::{
    KeyTranslator, LanguageScope, MISSING_TRANSLATION, TableTranslator, Translator,
};

// Re-export the types callers need to build requests and read charts.
pub use ziwei_base::{
    Branch, FiveElementScheme, Gender, NoCache, PalaceRole, SharedCache, Star, StarPolicy, Stem,
    Transformation, TransformationCache,
};
pub use ziwei_calendar::{CalendarService, DivisionConfig, LunisolarDate, SyntheticCalendar};
