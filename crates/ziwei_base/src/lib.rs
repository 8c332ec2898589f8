//! Pure placement rules for purple-star (ZiWei Dou Shu) natal charts.
//!
//! This crate provides:
//! - Wraparound arithmetic on the 10-stem and 12-branch cycles
//! - Stems, branches, sexagenary years and four-pillar parsing
//! - Palace stems ("Five Tigers"), roles and the five-element scheme
//! - Principal, major and minor star placement
//! - The four transformations with an injectable memo cache
//! - Decade windows and the flowing-year overlay
//!
//! Everything here is a deterministic function of its arguments; calendar
//! conversion and chart assembly live in `ziwei_calendar` and `ziwei_chart`.

pub mod branch;
pub mod cycle;
pub mod decade;
pub mod element;
pub mod error;
pub mod palace;
pub mod sexagenary;
pub mod star;
pub mod stem;
pub mod transform;

pub use branch::{ALL_BRANCHES, Branch, HOUR_RANGES, hour_slot, slot_midpoint};
pub use cycle::{jump, mirror, opposite, wrap, wrap10, wrap12};
pub use decade::{
    DecadeRange, YearlyEntry, active_decade_index, decade_direction, decade_ranges, nominal_age,
    yearly_entry, yearly_start_index,
};
pub use element::{ALL_SCHEMES, FiveElementScheme};
pub use error::BaseError;
pub use palace::{
    ALL_PALACE_ROLES, PALACE_COUNT, PalaceRole, is_lai_yin, main_palace_index,
    palace_stems_and_branches, role_index,
};
pub use sexagenary::{FourPillars, Pillar, stem_branch_of_year, year_pillar};
pub use star::{
    ALL_STARS, Galaxy, MinorStarIndices, Star, StarAnchors, StarKind, StarPlacement, StarPolicy,
    major_star_placements, minor_star_indices, minor_star_placements, star_index,
};
pub use stem::{ALL_STEMS, Element, Gender, Polarity, Stem};
pub use transform::{
    ALL_TRANSFORMATIONS, NoCache, SharedCache, Transformation, TransformationCache, flying,
    resolve, resolve_cached,
};
