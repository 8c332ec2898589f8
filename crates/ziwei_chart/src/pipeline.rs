//! Chart-construction entry points.
//!
//! Solar input runs through daylight-saving normalisation, the optional
//! true-solar correction, lunisolar conversion and the late-hour and
//! leap-month policies before assembly. Compact lunisolar input is taken
//! as-is; pillar input is resolved to an instant first.

use chrono::{DateTime, NaiveDateTime, Utc};
use log::debug;
use ziwei_base::{
    Branch, Gender, StarAnchors, StarPolicy, Stem, palace_stems_and_branches, stem_branch_of_year,
};
use ziwei_calendar::{
    CompactLunisolar, DEFAULT_LONGITUDE_DEG, DEFAULT_TIMEZONE_HOURS, LunisolarDate,
    check_longitude, check_timezone, lunisolar_date_text, natal_date, normalize_dst,
    resolve_pillars, solar_date_text, to_local, true_solar_time,
};

use crate::chart_types::{Chart, Palace};
use crate::context::ChartContext;
use crate::error::ChartError;
use crate::natal::{NatalInput, assemble_chart, hour_label};
use crate::palaces::assemble_palaces;
use crate::stars::{StarLayout, place_stars};

/// Birth given as a civil instant.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarRequest {
    pub name: Option<String>,
    pub gender: Gender,
    pub date: DateTime<Utc>,
    /// Degrees east; defaults to Beijing.
    pub longitude: Option<f64>,
    /// Hours east of UTC; defaults to 8.
    pub timezone: Option<f64>,
    pub use_true_solar_time: bool,
    pub language: Option<String>,
    pub reference: Option<DateTime<Utc>>,
}

impl SolarRequest {
    /// Request with true solar time on and every option at its default.
    pub fn new(gender: Gender, date: DateTime<Utc>) -> Self {
        Self {
            name: None,
            gender,
            date,
            longitude: None,
            timezone: None,
            use_true_solar_time: true,
            language: None,
            reference: None,
        }
    }
}

/// Birth given as a compact `YYYY-M-D-H` lunisolar string.
#[derive(Debug, Clone, PartialEq)]
pub struct LunisolarRequest {
    pub name: Option<String>,
    pub gender: Gender,
    pub date: String,
    pub language: Option<String>,
    pub reference: Option<DateTime<Utc>>,
}

impl LunisolarRequest {
    pub fn new(gender: Gender, date: impl Into<String>) -> Self {
        Self {
            name: None,
            gender,
            date: date.into(),
            language: None,
            reference: None,
        }
    }
}

/// Birth given as an eight-character pillar string.
#[derive(Debug, Clone, PartialEq)]
pub struct SexagenaryRequest {
    pub name: Option<String>,
    pub gender: Gender,
    pub pillars: String,
    /// First Gregorian year of the 60-year search window.
    pub cycle_start: i32,
    pub language: Option<String>,
    pub reference: Option<DateTime<Utc>>,
}

impl SexagenaryRequest {
    pub fn new(gender: Gender, pillars: impl Into<String>, cycle_start: i32) -> Self {
        Self {
            name: None,
            gender,
            pillars: pillars.into(),
            cycle_start,
            language: None,
            reference: None,
        }
    }
}

/// Simulated chart from explicit anchors, without a birth date.
#[derive(Debug, Clone, PartialEq)]
pub struct StemBranchRequest {
    pub year_stem: Stem,
    /// Branch holding ZiWei.
    pub ziwei_branch: Branch,
    pub main_palace_branch: Branch,
    pub language: Option<String>,
}

/// Chart from a civil birth instant.
///
/// Timezone and longitude are checked before any conversion runs.
pub fn chart_from_solar(ctx: &ChartContext, req: &SolarRequest) -> Result<Chart, ChartError> {
    let tz = check_timezone(req.timezone.unwrap_or(DEFAULT_TIMEZONE_HOURS))?;
    let longitude = check_longitude(req.longitude.unwrap_or(DEFAULT_LONGITUDE_DEG))?;
    let scoped = ctx.with_language(req.language.as_deref());
    let ctx = &*scoped;

    let standard = normalize_dst(req.date, tz)?;
    let corrected = if req.use_true_solar_time {
        Some(to_local(true_solar_time(standard, longitude, tz)?, tz)?)
    } else {
        None
    };
    chart_from_wall_clock(
        ctx,
        Person {
            name: req.name.clone(),
            gender: req.gender,
        },
        to_local(standard, tz)?,
        corrected,
        req.reference,
        tz,
    )
}

/// Chart from a compact lunisolar date; no boundary policy is applied.
pub fn chart_from_lunisolar(
    ctx: &ChartContext,
    req: &LunisolarRequest,
) -> Result<Chart, ChartError> {
    let scoped = ctx.with_language(req.language.as_deref());
    let ctx = &*scoped;
    let compact = CompactLunisolar::parse(&req.date)?;
    let lunar = compact.to_lunisolar();
    let solar = ctx.calendar.lunisolar_to_solar(&lunar)?;
    let (year_stem, year_branch) = stem_branch_of_year(compact.year)?;

    let input = NatalInput {
        name: req.name.clone(),
        gender: req.gender,
        month_index: compact.month - 1,
        day: compact.day,
        hour_index: compact.hour_index,
        birth_year: compact.year,
        year_stem,
        year_branch,
        solar_date: solar_date_text(&solar),
        solar_date_by_true: None,
        lunisolar_date: lunisolar_text(ctx, &lunar, compact.hour_index)?,
        sexagenary_cycle_date: ctx.calendar.four_pillars(&lunar)?.to_string(),
    };
    assemble_chart(ctx, &input, req.reference, DEFAULT_TIMEZONE_HOURS)
}

/// Chart from a pillar string, resolved inside its 60-year window.
pub fn chart_from_sexagenary(
    ctx: &ChartContext,
    req: &SexagenaryRequest,
) -> Result<Chart, ChartError> {
    let scoped = ctx.with_language(req.language.as_deref());
    let ctx = &*scoped;
    let found = resolve_pillars(ctx.calendar.as_ref(), &req.pillars, req.cycle_start)?;
    chart_from_wall_clock(
        ctx,
        Person {
            name: req.name.clone(),
            gender: req.gender,
        },
        found.solar,
        None,
        req.reference,
        DEFAULT_TIMEZONE_HOURS,
    )
}

/// Palaces with major stars only, from a year stem and two anchor branches.
pub fn palaces_from_stem_branch(ctx: &ChartContext, req: &StemBranchRequest) -> Vec<Palace> {
    let scoped = ctx.with_language(req.language.as_deref());
    let ctx = &*scoped;
    let pillars = palace_stems_and_branches(req.year_stem);
    let layout = StarLayout {
        pillars: &pillars,
        year_stem: req.year_stem,
        anchors: StarAnchors::from_ziwei(req.ziwei_branch.ring_position()),
        policy: StarPolicy::Normal,
        minor: None,
    };
    let stars = place_stars(ctx, &layout);
    assemble_palaces(
        ctx.translator.as_ref(),
        &pillars,
        req.year_stem,
        req.main_palace_branch.ring_position(),
        stars,
        None,
    )
}

struct Person {
    name: Option<String>,
    gender: Gender,
}

/// Shared tail of the solar and pillar paths.
///
/// `recorded` is standard local time; `corrected`, when present, is the
/// true-solar local time used for the calendar.
fn chart_from_wall_clock(
    ctx: &ChartContext,
    person: Person,
    recorded: NaiveDateTime,
    corrected: Option<NaiveDateTime>,
    reference: Option<DateTime<Utc>>,
    tz: f64,
) -> Result<Chart, ChartError> {
    let calendar = ctx.calendar.as_ref();
    let lunar = calendar.solar_to_lunisolar(corrected.unwrap_or(recorded))?;
    let natal = natal_date(calendar, &lunar, &ctx.config.division)?;
    debug!("birth {recorded} -> {lunar} -> {}", natal.date);

    let input = NatalInput {
        name: person.name,
        gender: person.gender,
        month_index: natal.month_index,
        day: natal.day,
        hour_index: natal.hour_index,
        birth_year: lunar.year,
        year_stem: natal.stem,
        year_branch: natal.branch,
        solar_date: solar_date_text(&recorded),
        solar_date_by_true: corrected.as_ref().map(solar_date_text),
        lunisolar_date: lunisolar_text(ctx, &lunar, natal.hour_index)?,
        sexagenary_cycle_date: calendar.four_pillars(&lunar)?.to_string(),
    };
    assemble_chart(ctx, &input, reference, tz)
}

/// `甲辰年正月十五 午时`.
fn lunisolar_text(
    ctx: &ChartContext,
    lunar: &LunisolarDate,
    hour_index: u32,
) -> Result<String, ChartError> {
    let date = lunisolar_date_text(lunar)?;
    let hour = hour_label(ctx, Branch::from_index(hour_index as i32));
    Ok(format!("{date} {hour}"))
}
