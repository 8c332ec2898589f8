//! Decade tables and the active decade for a reference instant.

use chrono::{DateTime, Utc};
use log::debug;
use ziwei_base::{
    BaseError, Branch, DecadeRange, PalaceRole, active_decade_index as range_index, nominal_age,
    yearly_entry, yearly_start_index,
};
use ziwei_calendar::{natal_date, to_local};

use crate::chart_types::{DecadeEntry, Palace};
use crate::context::ChartContext;
use crate::error::ChartError;
use crate::translate::Translator;

/// The decade table anchored at palace `index`: every palace's decade role
/// and its flowing-year entry.
pub fn decade_table(
    translator: &dyn Translator,
    palaces: &[Palace],
    index: usize,
    birth_year_branch: Branch,
    birth_year: i32,
) -> Result<Vec<DecadeEntry>, ChartError> {
    let anchor = palaces.get(index).ok_or(BaseError::IndexOutOfRange {
        what: "palace",
        index: index as i64,
    })?;
    let start_age = anchor
        .decade_range
        .ok_or(ChartError::MissingDecade(index))?
        .start;
    let yearly_start = yearly_start_index(birth_year_branch, start_age);

    Ok((0..palaces.len())
        .map(|position| {
            let key = PalaceRole::at(index, position);
            DecadeEntry {
                key,
                name: translator.lookup(&format!("palace.{}.decade", key.key())),
                yearly: yearly_entry(position, yearly_start, birth_year, start_age),
            }
        })
        .collect())
}

/// One decade table per palace.
pub fn all_decade_tables(
    translator: &dyn Translator,
    palaces: &[Palace],
    birth_year_branch: Branch,
    birth_year: i32,
) -> Result<Vec<Vec<DecadeEntry>>, ChartError> {
    (0..palaces.len())
        .map(|i| decade_table(translator, palaces, i, birth_year_branch, birth_year))
        .collect()
}

/// Palace whose decade contains the nominal age at `reference`.
///
/// The instant is read as wall-clock time at `tz_hours`, converted to a
/// lunisolar year under the context's division policy, and falls back to
/// palace 0 when no window contains the age.
pub fn active_decade_index(
    ctx: &ChartContext,
    palaces: &[Palace],
    birth_year: i32,
    reference: DateTime<Utc>,
    tz_hours: f64,
) -> Result<usize, ChartError> {
    let lunar = ctx
        .calendar
        .solar_to_lunisolar(to_local(reference, tz_hours)?)?;
    let year = natal_date(ctx.calendar.as_ref(), &lunar, &ctx.config.division)?.year;
    let age = nominal_age(year, birth_year);
    let ranges: Vec<DecadeRange> = palaces.iter().filter_map(|p| p.decade_range).collect();
    let index = if ranges.len() == palaces.len() {
        range_index(&ranges, age)
    } else {
        0
    };
    debug!("reference {reference}: lunisolar year {year}, age {age}, decade {index}");
    Ok(index)
}

/// Decade table of the palace active at `reference`.
pub fn decade_table_for_date(
    ctx: &ChartContext,
    palaces: &[Palace],
    birth_year_branch: Branch,
    birth_year: i32,
    reference: DateTime<Utc>,
    tz_hours: f64,
) -> Result<Vec<DecadeEntry>, ChartError> {
    let index = active_decade_index(ctx, palaces, birth_year, reference, tz_hours)?;
    decade_table(
        ctx.translator.as_ref(),
        palaces,
        index,
        birth_year_branch,
        birth_year,
    )
}
