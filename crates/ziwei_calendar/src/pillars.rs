//! Resolve a four-pillar string back to a calendar instant.
//!
//! Pillars repeat every 60 years, so the search is limited to an explicit
//! window `[cycle_start, cycle_start + 59]` and the earliest match wins.

use chrono::NaiveDateTime;
use log::debug;
use serde::Serialize;
use ziwei_base::FourPillars;

use crate::error::CalendarError;
use crate::lunisolar::{CalendarService, LunisolarDate};

/// Years searched after the cycle start year.
pub const CYCLE_SPAN_YEARS: i32 = 59;

/// The instant matched by a pillar string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PillarMatch {
    pub pillars: FourPillars,
    /// Local wall-clock time of the match.
    pub solar: NaiveDateTime,
    pub lunisolar: LunisolarDate,
}

/// Find the first instant in `[cycle_start, cycle_start + 59]` whose four
/// pillars equal `input` (e.g. `甲子乙丑丙寅丁卯`).
pub fn resolve_pillars(
    calendar: &dyn CalendarService,
    input: &str,
    cycle_start: i32,
) -> Result<PillarMatch, CalendarError> {
    let pillars = FourPillars::parse(input)?;
    let end = cycle_start + CYCLE_SPAN_YEARS;
    let solar = calendar
        .solar_times_for_pillars(&pillars, cycle_start, end)?
        .into_iter()
        .next()
        .ok_or_else(|| CalendarError::NoPillarMatch {
            pillars: pillars.as_array().iter().map(|p| p.to_string()).collect(),
            start: cycle_start,
            end,
        })?;
    let lunisolar = calendar.solar_to_lunisolar(solar)?;
    debug!("pillars {pillars} resolved to {solar} ({lunisolar})");
    Ok(PillarMatch {
        pillars,
        solar,
        lunisolar,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthetic::SyntheticCalendar;
    use ziwei_base::BaseError;

    #[test]
    fn finds_known_date() {
        let cal = SyntheticCalendar::new();
        let birth = LunisolarDate::new(1990, 6, 12).with_time(8, 0, 0);
        let text: String = cal
            .four_pillars(&birth)
            .unwrap()
            .as_array()
            .iter()
            .map(|p| p.to_string())
            .collect();
        let m = resolve_pillars(&cal, &text, 1984).unwrap();
        assert_eq!(m.lunisolar, birth);
    }

    #[test]
    fn no_match_in_window_is_an_error() {
        // One leap month in 2050 moves every later day pillar by 30, so the
        // Geng-Wu year 2110 never repeats the 1990 day pillar in month 6.
        let cal = SyntheticCalendar::new().with_leap_month(2050, 3);
        let birth = LunisolarDate::new(1990, 6, 12).with_time(8, 0, 0);
        let text: String = cal
            .four_pillars(&birth)
            .unwrap()
            .as_array()
            .iter()
            .map(|p| p.to_string())
            .collect();
        assert!(resolve_pillars(&cal, &text, 1984).is_ok());
        let err = resolve_pillars(&cal, &text, 2100).unwrap_err();
        assert!(matches!(
            err,
            CalendarError::NoPillarMatch {
                start: 2100,
                end: 2159,
                ..
            }
        ));
    }

    #[test]
    fn malformed_input_is_positional() {
        let cal = SyntheticCalendar::new();
        let err = resolve_pillars(&cal, "甲子乙丑丙寅丁", 1984).unwrap_err();
        assert_eq!(err, CalendarError::Base(BaseError::PillarLength(7)));
    }
}
