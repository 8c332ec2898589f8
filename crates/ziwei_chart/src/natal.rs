//! Natal chart assembly from normalised calendar inputs.

use chrono::{DateTime, Utc};
use log::debug;
use ziwei_base::{
    Branch, FiveElementScheme, Gender, Stem, decade_direction, decade_ranges, main_palace_index,
    minor_star_indices, palace_stems_and_branches, star_index,
};

use crate::chart_types::{Chart, Named};
use crate::context::ChartContext;
use crate::decade::{active_decade_index, all_decade_tables};
use crate::error::ChartError;
use crate::palaces::assemble_palaces;
use crate::stars::{StarLayout, place_stars};

/// Calendar inputs and display text of one birth.
#[derive(Debug, Clone, PartialEq)]
pub struct NatalInput {
    pub name: Option<String>,
    pub gender: Gender,
    /// 0-based lunisolar month.
    pub month_index: u32,
    /// Lunisolar day of month.
    pub day: u32,
    /// Hour-branch index 0..=11.
    pub hour_index: u32,
    pub birth_year: i32,
    pub year_stem: Stem,
    pub year_branch: Branch,
    pub solar_date: String,
    pub solar_date_by_true: Option<String>,
    pub lunisolar_date: String,
    pub sexagenary_cycle_date: String,
}

/// Build the full chart.
///
/// `reference` picks the active decade and defaults to the context clock;
/// `tz_hours` is the offset it is read in.
pub fn assemble_chart(
    ctx: &ChartContext,
    input: &NatalInput,
    reference: Option<DateTime<Utc>>,
    tz_hours: f64,
) -> Result<Chart, ChartError> {
    let pillars = palace_stems_and_branches(input.year_stem);
    let main = main_palace_index(input.month_index, input.hour_index);
    let main_branch = pillars[main].branch;
    let scheme = FiveElementScheme::resolve(input.year_stem, main_branch);
    let anchors = star_index(input.day, scheme);
    let direction = decade_direction(input.year_stem, input.gender);
    debug!(
        "main palace {main} ({}), scheme {}, ziwei {}, direction {direction}",
        main_branch.key(),
        scheme.key(),
        anchors.ziwei
    );

    let policy = ctx.config.star;
    let layout = StarLayout {
        pillars: &pillars,
        year_stem: input.year_stem,
        anchors,
        policy,
        minor: policy
            .places_minor()
            .then(|| minor_star_indices(input.month_index, input.hour_index)),
    };
    let stars = place_stars(ctx, &layout);
    let ranges = decade_ranges(main, direction, scheme.value());
    let translator = ctx.translator.as_ref();
    let palaces = assemble_palaces(
        translator,
        &pillars,
        input.year_stem,
        main,
        stars,
        Some(&ranges),
    );

    let decades = all_decade_tables(translator, &palaces, input.year_branch, input.birth_year)?;
    let reference = reference.unwrap_or_else(|| ctx.now());
    let decade_index = active_decade_index(ctx, &palaces, input.birth_year, reference, tz_hours)?;

    let hour = Branch::from_index(input.hour_index as i32);
    let name = match &input.name {
        Some(name) => name.clone(),
        None => ctx.lookup("name.anonymous"),
    };
    let gender = ctx.lookup(&format!("one.{}", input.year_stem.polarity().key()))
        + &ctx.lookup(&format!("gender.{}", input.gender.key()));

    Ok(Chart {
        name,
        gender,
        birth_year_stem: named_stem(ctx, input.year_stem),
        birth_year_branch: named_branch(ctx, input.year_branch),
        zodiac: ctx.lookup(&format!("zodiac.{}", input.year_branch.key())),
        ziwei_branch: palaces[anchors.ziwei].branch.clone(),
        main_palace_branch: named_branch(ctx, main_branch),
        solar_date: input.solar_date.clone(),
        solar_date_by_true: input.solar_date_by_true.clone(),
        lunisolar_year: input.birth_year,
        lunisolar_date: input.lunisolar_date.clone(),
        sexagenary_cycle_date: input.sexagenary_cycle_date.clone(),
        hour: Named {
            key: hour,
            name: hour_label(ctx, hour),
        },
        hour_range: hour.hour_range(),
        five_element_scheme: Named {
            key: scheme,
            name: ctx.lookup(&format!("fiveElementScheme.{}", scheme.key())),
        },
        five_element_scheme_value: scheme.value(),
        palaces,
        decades,
        decade_index,
        decade_direction: direction,
    })
}

/// `午时`-style label of an hour branch.
pub fn hour_label(ctx: &ChartContext, hour: Branch) -> String {
    ctx.lookup(&format!("branch.{}", hour.key())) + &ctx.lookup("hour")
}

fn named_stem(ctx: &ChartContext, stem: Stem) -> Named<Stem> {
    Named {
        key: stem,
        name: ctx.lookup(&format!("stem.{}", stem.key())),
    }
}

fn named_branch(ctx: &ChartContext, branch: Branch) -> Named<Branch> {
    Named {
        key: branch,
        name: ctx.lookup(&format!("branch.{}", branch.key())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use ziwei_base::{PalaceRole, Star, StarPolicy};
    use ziwei_calendar::SyntheticCalendar;

    use crate::config::ChartConfig;

    fn input() -> NatalInput {
        NatalInput {
            name: None,
            gender: Gender::Male,
            month_index: 0,
            day: 15,
            hour_index: 6,
            birth_year: 2024,
            year_stem: Stem::Jia,
            year_branch: Branch::Chen,
            solar_date: String::new(),
            solar_date_by_true: None,
            lunisolar_date: String::new(),
            sexagenary_cycle_date: String::new(),
        }
    }

    fn ctx(policy: StarPolicy) -> ChartContext {
        ChartContext::builder(Arc::new(SyntheticCalendar::new()))
            .config(ChartConfig {
                star: policy,
                ..ChartConfig::default()
            })
            .build()
    }

    #[test]
    fn skeleton() {
        let chart = assemble_chart(&ctx(StarPolicy::Normal), &input(), None, 8.0).unwrap();
        assert_eq!(chart.palaces[6].role, PalaceRole::Ming);
        assert_eq!(chart.main_palace_branch.key, Branch::Shen);
        assert_eq!(chart.five_element_scheme.key, FiveElementScheme::Jin);
        assert_eq!(chart.five_element_scheme_value, 4);
        assert_eq!(chart.ziwei_branch.key, Branch::Chen);
        assert_eq!(chart.decade_direction, 1);
        assert_eq!(chart.decades.len(), 12);
        assert_eq!(chart.name, "name.anonymous");
        assert_eq!(chart.gender, "one.Yanggender.Yang");
    }

    #[test]
    fn only_major_has_no_minor_stars() {
        let chart = assemble_chart(&ctx(StarPolicy::OnlyMajor), &input(), None, 8.0).unwrap();
        let count: usize = chart.palaces.iter().map(|p| p.stars.len()).sum();
        assert_eq!(count, 14);
        assert!(chart.palace_of(Star::WenQu).is_none());
    }
}
