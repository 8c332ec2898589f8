//! Star placement with transformation annotations.

use log::trace;
use ziwei_base::{
    MinorStarIndices, PALACE_COUNT, Pillar, Star, StarAnchors, StarPlacement, StarPolicy, Stem,
    Transformation, major_star_placements, minor_star_placements, opposite,
};

use crate::chart_types::{StarEntry, TransformationEntry};
use crate::context::ChartContext;

/// Inputs shared by every star of one chart.
#[derive(Debug, Clone, Copy)]
pub struct StarLayout<'a> {
    /// Palace pillars in ring order.
    pub pillars: &'a [Pillar; PALACE_COUNT],
    pub year_stem: Stem,
    pub anchors: StarAnchors,
    pub policy: StarPolicy,
    /// `None` leaves the minor stars out.
    pub minor: Option<MinorStarIndices>,
}

/// Stars resident in each ring position.
pub fn place_stars(ctx: &ChartContext, layout: &StarLayout<'_>) -> Vec<Vec<StarEntry>> {
    let mut stars: Vec<Vec<StarEntry>> = vec![Vec::new(); PALACE_COUNT];
    let majors = major_star_placements(layout.anchors, layout.policy);
    let minors = layout.minor.map(minor_star_placements);
    for placement in majors.iter().chain(minors.iter().flatten()) {
        let entry = star_entry(ctx, layout, placement);
        stars[placement.position].push(entry);
    }
    stars
}

fn star_entry(ctx: &ChartContext, layout: &StarLayout<'_>, placement: &StarPlacement) -> StarEntry {
    let star = placement.star;
    let own_stem = layout.pillars[placement.position].stem;
    let opposite_stem = layout.pillars[opposite(placement.position)].stem;
    let natal = ctx.transformation(layout.year_stem, star);
    let exit = ctx.transformation(own_stem, star);
    let entry = ctx.transformation(opposite_stem, star);
    trace!(
        "{} at {} (natal {natal:?}, exit {exit:?}, entry {entry:?})",
        star.key(),
        placement.position
    );

    let key = star.key();
    StarEntry {
        key: star,
        name: ctx.lookup(&format!("star.{key}.name")),
        abbr: ctx.lookup(&format!("star.{key}.abbr")),
        kind: star.kind(),
        galaxy: star.galaxy(),
        natal: natal.map(|t| transformation_entry(ctx, t)),
        exit: exit.map(|t| transformation_entry(ctx, t)),
        entry: entry.map(|t| transformation_entry(ctx, t)),
    }
}

fn transformation_entry(ctx: &ChartContext, t: Transformation) -> TransformationEntry {
    TransformationEntry {
        key: t,
        name: ctx.lookup(&format!("transformation.{}", t.key())),
    }
}

/// Ring position of `star`, if placed.
pub fn position_of(stars: &[Vec<StarEntry>], star: Star) -> Option<usize> {
    stars.iter().position(|p| p.iter().any(|s| s.key == star))
}
