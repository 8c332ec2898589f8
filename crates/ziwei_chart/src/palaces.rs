//! The twelve palaces of a chart.

use ziwei_base::{DecadeRange, PALACE_COUNT, PalaceRole, Pillar, Stem, is_lai_yin};

use crate::chart_types::{Named, Palace, StarEntry};
use crate::translate::Translator;

/// Combine pillars, roles, stars and decade windows into palaces.
///
/// `stars` holds one list per ring position; `ranges` is `None` for
/// simulated charts that have no decades.
pub fn assemble_palaces(
    translator: &dyn Translator,
    pillars: &[Pillar; PALACE_COUNT],
    year_stem: Stem,
    main: usize,
    stars: Vec<Vec<StarEntry>>,
    ranges: Option<&[DecadeRange; PALACE_COUNT]>,
) -> Vec<Palace> {
    pillars
        .iter()
        .zip(stars)
        .enumerate()
        .map(|(index, (pillar, stars))| {
            let role = PalaceRole::at(main, index);
            Palace {
                index,
                role,
                name: translator.lookup(&format!("palace.{}.name", role.key())),
                stem: Named {
                    key: pillar.stem,
                    name: translator.lookup(&format!("stem.{}", pillar.stem.key())),
                },
                branch: Named {
                    key: pillar.branch,
                    name: translator.lookup(&format!("branch.{}", pillar.branch.key())),
                },
                is_lai_yin: is_lai_yin(year_stem, pillar.stem, pillar.branch),
                stars,
                decade_range: ranges.map(|r| r[index]),
            }
        })
        .collect()
}
