//! Chart model handed to rendering and report code.
//!
//! Every type serialises with serde; enum keys serialise as their variant
//! names (`"Jia"`, `"ZiWei"`, `"Ming"`), matching the translation keys.

use serde::Serialize;
use ziwei_base::{
    Branch, DecadeRange, FiveElementScheme, Galaxy, PalaceRole, Star, StarKind, Stem,
    Transformation, YearlyEntry, flying,
};

use crate::decade::decade_table;
use crate::error::ChartError;
use crate::translate::Translator;

/// A key with its translated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Named<K> {
    pub key: K,
    pub name: String,
}

pub type TransformationEntry = Named<Transformation>;

/// A star resident in a palace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StarEntry {
    pub key: Star,
    pub name: String,
    pub abbr: String,
    pub kind: StarKind,
    pub galaxy: Option<Galaxy>,
    /// From the birth-year stem.
    pub natal: Option<TransformationEntry>,
    /// From the stem of the star's own palace.
    pub exit: Option<TransformationEntry>,
    /// From the stem of the opposite palace.
    pub entry: Option<TransformationEntry>,
}

/// One of the twelve palaces, in ring order (index 0 = Yin branch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palace {
    pub index: usize,
    pub role: PalaceRole,
    pub name: String,
    pub stem: Named<Stem>,
    pub branch: Named<Branch>,
    pub is_lai_yin: bool,
    pub stars: Vec<StarEntry>,
    /// Nominal-age window; absent on simulated charts.
    pub decade_range: Option<DecadeRange>,
}

impl Palace {
    /// Stars transformed by this palace's stem, in A/B/C/D order.
    pub fn flying(&self) -> [Star; 4] {
        flying(self.stem.key)
    }

    pub fn has_star(&self, star: Star) -> bool {
        self.stars.iter().any(|s| s.key == star)
    }
}

/// One palace of a decade table, with the decade role name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecadeEntry {
    pub key: PalaceRole,
    pub name: String,
    pub yearly: YearlyEntry,
}

/// The assembled natal chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chart {
    pub name: String,
    /// Polarity plus gender text, e.g. `阳男`.
    pub gender: String,
    pub birth_year_stem: Named<Stem>,
    pub birth_year_branch: Named<Branch>,
    pub zodiac: String,
    pub ziwei_branch: Named<Branch>,
    pub main_palace_branch: Named<Branch>,
    /// `YYYY-MM-DD HH:MM` in standard time.
    pub solar_date: String,
    /// Same after true-solar correction, when applied.
    pub solar_date_by_true: Option<String>,
    pub lunisolar_year: i32,
    pub lunisolar_date: String,
    pub sexagenary_cycle_date: String,
    pub hour: Named<Branch>,
    pub hour_range: &'static str,
    pub five_element_scheme: Named<FiveElementScheme>,
    pub five_element_scheme_value: u8,
    pub palaces: Vec<Palace>,
    /// One decade table per palace (12 x 12).
    pub decades: Vec<Vec<DecadeEntry>>,
    /// Palace whose decade contains the reference instant.
    pub decade_index: usize,
    /// `+1` clockwise, `-1` counter-clockwise.
    pub decade_direction: i32,
}

impl Chart {
    /// Recompute the decade table anchored at palace `index`.
    ///
    /// Labels come from `translator`; pass the translator of
    /// [`ChartContext::with_language`](crate::ChartContext::with_language)
    /// for a language other than the context default.
    pub fn decade(
        &self,
        translator: &dyn Translator,
        index: usize,
    ) -> Result<Vec<DecadeEntry>, ChartError> {
        decade_table(
            translator,
            &self.palaces,
            index,
            self.birth_year_branch.key,
            self.lunisolar_year,
        )
    }

    /// Position of the Ming role in `table`, or in the active decade table
    /// when no table is given.
    pub fn decade_index(&self, table: Option<&[DecadeEntry]>) -> Option<usize> {
        let table = match table {
            Some(t) => t,
            None => self.decades.get(self.decade_index)?.as_slice(),
        };
        table.iter().position(|e| e.key == PalaceRole::Ming)
    }

    /// Palace holding `star`.
    pub fn palace_of(&self, star: Star) -> Option<&Palace> {
        self.palaces.iter().find(|p| p.has_star(star))
    }
}
