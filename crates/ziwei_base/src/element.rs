//! Five-element scheme ("wu xing ju") resolution.
//!
//! The scheme is read from a 5×6 table: the row is the birth-year stem
//! modulo 5 (stems five apart share a row), the column is the main-palace
//! branch index halved (each column covers two adjacent branches).

use serde::Serialize;

use crate::branch::Branch;
use crate::stem::{Element, Stem};

/// One of the five element schemes and its numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FiveElementScheme {
    /// Water 2.
    Shui,
    /// Fire 6.
    Huo,
    /// Wood 3.
    Mu,
    /// Earth 5.
    Tu,
    /// Metal 4.
    Jin,
}

/// All five schemes.
pub const ALL_SCHEMES: [FiveElementScheme; 5] = [
    FiveElementScheme::Shui,
    FiveElementScheme::Huo,
    FiveElementScheme::Mu,
    FiveElementScheme::Tu,
    FiveElementScheme::Jin,
];

use self::FiveElementScheme::{Huo, Jin, Mu, Shui, Tu};

const SCHEME_TABLE: [[FiveElementScheme; 6]; 5] = [
    // Jia / Ji
    [Shui, Huo, Mu, Tu, Jin, Huo],
    // Yi / Geng
    [Huo, Tu, Jin, Mu, Shui, Tu],
    // Bing / Xin
    [Tu, Mu, Shui, Jin, Huo, Mu],
    // Ding / Ren
    [Mu, Jin, Huo, Shui, Tu, Jin],
    // Wu / Gui
    [Jin, Shui, Tu, Huo, Mu, Shui],
];

impl FiveElementScheme {
    /// Translation key segment (`fiveElementScheme.Shui`).
    pub const fn key(self) -> &'static str {
        match self {
            Self::Shui => "Shui",
            Self::Huo => "Huo",
            Self::Mu => "Mu",
            Self::Tu => "Tu",
            Self::Jin => "Jin",
        }
    }

    /// Numeric scheme value (2..=6): first decade start age and the divisor
    /// of the principal-star formula.
    pub const fn value(self) -> u8 {
        match self {
            Self::Shui => 2,
            Self::Mu => 3,
            Self::Jin => 4,
            Self::Tu => 5,
            Self::Huo => 6,
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Shui => Element::Water,
            Self::Huo => Element::Fire,
            Self::Mu => Element::Wood,
            Self::Tu => Element::Earth,
            Self::Jin => Element::Metal,
        }
    }

    /// Scheme for a birth-year stem and a main-palace branch.
    pub const fn resolve(stem: Stem, main_branch: Branch) -> Self {
        let row = (stem.index() % 5) as usize;
        let col = (main_branch.index() / 2) as usize;
        SCHEME_TABLE[row][col]
    }
}
