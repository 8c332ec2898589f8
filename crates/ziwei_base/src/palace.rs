//! Palace ring rules: stems per palace ("Five Tigers"), the main palace,
//! palace roles and the origin-palace flag.
//!
//! Ring position 0 is the Yin (Tiger) branch; positions ascend through the
//! branches from there.

use serde::Serialize;

use crate::branch::{Branch, RING_START_BRANCH};
use crate::cycle::wrap12;
use crate::sexagenary::Pillar;
use crate::stem::Stem;

/// Number of palaces on the ring.
pub const PALACE_COUNT: usize = 12;

/// The twelve life-domain roles, in counter-clockwise order from the
/// main (Self) palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PalaceRole {
    /// Self.
    Ming,
    /// Siblings.
    XiongDi,
    /// Spouse.
    FuQi,
    /// Children.
    ZiNv,
    /// Wealth.
    CaiBo,
    /// Health.
    JiE,
    /// Travel.
    QianYi,
    /// Friends.
    JiaoYou,
    /// Career.
    GuanLu,
    /// Property.
    TianZhai,
    /// Fortune.
    FuDe,
    /// Parents.
    FuMu,
}

/// All 12 roles in order (index 0 = Ming).
pub const ALL_PALACE_ROLES: [PalaceRole; 12] = [
    PalaceRole::Ming,
    PalaceRole::XiongDi,
    PalaceRole::FuQi,
    PalaceRole::ZiNv,
    PalaceRole::CaiBo,
    PalaceRole::JiE,
    PalaceRole::QianYi,
    PalaceRole::JiaoYou,
    PalaceRole::GuanLu,
    PalaceRole::TianZhai,
    PalaceRole::FuDe,
    PalaceRole::FuMu,
];

impl PalaceRole {
    pub const fn index(self) -> u8 {
        match self {
            Self::Ming => 0,
            Self::XiongDi => 1,
            Self::FuQi => 2,
            Self::ZiNv => 3,
            Self::CaiBo => 4,
            Self::JiE => 5,
            Self::QianYi => 6,
            Self::JiaoYou => 7,
            Self::GuanLu => 8,
            Self::TianZhai => 9,
            Self::FuDe => 10,
            Self::FuMu => 11,
        }
    }

    /// Translation key segment (`palace.Ming.name`).
    pub const fn key(self) -> &'static str {
        match self {
            Self::Ming => "Ming",
            Self::XiongDi => "XiongDi",
            Self::FuQi => "FuQi",
            Self::ZiNv => "ZiNv",
            Self::CaiBo => "CaiBo",
            Self::JiE => "JiE",
            Self::QianYi => "QianYi",
            Self::JiaoYou => "JiaoYou",
            Self::GuanLu => "GuanLu",
            Self::TianZhai => "TianZhai",
            Self::FuDe => "FuDe",
            Self::FuMu => "FuMu",
        }
    }

    /// English label.
    pub const fn english(self) -> &'static str {
        match self {
            Self::Ming => "Self",
            Self::XiongDi => "Siblings",
            Self::FuQi => "Spouse",
            Self::ZiNv => "Children",
            Self::CaiBo => "Wealth",
            Self::JiE => "Health",
            Self::QianYi => "Travel",
            Self::JiaoYou => "Friends",
            Self::GuanLu => "Career",
            Self::TianZhai => "Property",
            Self::FuDe => "Fortune",
            Self::FuMu => "Parents",
        }
    }

    /// Role held by ring position `position` when the main palace sits at
    /// `main`: `ROLES[(main - position) mod 12]`.
    pub const fn at(main: usize, position: usize) -> Self {
        ALL_PALACE_ROLES[role_index(main, position)]
    }
}

/// Starting stem index of the Yin palace for each `stem mod 5` group.
///
/// Jia/Ji → Bing, Yi/Geng → Wu, Bing/Xin → Geng, Ding/Ren → Ren, Wu/Gui → Jia.
const FIVE_TIGERS_START: [i32; 5] = [2, 4, 6, 8, 0];

/// Stem/branch pair of every ring position for a birth-year stem.
///
/// Entry 0 is the Yin palace; stems and branches both advance by one per
/// position.
pub fn palace_stems_and_branches(year_stem: Stem) -> [Pillar; PALACE_COUNT] {
    let start = FIVE_TIGERS_START[(year_stem.index() % 5) as usize];
    stems_and_branches_from(start, RING_START_BRANCH)
}

/// Twelve consecutive stem/branch pairs from explicit starting indices.
pub fn stems_and_branches_from(start_stem: i32, start_branch: i32) -> [Pillar; PALACE_COUNT] {
    std::array::from_fn(|i| {
        Pillar::new(
            Stem::from_index(start_stem + i as i32),
            Branch::from_index(start_branch + i as i32),
        )
    })
}

/// Main (Self) palace position: forward by month, back by hour.
pub const fn main_palace_index(month_index: u32, hour_index: u32) -> usize {
    wrap12(month_index as i32 - hour_index as i32)
}

/// Role index of ring position `position` given the main palace.
pub const fn role_index(main: usize, position: usize) -> usize {
    wrap12(main as i32 - position as i32)
}

/// Origin palace ("lai yin"): the palace stem repeats the birth-year stem
/// and its branch is neither Zi nor Chou.
pub fn is_lai_yin(year_stem: Stem, palace_stem: Stem, palace_branch: Branch) -> bool {
    year_stem == palace_stem && !matches!(palace_branch, Branch::Zi | Branch::Chou)
}
