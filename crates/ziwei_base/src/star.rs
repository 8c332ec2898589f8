//! Stars, anchor formulas and placement layouts.
//!
//! The principal star (ZiWei) is located from the lunar day and the
//! five-element scheme; its counterpart (TianFu) sits at the mirror position.
//! The fourteen major stars are then laid out from those two anchors, and
//! the four minor stars from the month and hour indices.

use serde::{Deserialize, Serialize};

use crate::branch::{Branch, RING_START_BRANCH};
use crate::cycle::{jump, mirror, wrap12};
use crate::element::FiveElementScheme;

/// Major or minor star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StarKind {
    Major,
    Minor,
}

/// Dipper grouping of a star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Galaxy {
    /// Northern dipper.
    #[serde(rename = "N")]
    North,
    /// Southern dipper.
    #[serde(rename = "S")]
    South,
    /// Central.
    #[serde(rename = "C")]
    Center,
}

impl Galaxy {
    pub const fn key(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::South => "S",
            Self::Center => "C",
        }
    }
}

/// The 14 major and 4 minor stars placed by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Star {
    ZiWei,
    TianJi,
    TaiYang,
    WuQu,
    TianTong,
    LianZhen,
    TianFu,
    TaiYin,
    TanLang,
    JuMen,
    TianXiang,
    TianLiang,
    QiSha,
    PoJun,
    ZuoFu,
    YouBi,
    WenChang,
    WenQu,
}

/// All 18 stars, majors first.
pub const ALL_STARS: [Star; 18] = [
    Star::ZiWei,
    Star::TianJi,
    Star::TaiYang,
    Star::WuQu,
    Star::TianTong,
    Star::LianZhen,
    Star::TianFu,
    Star::TaiYin,
    Star::TanLang,
    Star::JuMen,
    Star::TianXiang,
    Star::TianLiang,
    Star::QiSha,
    Star::PoJun,
    Star::ZuoFu,
    Star::YouBi,
    Star::WenChang,
    Star::WenQu,
];

impl Star {
    /// Translation key segment (`star.ZiWei.name`, `star.ZiWei.abbr`).
    pub const fn key(self) -> &'static str {
        match self {
            Self::ZiWei => "ZiWei",
            Self::TianJi => "TianJi",
            Self::TaiYang => "TaiYang",
            Self::WuQu => "WuQu",
            Self::TianTong => "TianTong",
            Self::LianZhen => "LianZhen",
            Self::TianFu => "TianFu",
            Self::TaiYin => "TaiYin",
            Self::TanLang => "TanLang",
            Self::JuMen => "JuMen",
            Self::TianXiang => "TianXiang",
            Self::TianLiang => "TianLiang",
            Self::QiSha => "QiSha",
            Self::PoJun => "PoJun",
            Self::ZuoFu => "ZuoFu",
            Self::YouBi => "YouBi",
            Self::WenChang => "WenChang",
            Self::WenQu => "WenQu",
        }
    }

    pub const fn kind(self) -> StarKind {
        match self {
            Self::ZuoFu | Self::YouBi | Self::WenChang | Self::WenQu => StarKind::Minor,
            _ => StarKind::Major,
        }
    }

    pub const fn is_major(self) -> bool {
        matches!(self.kind(), StarKind::Major)
    }

    /// Dipper grouping; TianFu, TianXiang and QiSha carry none.
    pub const fn galaxy(self) -> Option<Galaxy> {
        match self {
            Self::ZiWei | Self::ZuoFu | Self::YouBi | Self::WenChang | Self::WenQu => {
                Some(Galaxy::Center)
            }
            Self::TianJi | Self::TaiYang | Self::WuQu | Self::TianTong | Self::LianZhen => {
                Some(Galaxy::North)
            }
            Self::TaiYin | Self::TanLang | Self::JuMen | Self::TianLiang | Self::PoJun => {
                Some(Galaxy::South)
            }
            Self::TianFu | Self::TianXiang | Self::QiSha => None,
        }
    }
}

/// Which stars a chart places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StarPolicy {
    /// All major and minor stars.
    #[default]
    Normal,
    /// Major stars only.
    OnlyMajor,
    /// Skip the major stars no transformation can target.
    OnlyTransformation,
}

impl StarPolicy {
    pub const fn places_minor(self) -> bool {
        !matches!(self, Self::OnlyMajor)
    }
}

/// Ring positions of the two anchor stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarAnchors {
    pub ziwei: usize,
    pub tianfu: usize,
}

impl StarAnchors {
    /// Anchors from an explicit principal-star position.
    pub const fn from_ziwei(ziwei: usize) -> Self {
        let ziwei = wrap12(ziwei as i32);
        Self {
            ziwei,
            tianfu: mirror(ziwei),
        }
    }
}

/// Locate ZiWei and TianFu from the lunar day (1-based) and the scheme.
///
/// `offset` is the amount that makes `day + offset` divisible by the scheme
/// value; the quotient picks the base position and an even offset moves
/// forward while an odd offset moves back.
pub const fn star_index(day: u32, scheme: FiveElementScheme) -> StarAnchors {
    let s = scheme.value() as i32;
    let day = day as i32;
    let offset = (-(day % s)).rem_euclid(s);
    let quotient = ((day + offset) / s) % 12;
    let shift = if offset % 2 == 0 { offset } else { -offset };
    StarAnchors::from_ziwei(wrap12(quotient - 1 + shift))
}

/// Ring positions of the four minor stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MinorStarIndices {
    pub zuofu: usize,
    pub youbi: usize,
    pub wenchang: usize,
    pub wenqu: usize,
}

/// Ring position of the Dragon (Chen) branch.
const DRAGON_ANCHOR: i32 = Branch::Chen.index() as i32 - RING_START_BRANCH;

/// Ring position of the Dog (Xu) branch.
const DOG_ANCHOR: i32 = Branch::Xu.index() as i32 - RING_START_BRANCH;

/// ZuoFu/WenQu walk forward from the Dragon, YouBi/WenChang back from the Dog.
pub const fn minor_star_indices(month_index: u32, hour_index: u32) -> MinorStarIndices {
    let m = month_index as i32;
    let h = hour_index as i32;
    MinorStarIndices {
        zuofu: wrap12(DRAGON_ANCHOR + m),
        youbi: wrap12(DOG_ANCHOR - m),
        wenchang: wrap12(DOG_ANCHOR - h),
        wenqu: wrap12(DRAGON_ANCHOR + h),
    }
}

/// A star at a ring position, with the direction its group walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarPlacement {
    pub star: Star,
    pub position: usize,
    pub direction: i8,
}

/// Slots walked counter-clockwise from ZiWei; `None` slots stay empty.
pub const ZIWEI_GROUP: [Option<Star>; 9] = [
    Some(Star::ZiWei),
    Some(Star::TianJi),
    None,
    Some(Star::TaiYang),
    Some(Star::WuQu),
    Some(Star::TianTong),
    None,
    None,
    Some(Star::LianZhen),
];

/// Slots walked clockwise from TianFu.
pub const TIANFU_GROUP: [Option<Star>; 11] = [
    Some(Star::TianFu),
    Some(Star::TaiYin),
    Some(Star::TanLang),
    Some(Star::JuMen),
    Some(Star::TianXiang),
    Some(Star::TianLiang),
    Some(Star::QiSha),
    None,
    None,
    None,
    Some(Star::PoJun),
];

/// Stars that never receive a transformation.
const UNTRANSFORMED: [Star; 3] = [Star::TianFu, Star::TianXiang, Star::QiSha];

/// Lay out the major stars from the two anchors.
///
/// Slot `k` of a group lands at `anchor + direction * k`. Under
/// [`StarPolicy::OnlyTransformation`] TianFu, TianXiang and QiSha are left out.
pub fn major_star_placements(anchors: StarAnchors, policy: StarPolicy) -> Vec<StarPlacement> {
    let skip_untransformed = matches!(policy, StarPolicy::OnlyTransformation);
    let ziwei = walk_group(&ZIWEI_GROUP, anchors.ziwei, -1);
    let tianfu = walk_group(&TIANFU_GROUP, anchors.tianfu, 1);
    ziwei
        .chain(tianfu)
        .filter(|p| !(skip_untransformed && UNTRANSFORMED.contains(&p.star)))
        .collect()
}

fn walk_group(
    slots: &'static [Option<Star>],
    anchor: usize,
    direction: i8,
) -> impl Iterator<Item = StarPlacement> {
    slots.iter().enumerate().filter_map(move |(k, slot)| {
        slot.map(|star| StarPlacement {
            star,
            position: jump(anchor, direction as i32 * k as i32),
            direction,
        })
    })
}

/// The four minor stars, each placed directly at its computed position.
pub fn minor_star_placements(indices: MinorStarIndices) -> [StarPlacement; 4] {
    [
        StarPlacement {
            star: Star::ZuoFu,
            position: indices.zuofu,
            direction: 1,
        },
        StarPlacement {
            star: Star::YouBi,
            position: indices.youbi,
            direction: -1,
        },
        StarPlacement {
            star: Star::WenChang,
            position: indices.wenchang,
            direction: -1,
        },
        StarPlacement {
            star: Star::WenQu,
            position: indices.wenqu,
            direction: 1,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position_of(placements: &[StarPlacement], star: Star) -> Option<usize> {
        placements.iter().find(|p| p.star == star).map(|p| p.position)
    }

    #[test]
    fn star_index_fixtures() {
        assert_eq!(
            star_index(15, FiveElementScheme::Mu),
            StarAnchors { ziwei: 4, tianfu: 8 }
        );
        assert_eq!(
            star_index(21, FiveElementScheme::Tu),
            StarAnchors { ziwei: 8, tianfu: 4 }
        );
    }

    #[test]
    fn star_index_always_on_ring() {
        for scheme in crate::element::ALL_SCHEMES {
            for day in 1..=30 {
                let a = star_index(day, scheme);
                assert!(a.ziwei < 12);
                assert_eq!(mirror(a.ziwei), a.tianfu);
            }
        }
    }

    #[test]
    fn minor_fixtures() {
        assert_eq!(
            minor_star_indices(0, 0),
            MinorStarIndices {
                zuofu: 2,
                youbi: 8,
                wenchang: 8,
                wenqu: 2
            }
        );
        assert_eq!(
            minor_star_indices(5, 7),
            MinorStarIndices {
                zuofu: 7,
                youbi: 3,
                wenchang: 1,
                wenqu: 9
            }
        );
    }

    #[test]
    fn fourteen_major_stars() {
        let anchors = StarAnchors::from_ziwei(4);
        let placed = major_star_placements(anchors, StarPolicy::Normal);
        assert_eq!(placed.len(), 14);
        assert_eq!(position_of(&placed, Star::ZiWei), Some(4));
        assert_eq!(position_of(&placed, Star::TianJi), Some(3));
        assert_eq!(position_of(&placed, Star::TaiYang), Some(1));
        assert_eq!(position_of(&placed, Star::LianZhen), Some(8));
        assert_eq!(position_of(&placed, Star::TianFu), Some(8));
        assert_eq!(position_of(&placed, Star::TaiYin), Some(9));
        assert_eq!(position_of(&placed, Star::QiSha), Some(2));
        assert_eq!(position_of(&placed, Star::PoJun), Some(6));
    }

    #[test]
    fn only_transformation_skips_three() {
        let anchors = StarAnchors::from_ziwei(0);
        let placed = major_star_placements(anchors, StarPolicy::OnlyTransformation);
        assert_eq!(placed.len(), 11);
        for star in UNTRANSFORMED {
            assert_eq!(position_of(&placed, star), None);
        }
    }

    #[test]
    fn galaxies() {
        assert_eq!(Star::ZiWei.galaxy(), Some(Galaxy::Center));
        assert_eq!(Star::PoJun.galaxy(), Some(Galaxy::South));
        assert_eq!(Star::QiSha.galaxy(), None);
        assert_eq!(Star::WenQu.kind(), StarKind::Minor);
        assert_eq!(ALL_STARS.iter().filter(|s| s.is_major()).count(), 14);
    }
}
