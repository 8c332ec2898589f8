//! The ten heavenly stems, their polarity and element.

use serde::Serialize;

use crate::cycle::wrap10;

/// Yin/Yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Polarity {
    Yin,
    Yang,
}

impl Polarity {
    /// 0 = Yin, 1 = Yang.
    pub const fn index(self) -> u8 {
        match self {
            Self::Yin => 0,
            Self::Yang => 1,
        }
    }

    /// Translation key segment.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Yin => "Yin",
            Self::Yang => "Yang",
        }
    }
}

/// Gender of the chart subject, keyed by polarity (female = Yin, male = Yang).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub const fn polarity(self) -> Polarity {
        match self {
            Self::Female => Polarity::Yin,
            Self::Male => Polarity::Yang,
        }
    }

    /// Translation key segment (`gender.Yin` / `gender.Yang`).
    pub const fn key(self) -> &'static str {
        self.polarity().key()
    }
}

/// The five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    /// Pinyin key used in translation tables.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Wood => "Mu",
            Self::Fire => "Huo",
            Self::Earth => "Tu",
            Self::Metal => "Jin",
            Self::Water => "Shui",
        }
    }
}

/// The 10 heavenly stems, Jia first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cycle order (index 0 = Jia).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const STEM_HANZI: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];

impl Stem {
    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem at a (wrapped) cycle index.
    pub const fn from_index(index: i32) -> Self {
        ALL_STEMS[wrap10(index)]
    }

    /// Pinyin key (`stem.Jia`).
    pub const fn key(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// The character used in four-pillar notation.
    pub const fn hanzi(self) -> char {
        STEM_HANZI[self.index() as usize]
    }

    /// Parse a four-pillar stem character.
    pub fn from_hanzi(c: char) -> Option<Self> {
        STEM_HANZI
            .iter()
            .position(|&h| h == c)
            .map(|i| ALL_STEMS[i])
    }

    /// Even-indexed stems are Yang.
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Two consecutive stems per element, starting with Wood.
    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }
}
