//! The twelve earthly branches and the two-hour branch slots.
//!
//! Branch indices start at Zi (Rat). The palace ring starts two steps later,
//! at Yin (Tiger): ring position 0 holds branch index 2.

use serde::Serialize;

use crate::cycle::wrap12;
use crate::stem::{Element, Polarity};

/// Branch index of the first ring position (Yin, the Tiger).
pub const RING_START_BRANCH: i32 = 2;

/// The 12 earthly branches, Zi first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cycle order (index 0 = Zi).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_HANZI: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

/// Clock range covered by each hour branch, indexed by branch.
pub const HOUR_RANGES: [&str; 12] = [
    "23:00~00:59",
    "01:00~02:59",
    "03:00~04:59",
    "05:00~06:59",
    "07:00~08:59",
    "09:00~10:59",
    "11:00~12:59",
    "13:00~14:59",
    "15:00~16:59",
    "17:00~18:59",
    "19:00~20:59",
    "21:00~22:59",
];

impl Branch {
    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch at a (wrapped) cycle index.
    pub const fn from_index(index: i32) -> Self {
        ALL_BRANCHES[wrap12(index)]
    }

    /// Branch sitting at a palace ring position.
    pub const fn from_ring(position: usize) -> Self {
        Self::from_index(position as i32 + RING_START_BRANCH)
    }

    /// Palace ring position of this branch (Yin = 0).
    pub const fn ring_position(self) -> usize {
        wrap12(self.index() as i32 - RING_START_BRANCH)
    }

    /// Pinyin key (`branch.Zi`, `zodiac.Zi`).
    pub const fn key(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Zodiac animal associated with the branch.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Zi => "Rat",
            Self::Chou => "Ox",
            Self::Yin => "Tiger",
            Self::Mao => "Rabbit",
            Self::Chen => "Dragon",
            Self::Si => "Snake",
            Self::Wu => "Horse",
            Self::Wei => "Goat",
            Self::Shen => "Monkey",
            Self::You => "Rooster",
            Self::Xu => "Dog",
            Self::Hai => "Pig",
        }
    }

    /// The character used in four-pillar notation.
    pub const fn hanzi(self) -> char {
        BRANCH_HANZI[self.index() as usize]
    }

    /// Parse a four-pillar branch character.
    pub fn from_hanzi(c: char) -> Option<Self> {
        BRANCH_HANZI
            .iter()
            .position(|&h| h == c)
            .map(|i| ALL_BRANCHES[i])
    }

    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Zi | Self::Hai => Element::Water,
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
        }
    }

    /// Clock range of this branch read as an hour slot.
    pub const fn hour_range(self) -> &'static str {
        HOUR_RANGES[self.index() as usize]
    }
}

/// Map a clock hour (0..=23) to its two-hour branch slot.
///
/// Returns 0..=12: hour 0 is the early Zi slot (0) and hour 23 the late Zi
/// slot (12), which callers wrap back to 0 once the day boundary is settled.
pub const fn hour_slot(hour: u32) -> u32 {
    (hour + 1) >> 1
}

/// Clock hour at the middle of an hour-branch slot: `(2·index):30:00`.
pub const fn slot_midpoint(hour_index: u32) -> (u32, u32, u32) {
    (hour_index * 2, 30, 0)
}
