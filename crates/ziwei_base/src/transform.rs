//! The four transformations ("si hua") and their stem table.
//!
//! Each stem names four stars, one per transformation in A..D order.
//! A lookup is a pure function of `(stem, star)`; [`TransformationCache`]
//! lets callers memoize it without changing the result.

use std::collections::HashMap;
use std::sync::RwLock;

use serde::Serialize;

use crate::star::Star;
use crate::stem::Stem;

/// One of the four transformation categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Transformation {
    /// Lu (fortune).
    A,
    /// Quan (authority).
    B,
    /// Ke (merit).
    C,
    /// Ji (taboo).
    D,
}

/// All four categories in tuple order.
pub const ALL_TRANSFORMATIONS: [Transformation; 4] = [
    Transformation::A,
    Transformation::B,
    Transformation::C,
    Transformation::D,
];

impl Transformation {
    /// Translation key segment (`transformation.A`).
    pub const fn key(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }

    /// Conventional pinyin name.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::A => "Lu",
            Self::B => "Quan",
            Self::C => "Ke",
            Self::D => "Ji",
        }
    }
}

use crate::star::Star::{
    JuMen, LianZhen, PoJun, TaiYang, TaiYin, TanLang, TianJi, TianLiang, TianTong, WenChang,
    WenQu, WuQu, YouBi, ZiWei, ZuoFu,
};

/// Transformation stars per stem, indexed by stem index.
pub const STEM_TRANSFORMATIONS: [[Star; 4]; 10] = [
    // Jia
    [LianZhen, PoJun, WuQu, TaiYang],
    // Yi
    [TianJi, TianLiang, ZiWei, TaiYin],
    // Bing
    [TianTong, TianJi, WenChang, LianZhen],
    // Ding
    [TaiYin, TianTong, TianJi, JuMen],
    // Wu
    [TanLang, TaiYin, YouBi, TianJi],
    // Ji
    [WuQu, TanLang, TianLiang, WenQu],
    // Geng
    [TaiYang, WuQu, TaiYin, TianTong],
    // Xin
    [JuMen, TaiYang, WenQu, WenChang],
    // Ren
    [TianLiang, ZiWei, ZuoFu, WuQu],
    // Gui
    [PoJun, JuMen, TaiYin, TanLang],
];

/// The four stars a stem transforms ("flying" stars of a palace stem).
pub const fn flying(stem: Stem) -> [Star; 4] {
    STEM_TRANSFORMATIONS[stem.index() as usize]
}

/// Transformation `stem` gives to `star`, if any.
pub fn resolve(stem: Stem, star: Star) -> Option<Transformation> {
    flying(stem)
        .iter()
        .position(|&s| s == star)
        .map(|i| ALL_TRANSFORMATIONS[i])
}

/// Memo table for [`resolve`], keyed by `(stem, star)`.
///
/// A cached entry stores the full lookup result, including "no
/// transformation". Writes for the same key always carry the same value.
pub trait TransformationCache: Send + Sync {
    /// Cached result, or `None` when the key has not been stored.
    fn get(&self, stem: Stem, star: Star) -> Option<Option<Transformation>>;
    fn set(&self, stem: Stem, star: Star, value: Option<Transformation>);
    fn has(&self, stem: Stem, star: Star) -> bool;
    fn clear(&self);
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Cache that stores nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl TransformationCache for NoCache {
    fn get(&self, _stem: Stem, _star: Star) -> Option<Option<Transformation>> {
        None
    }

    fn set(&self, _stem: Stem, _star: Star, _value: Option<Transformation>) {}

    fn has(&self, _stem: Stem, _star: Star) -> bool {
        false
    }

    fn clear(&self) {}

    fn len(&self) -> usize {
        0
    }
}

/// Cache shareable across calls and threads (last write wins).
#[derive(Debug, Default)]
pub struct SharedCache {
    entries: RwLock<HashMap<(Stem, Star), Option<Transformation>>>,
}

impl SharedCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransformationCache for SharedCache {
    fn get(&self, stem: Stem, star: Star) -> Option<Option<Transformation>> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(&(stem, star)).copied()
    }

    fn set(&self, stem: Stem, star: Star, value: Option<Transformation>) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert((stem, star), value);
    }

    fn has(&self, stem: Stem, star: Star) -> bool {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.contains_key(&(stem, star))
    }

    fn clear(&self) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.clear();
    }

    fn len(&self) -> usize {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.len()
    }
}

/// [`resolve`] through a cache.
pub fn resolve_cached(
    cache: &dyn TransformationCache,
    stem: Stem,
    star: Star,
) -> Option<Transformation> {
    if let Some(hit) = cache.get(stem, star) {
        return hit;
    }
    let value = resolve(stem, star);
    cache.set(stem, star, value);
    value
}
