//! Text lookup for chart labels.
//!
//! The engine only builds keys of the form `category.identifier[.field]`
//! (`stem.Jia`, `palace.Ming.name`, `star.ZiWei.abbr`) and never inspects
//! the returned text.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use log::{debug, trace};

use crate::error::ChartError;

/// Placeholder returned for keys no table knows.
pub const MISSING_TRANSLATION: &str = "Missing translation";

/// Language of the bundled default tables.
pub const DEFAULT_LANGUAGE: &str = "zh-Hans";

const ZH_HANS: &str = include_str!("../locales/zh-Hans.toml");
const ZH_HANT: &str = include_str!("../locales/zh-Hant.toml");

/// Translation capability consumed by the chart builders.
pub trait Translator: Send + Sync {
    fn lookup(&self, key: &str) -> String;
    /// Lookup in `language` without touching the current language.
    fn lookup_in(&self, language: &str, key: &str) -> String {
        let _ = language;
        self.lookup(key)
    }
    fn has_language(&self, _language: &str) -> bool {
        false
    }
    fn current_language(&self) -> String;
    /// Switch language; returns `false` (and keeps the old one) if unknown.
    fn set_current_language(&self, language: &str) -> bool;
}

/// Returns every key verbatim. Useful when the caller renders text itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyTranslator;

impl Translator for KeyTranslator {
    fn lookup(&self, key: &str) -> String {
        key.to_string()
    }

    fn current_language(&self) -> String {
        "keys".to_string()
    }

    fn set_current_language(&self, _language: &str) -> bool {
        false
    }
}

/// A shared translator seen through one fixed language.
///
/// Requests that name a language get one of these, so the shared
/// translator's current language never changes under other callers.
pub struct LanguageScope {
    inner: Arc<dyn Translator>,
    language: String,
}

impl LanguageScope {
    pub fn new(inner: Arc<dyn Translator>, language: &str) -> Self {
        Self {
            inner,
            language: language.to_string(),
        }
    }
}

impl Translator for LanguageScope {
    fn lookup(&self, key: &str) -> String {
        self.inner.lookup_in(&self.language, key)
    }

    fn lookup_in(&self, language: &str, key: &str) -> String {
        self.inner.lookup_in(language, key)
    }

    fn has_language(&self, language: &str) -> bool {
        self.inner.has_language(language)
    }

    fn current_language(&self) -> String {
        self.language.clone()
    }

    /// The scope is fixed.
    fn set_current_language(&self, _language: &str) -> bool {
        false
    }
}

/// Per-language flat key tables with a fallback chain.
#[derive(Debug)]
pub struct TableTranslator {
    tables: HashMap<String, HashMap<String, String>>,
    fallbacks: Vec<String>,
    current: RwLock<String>,
}

impl TableTranslator {
    /// Empty translator whose current language is `language`.
    pub fn new(language: &str) -> Self {
        Self {
            tables: HashMap::new(),
            fallbacks: Vec::new(),
            current: RwLock::new(language.to_string()),
        }
    }

    /// The bundled Simplified and Traditional Chinese tables, Simplified
    /// current and used as fallback.
    pub fn builtin() -> Result<Self, ChartError> {
        Self::new(DEFAULT_LANGUAGE)
            .with_toml(DEFAULT_LANGUAGE, ZH_HANS)?
            .with_toml("zh-Hant", ZH_HANT)
            .map(|t| t.with_fallback(DEFAULT_LANGUAGE))
    }

    /// Add (or extend) a language from flat `key -> text` pairs.
    pub fn with_table<I, K, V>(mut self, language: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.tables
            .entry(language.to_string())
            .or_default()
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Add a language from a TOML document; nested tables join with `.`.
    pub fn with_toml(self, language: &str, text: &str) -> Result<Self, ChartError> {
        let root: toml::Table =
            toml::from_str(text).map_err(|e| ChartError::Config(format!("{language}: {e}")))?;
        let mut flat = Vec::new();
        flatten("", &root, &mut flat);
        Ok(self.with_table(language, flat))
    }

    /// Append a language to the fallback chain.
    pub fn with_fallback(mut self, language: &str) -> Self {
        self.fallbacks.push(language.to_string());
        self
    }

    /// Known languages, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut langs: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        langs.sort_unstable();
        langs
    }

    fn find(&self, language: &str, key: &str) -> Option<&str> {
        self.tables
            .get(language)
            .and_then(|t| t.get(key))
            .map(String::as_str)
    }
}

impl Translator for TableTranslator {
    fn lookup(&self, key: &str) -> String {
        self.lookup_in(&self.current_language(), key)
    }

    fn lookup_in(&self, language: &str, key: &str) -> String {
        let chain = std::iter::once(language).chain(self.fallbacks.iter().map(String::as_str));
        for candidate in chain {
            if let Some(text) = self.find(candidate, key) {
                return text.to_string();
            }
        }
        trace!("no translation for {key} in {language}");
        MISSING_TRANSLATION.to_string()
    }

    fn has_language(&self, language: &str) -> bool {
        self.tables.contains_key(language)
    }

    fn current_language(&self) -> String {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn set_current_language(&self, language: &str) -> bool {
        if !self.tables.contains_key(language) {
            debug!("unknown language {language}, keeping {}", self.current_language());
            return false;
        }
        *self.current.write().unwrap_or_else(|e| e.into_inner()) = language.to_string();
        true
    }
}

fn flatten(prefix: &str, table: &toml::Table, out: &mut Vec<(String, String)>) {
    for (key, value) in table {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            toml::Value::Table(inner) => flatten(&path, inner, out),
            toml::Value::String(s) => out.push((path, s.clone())),
            other => out.push((path, other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_translator_echoes() {
        let t = KeyTranslator;
        assert_eq!(t.lookup("star.ZiWei.name"), "star.ZiWei.name");
        assert!(!t.set_current_language("en"));
    }

    #[test]
    fn builtin_tables() {
        let t = TableTranslator::builtin().unwrap();
        assert_eq!(t.languages(), vec!["zh-Hans", "zh-Hant"]);
        assert_eq!(t.lookup("stem.Jia"), "甲");
        assert_eq!(t.lookup("palace.Ming.name"), "命宫");
        assert_eq!(t.lookup("palace.Ming.decade"), "大命");
        assert_eq!(t.lookup("star.TaiYang.abbr"), "阳");
        assert_eq!(t.lookup("fiveElementScheme.Jin"), "金四局");
    }

    #[test]
    fn switching_language() {
        let t = TableTranslator::builtin().unwrap();
        assert!(t.set_current_language("zh-Hant"));
        assert_eq!(t.current_language(), "zh-Hant");
        assert_eq!(t.lookup("palace.Ming.name"), "命宮");
        assert!(!t.set_current_language("fr"));
        assert_eq!(t.current_language(), "zh-Hant");
    }

    #[test]
    fn scope_leaves_shared_language_alone() {
        let shared: Arc<dyn Translator> = Arc::new(TableTranslator::builtin().unwrap());
        let scope = LanguageScope::new(shared.clone(), "zh-Hant");
        assert_eq!(scope.lookup("palace.Ming.name"), "命宮");
        assert_eq!(scope.current_language(), "zh-Hant");
        assert!(!scope.set_current_language("zh-Hans"));
        assert_eq!(shared.current_language(), "zh-Hans");
        assert_eq!(shared.lookup("palace.Ming.name"), "命宫");
        assert_eq!(shared.lookup_in("zh-Hant", "stem.Jia"), "甲");
        assert!(shared.has_language("zh-Hant"));
        assert!(!KeyTranslator.has_language("zh-Hant"));
    }

    #[test]
    fn fallback_chain_and_missing() {
        let t = TableTranslator::new("en")
            .with_table("en", [("hour", "hour")])
            .with_table("zh-Hans", [("hour", "时"), ("year", "年")])
            .with_fallback("zh-Hans");
        assert_eq!(t.lookup("hour"), "hour");
        assert_eq!(t.lookup("year"), "年");
        assert_eq!(t.lookup("age"), MISSING_TRANSLATION);
    }

    #[test]
    fn bad_toml_is_config_error() {
        let err = TableTranslator::new("x").with_toml("x", "a = ").unwrap_err();
        assert!(matches!(err, ChartError::Config(_)));
    }
}
