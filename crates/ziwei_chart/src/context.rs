//! Explicit per-call context: clock, translator, config, cache and calendar.
//!
//! Nothing here is global. Callers that do not need overrides use
//! [`ChartContext::builder`] with just a calendar service.

use std::borrow::Cow;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::debug;
use ziwei_base::{NoCache, Star, Stem, Transformation, TransformationCache, resolve_cached};
use ziwei_calendar::CalendarService;

use crate::config::ChartConfig;
use crate::translate::{KeyTranslator, LanguageScope, Translator};

/// Source of "now" for the active-decade computation.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Everything a chart computation consumes besides its inputs.
#[derive(Clone)]
pub struct ChartContext {
    pub clock: Arc<dyn Clock>,
    pub translator: Arc<dyn Translator>,
    pub config: ChartConfig,
    pub cache: Arc<dyn TransformationCache>,
    pub calendar: Arc<dyn CalendarService>,
}

impl ChartContext {
    pub fn builder(calendar: Arc<dyn CalendarService>) -> ChartContextBuilder {
        ChartContextBuilder {
            calendar,
            clock: None,
            translator: None,
            config: ChartConfig::default(),
            cache: None,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn lookup(&self, key: &str) -> String {
        self.translator.lookup(key)
    }

    /// Transformation of `star` under `stem`, through the context cache.
    pub fn transformation(&self, stem: Stem, star: Star) -> Option<Transformation> {
        resolve_cached(self.cache.as_ref(), stem, star)
    }

    /// This context with its translator scoped to `language` for one call.
    ///
    /// Unknown languages keep the context's translator unchanged.
    pub fn with_language(&self, language: Option<&str>) -> Cow<'_, ChartContext> {
        match language {
            Some(language) if self.translator.has_language(language) => {
                let translator: Arc<dyn Translator> =
                    Arc::new(LanguageScope::new(self.translator.clone(), language));
                Cow::Owned(ChartContext {
                    translator,
                    ..self.clone()
                })
            }
            Some(language) => {
                debug!(
                    "unknown language {language}, keeping {}",
                    self.translator.current_language()
                );
                Cow::Borrowed(self)
            }
            None => Cow::Borrowed(self),
        }
    }
}

/// Builder for [`ChartContext`]; unset parts take their defaults.
pub struct ChartContextBuilder {
    calendar: Arc<dyn CalendarService>,
    clock: Option<Arc<dyn Clock>>,
    translator: Option<Arc<dyn Translator>>,
    config: ChartConfig,
    cache: Option<Arc<dyn TransformationCache>>,
}

impl ChartContextBuilder {
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = Some(translator);
        self
    }

    pub fn config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    pub fn cache(mut self, cache: Arc<dyn TransformationCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn build(self) -> ChartContext {
        ChartContext {
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            translator: self.translator.unwrap_or_else(|| Arc::new(KeyTranslator)),
            config: self.config,
            cache: self.cache.unwrap_or_else(|| Arc::new(NoCache)),
            calendar: self.calendar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use crate::translate::TableTranslator;
    use ziwei_base::SharedCache;
    use ziwei_calendar::SyntheticCalendar;

    #[test]
    fn defaults() {
        let ctx = ChartContext::builder(Arc::new(SyntheticCalendar::new())).build();
        assert_eq!(ctx.config, ChartConfig::default());
        assert_eq!(ctx.lookup("stem.Jia"), "stem.Jia");
        assert!(ctx.cache.is_empty());
        assert_eq!(ctx.transformation(Stem::Jia, Star::LianZhen), Some(Transformation::A));
        assert!(ctx.cache.is_empty());
    }

    #[test]
    fn fixed_clock_and_shared_cache() {
        let t = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let cache = Arc::new(SharedCache::new());
        let ctx = ChartContext::builder(Arc::new(SyntheticCalendar::new()))
            .clock(Arc::new(FixedClock(t)))
            .cache(cache.clone())
            .build();
        assert_eq!(ctx.now(), t);
        assert_eq!(ctx.transformation(Stem::Gui, Star::TanLang), Some(Transformation::D));
        assert_eq!(ctx.transformation(Stem::Gui, Star::ZiWei), None);
        assert_eq!(cache.len(), 2);
        assert!(cache.has(Stem::Gui, Star::ZiWei));
    }

    #[test]
    fn language_scope_is_per_call() {
        let ctx = ChartContext::builder(Arc::new(SyntheticCalendar::new()))
            .translator(Arc::new(TableTranslator::builtin().unwrap()))
            .build();
        let scoped = ctx.with_language(Some("zh-Hant"));
        assert!(matches!(scoped, Cow::Owned(_)));
        assert_eq!(scoped.lookup("palace.Ming.name"), "命宮");
        assert_eq!(ctx.lookup("palace.Ming.name"), "命宫");
        assert!(matches!(ctx.with_language(Some("fr")), Cow::Borrowed(_)));
        assert!(matches!(ctx.with_language(None), Cow::Borrowed(_)));
    }
}
