//! Chart configuration: boundary policies and star policy.
//!
//! Every field defaults to `normal`, so an empty document is a valid
//! configuration:
//!
//! ```toml
//! star = "onlyTransformation"
//!
//! [division]
//! year = "normal"
//! month = "forceNext"
//! day = "currentDayForLateHour"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use ziwei_base::StarPolicy;
use ziwei_calendar::DivisionConfig;

use crate::error::ChartError;

/// Policies applied while building a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub star: StarPolicy,
    pub division: DivisionConfig,
}

impl ChartConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ChartError> {
        toml::from_str(text).map_err(|e| ChartError::Config(e.to_string()))
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChartError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| ChartError::Io(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String, ChartError> {
        toml::to_string(self).map_err(|e| ChartError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ziwei_calendar::{DayDivision, MonthDivision, YearDivision};

    #[test]
    fn empty_document_is_default() {
        assert_eq!(ChartConfig::from_toml_str("").unwrap(), ChartConfig::default());
    }

    #[test]
    fn parses_camel_case_values() {
        let cfg = ChartConfig::from_toml_str(
            r#"
            star = "onlyTransformation"

            [division]
            year = "springBased"
            month = "forceNext"
            day = "currentDayForLateHour"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.star, StarPolicy::OnlyTransformation);
        assert_eq!(cfg.division.year, YearDivision::SpringBased);
        assert_eq!(cfg.division.month, MonthDivision::ForceNext);
        assert_eq!(cfg.division.day, DayDivision::CurrentDayForLateHour);
    }

    #[test]
    fn short_month_aliases() {
        let cfg = ChartConfig::from_toml_str("[division]\nmonth = \"last\"").unwrap();
        assert_eq!(cfg.division.month, MonthDivision::ForceLast);
        assert_eq!(cfg.division.day, DayDivision::Normal);
    }

    #[test]
    fn unknown_value_rejected() {
        let err = ChartConfig::from_toml_str("star = \"everything\"").unwrap_err();
        assert!(matches!(err, ChartError::Config(_)));
    }

    #[test]
    fn toml_round_trip() {
        let cfg = ChartConfig {
            star: StarPolicy::OnlyMajor,
            ..ChartConfig::default()
        };
        let text = cfg.to_toml_string().unwrap();
        assert!(text.contains("onlyMajor"), "{text}");
        assert_eq!(ChartConfig::from_toml_str(&text).unwrap(), cfg);
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join("ziwei_chart_config_test.toml");
        fs::write(&path, "star = \"onlyMajor\"\n").unwrap();
        let cfg = ChartConfig::load(&path).unwrap();
        assert_eq!(cfg.star, StarPolicy::OnlyMajor);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = ChartConfig::load("/nonexistent/ziwei.toml").unwrap_err();
        assert!(matches!(err, ChartError::Io(_)));
    }
}
