//! Run configuration
//!
//! Persisted as pretty JSON. Every field has a default, so a partial file
//! (or no file at all) is a valid configuration.

use crate::codec::ColumnGuard;
use crate::engine::RuleSet;
use crate::error::Result;
use crate::grid::{Dimensions, DEFAULT_DENSITY};
use crate::render::DisplayMode;
use chrono::Datelike;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ROWS: usize = 5;
pub const DEFAULT_COLS: usize = 33;
/// Length cap of the profile bio field
pub const DEFAULT_MAX_LENGTH: usize = 160;
pub const DEFAULT_HISTORY_DEPTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Grid rows; must match the rows used to write the current bio
    pub rows: usize,
    /// Grid columns; must match the columns used to write the current bio
    pub cols: usize,
    /// Character budget of the external field
    pub max_length: usize,
    pub rules: RuleSet,
    pub display: DisplayMode,
    /// Pick rules and display from the day of the year instead
    pub random_by_day: bool,
    /// Shrink the grid with the dimension planner when it exceeds the budget
    pub fit_to_budget: bool,
    pub column_guard: ColumnGuard,
    pub random_density: f64,
    /// Boards remembered by the preview when looking for cycles
    pub history_depth: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            max_length: DEFAULT_MAX_LENGTH,
            rules: RuleSet::default(),
            display: DisplayMode::default(),
            random_by_day: false,
            fit_to_budget: false,
            column_guard: ColumnGuard::default(),
            random_density: DEFAULT_DENSITY,
            history_depth: DEFAULT_HISTORY_DEPTH,
        }
    }
}

impl RunConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = serde_json::from_str(&json)?;
        info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to the defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        info!("Saved config to {}", path.as_ref().display());
        Ok(())
    }

    pub fn dimensions(&self) -> Result<Dimensions> {
        Dimensions::new(self.rows, self.cols)
    }

    /// Rules and display for this run, honouring `random_by_day`
    pub fn effective_options(&self) -> (RuleSet, DisplayMode) {
        if self.random_by_day {
            options_for_today()
        } else {
            (self.rules, self.display)
        }
    }
}

/// Rules cycle every day; display flips every three days
pub fn options_for_day(day_of_year: u32) -> (RuleSet, DisplayMode) {
    let day = day_of_year as usize;
    let rules = RuleSet::ALL[day % RuleSet::ALL.len()];
    let display = DisplayMode::ALL[(day / RuleSet::ALL.len()) % DisplayMode::ALL.len()];
    (rules, display)
}

pub fn options_for_today() -> (RuleSet, DisplayMode) {
    options_for_day(chrono::Local::now().ordinal())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::default();
        assert_eq!((config.rows, config.cols, config.max_length), (5, 33, 160));
        assert_eq!(config.rules, RuleSet::Standard);
        assert_eq!(config.display, DisplayMode::Half);
        assert_eq!(config.column_guard, ColumnGuard::Columns);
        assert_eq!(config.effective_options(), (RuleSet::Standard, DisplayMode::Half));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: RunConfig =
            serde_json::from_str(r#"{"rows": 8, "cols": 18, "rules": "daynight"}"#).unwrap();
        assert_eq!(config.rows, 8);
        assert_eq!(config.cols, 18);
        assert_eq!(config.rules, RuleSet::DayNight);
        assert_eq!(config.max_length, DEFAULT_MAX_LENGTH);
        assert_eq!(config.display, DisplayMode::Half);
    }

    #[test]
    fn test_unknown_rule_is_rejected() {
        assert!(serde_json::from_str::<RunConfig>(r#"{"rules": "seeds"}"#).is_err());
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("biolife-config-{}.json", std::process::id()));
        let config = RunConfig {
            rows: 8,
            cols: 18,
            display: DisplayMode::Full,
            column_guard: ColumnGuard::Rows,
            ..RunConfig::default()
        };
        config.save(&path).unwrap();
        let loaded = RunConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let path = std::env::temp_dir().join("biolife-config-does-not-exist.json");
        assert_eq!(RunConfig::load_or_default(&path).unwrap(), RunConfig::default());
    }

    #[test]
    fn test_dimensions_validated() {
        let config = RunConfig {
            rows: 0,
            ..RunConfig::default()
        };
        assert!(config.dimensions().is_err());
    }

    #[test]
    fn test_options_for_day() {
        assert_eq!(options_for_day(0).0, RuleSet::Standard);
        assert_eq!(options_for_day(1).0, RuleSet::DayNight);
        assert_eq!(options_for_day(2).0, RuleSet::HighLife);
        assert_eq!(options_for_day(0).1, DisplayMode::Full);
        assert_eq!(options_for_day(3).1, DisplayMode::Half);
        assert_eq!(options_for_day(6), (RuleSet::Standard, DisplayMode::Full));
    }

    #[test]
    fn test_random_by_day_uses_schedule() {
        let config = RunConfig {
            random_by_day: true,
            ..RunConfig::default()
        };
        assert_eq!(config.effective_options(), options_for_today());
    }
}
