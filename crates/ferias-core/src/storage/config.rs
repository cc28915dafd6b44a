//! TOML-based application configuration.
//!
//! Stores the countdown target, the school calendar and the display
//! strings. The defaults reproduce the 2025 school calendar the app ships
//! with, so a missing or partial file still yields a working countdown.
//!
//! Configuration is stored at `~/.config/ferias/config.toml`.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::calendar::SchoolCalendar;
use crate::error::ConfigError;

/// Countdown configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownConfig {
    /// Target instant as an ISO-8601 local literal, e.g. `2025-12-24T00:00:00`.
    #[serde(default = "default_target")]
    pub target: String,
    /// Seconds between recomputes in `watch`.
    #[serde(default = "default_tick_secs")]
    pub tick_secs: u64,
}

/// School calendar configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolConfig {
    /// Last day of classes, `YYYY-MM-DD`.
    #[serde(default = "default_last_day")]
    pub last_day: String,
    /// Holiday and recess dates inside the term, `YYYY-MM-DD`.
    #[serde(default = "default_closures")]
    pub closures: Vec<String>,
}

/// Display strings for the terminal board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_end_message")]
    pub end_message: String,
    #[serde(default = "default_footer")]
    pub footer: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/ferias/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub countdown: CountdownConfig,
    #[serde(default)]
    pub school: SchoolConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

// Default functions
fn default_target() -> String {
    "2025-12-24T00:00:00".into()
}
fn default_tick_secs() -> u64 {
    1
}
fn default_last_day() -> String {
    "2025-12-19".into()
}
fn default_closures() -> Vec<String> {
    vec![
        "2025-10-15".into(), // Recesso Escolar
        "2025-11-20".into(), // Feriado - Zumbi e Consciência Negra
        "2025-11-21".into(), // Recesso Escolar
    ]
}
fn default_title() -> String {
    "Contagem Regressiva para as Férias!".into()
}
fn default_end_message() -> String {
    "Felizes Férias!".into()
}
fn default_footer() -> String {
    "As férias começam em 24 de Dezembro de 2025.".into()
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            tick_secs: default_tick_secs(),
        }
    }
}

impl Default for SchoolConfig {
    fn default() -> Self {
        Self {
            last_day: default_last_day(),
            closures: default_closures(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            end_message: default_end_message(),
            footer: default_footer(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            countdown: CountdownConfig::default(),
            school: SchoolConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Config {
    /// Path of the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or write and return the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Parse and validate the target instant in the local timezone.
    ///
    /// # Errors
    ///
    /// Returns an error if the literal does not parse, or if it names a
    /// local time that is ambiguous or nonexistent (DST transitions).
    pub fn target_instant(&self) -> Result<DateTime<Local>, ConfigError> {
        let naive = NaiveDateTime::parse_from_str(&self.countdown.target, "%Y-%m-%dT%H:%M:%S")
            .map_err(|e| ConfigError::InvalidValue {
                key: "countdown.target".into(),
                message: format!("'{}': {e}", self.countdown.target),
            })?;
        Local
            .from_local_datetime(&naive)
            .single()
            .ok_or_else(|| ConfigError::InvalidValue {
                key: "countdown.target".into(),
                message: format!("'{naive}' is ambiguous or nonexistent in the local timezone"),
            })
    }

    /// Parse and validate the school calendar.
    ///
    /// # Errors
    ///
    /// Returns an error if the last day or any closure date is not a valid
    /// `YYYY-MM-DD` literal.
    pub fn school_calendar(&self) -> Result<SchoolCalendar, ConfigError> {
        let last_day = parse_date("school.last_day", &self.school.last_day)?;
        let closures = self
            .school
            .closures
            .iter()
            .map(|s| parse_date("school.closures", s))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SchoolCalendar::new(last_day, closures))
    }
}

fn parse_date(key: &str, value: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| ConfigError::InvalidValue {
        key: key.into(),
        message: format!("'{value}': {e}"),
    })
}
