//! Configuration management for scorekeeper.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::keeper::ScoreKeeper;
use crate::rules::ScoringRules;
use crate::summary::{check_date_format, DEFAULT_DATE_FORMAT};
use crate::team::{default_name, ColorTag, TeamId, DEFAULT_COLOR};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "scorekeeper";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `SCOREKEEPER_`, sections split
///    on `__`, e.g. `SCOREKEEPER_RULES__SETS_TO_WIN=3`)
/// 2. TOML config file at `~/.config/scorekeeper/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scoring rules.
    pub rules: ScoringRules,
    /// Team names and colors.
    pub teams: TeamsConfig,
    /// Output formatting.
    pub display: DisplayConfig,
}

/// Per-team cosmetic configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamsConfig {
    /// Team A.
    pub a: TeamConfig,
    /// Team B.
    pub b: TeamConfig,
}

/// Name and color for one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamConfig {
    /// Display name.
    pub name: String,
    /// Opaque color tag handed to the host.
    pub color: String,
}

/// Output-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// strftime format for match dates.
    pub date_format: String,
}

impl TeamConfig {
    fn with_defaults(id: TeamId) -> Self {
        Self {
            name: default_name(id),
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

impl Default for TeamsConfig {
    fn default() -> Self {
        Self {
            a: TeamConfig::with_defaults(TeamId::A),
            b: TeamConfig::with_defaults(TeamId::B),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl TeamsConfig {
    /// Configuration for one team.
    #[must_use]
    pub fn get(&self, id: TeamId) -> &TeamConfig {
        match id {
            TeamId::A => &self.a,
            TeamId::B => &self.b,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `SCOREKEEPER_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("SCOREKEEPER_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a single configuration file.
    ///
    /// Unlike [`Config::load_from`], a missing file is an error, so a typo in
    /// the path is not reported as a valid (default) configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or does not load as a valid
    /// configuration.
    pub fn check_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::config_validation(format!(
                "no configuration file at {}",
                path.display()
            )));
        }
        Self::load_from(Some(path.to_path_buf()))
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        self.rules.validate()?;

        for id in TeamId::ALL {
            if self.teams.get(id).name.trim().is_empty() {
                return Err(Error::config_validation(format!(
                    "team {id} name must not be empty"
                )));
            }
        }

        check_date_format(&self.display.date_format).map_err(|err| {
            Error::config_validation(format!("invalid date_format: {err}"))
        })?;

        Ok(())
    }

    /// Build a fresh keeper with these rules, names, and colors.
    #[must_use]
    pub fn build_keeper(&self) -> ScoreKeeper {
        let mut keeper = ScoreKeeper::with_rules(self.rules);
        for id in TeamId::ALL {
            let team = self.teams.get(id);
            keeper.set_name(id, team.name.clone());
            keeper.set_color(id, ColorTag::new(team.color.clone()));
        }
        keeper
    }
}
