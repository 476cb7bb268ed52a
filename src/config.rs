//! Runtime configuration read from the environment (and `.env`).

use crate::error::ConfigError;
use std::path::PathBuf;
use std::str::FromStr;

pub const LOG_CONFIG_VAR: &str = "IPCALC_LOG_CONFIG";
pub const COLOR_VAR: &str = "IPCALC_COLOR";
const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for ColorChoice {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            _ => Err(ConfigError::InvalidColor(s.to_string())),
        }
    }
}

impl ColorChoice {
    /// Force `colored` on or off; `Auto` leaves its tty/NO_COLOR detection alone.
    pub fn apply(self) {
        match self {
            ColorChoice::Auto => {}
            ColorChoice::Always => colored::control::set_override(true),
            ColorChoice::Never => colored::control::set_override(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// log4rs YAML file.
    pub log_config: PathBuf,
    pub color: ColorChoice,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            color: ColorChoice::Auto,
        }
    }
}

impl Config {
    /// Call after `dotenv::dotenv()` so `.env` values are visible.
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(path) = lookup(LOG_CONFIG_VAR).filter(|p| !p.is_empty()) {
            config.log_config = PathBuf::from(path);
        }
        if let Some(value) = lookup(COLOR_VAR) {
            config.color = value.parse()?;
        }
        Ok(config)
    }
}
