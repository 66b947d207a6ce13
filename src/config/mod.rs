use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::errors::{FinsimError, Result};
use crate::utils::{app_data_dir, ensure_dir, write_atomic};

const CONFIG_FILE: &str = "config.json";

/// User-tunable simulator settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Bank balances below this raise a cautionary alert.
    #[serde(default = "Config::default_low_balance_threshold")]
    pub low_balance_threshold: f64,
    /// Horizon used when the caller does not pick one.
    #[serde(default = "Config::default_horizon_months")]
    pub default_horizon_months: u32,
    #[serde(default = "Config::default_currency")]
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            low_balance_threshold: Self::default_low_balance_threshold(),
            default_horizon_months: Self::default_horizon_months(),
            currency: Self::default_currency(),
        }
    }
}

impl Config {
    fn default_low_balance_threshold() -> f64 {
        100.0
    }

    fn default_horizon_months() -> u32 {
        12
    }

    fn default_currency() -> String {
        "MXN".into()
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Manager rooted at the application data directory.
    pub fn new() -> Result<Self> {
        Self::at(app_data_dir())
    }

    /// Manager rooted at an explicit directory (tests, alternate profiles).
    pub fn at(base: impl Into<PathBuf>) -> Result<Self> {
        let base = base.into();
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    /// Stored configuration, or the defaults when none was saved yet.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|err| FinsimError::ConfigError(err.to_string()))
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)?;
        tracing::debug!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
