//! Disk cache of the most recently synced account list, so the app can
//! simulate against known accounts before the next remote refresh.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::Account;
use crate::errors::Result;
use crate::utils::{app_data_dir, ensure_dir, write_atomic};

const CACHE_FILE: &str = "accounts.json";

pub struct AccountStore {
    path: PathBuf,
}

impl AccountStore {
    /// Store rooted at the application data directory.
    pub fn new() -> Result<Self> {
        Self::at(app_data_dir())
    }

    /// Store rooted at an explicit directory (tests, alternate profiles).
    pub fn at(base: impl Into<PathBuf>) -> Result<Self> {
        let base = base.into();
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CACHE_FILE),
        })
    }

    pub fn save(&self, accounts: &[Account]) -> Result<()> {
        let json = serde_json::to_string_pretty(accounts)?;
        write_atomic(&self.path, &json)?;
        tracing::debug!(count = accounts.len(), "cached account snapshot");
        Ok(())
    }

    /// Cached accounts, or an empty list when nothing was cached yet.
    pub fn load(&self) -> Result<Vec<Account>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
