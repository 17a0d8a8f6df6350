use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use wellness_core::CivilClock;
use wellness_store::{CsvComplianceLog, CsvFoodLog, ProfileStore, WaterLog};

use crate::config::{Config, load_config};
use crate::report::engine_failure;

pub fn wellness_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".wellness"))
}

pub fn ensure_dir(dir: PathBuf) -> Result<PathBuf> {
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

/// Resolved user, data directory and civil clock for one invocation.
#[derive(Debug)]
pub struct Session {
    pub username: String,
    pub data_dir: PathBuf,
    pub clock: CivilClock,
    pub config: Config,
}

impl Session {
    pub fn open(data_dir: Option<PathBuf>, user: Option<String>) -> Result<Self> {
        let data_dir = ensure_dir(match data_dir {
            Some(d) => d,
            None => wellness_home()?,
        })?;
        let config = load_config(&data_dir)?;
        let clock = CivilClock::new(&config.time.timezone)
            .map_err(|e| engine_failure("config.toml [time]", e))?;
        let username = user.unwrap_or_else(|| config.user.username.clone());
        tracing::debug!(%username, dir = %data_dir.display(), tz = %clock.timezone(), "session");
        Ok(Self {
            username,
            data_dir,
            clock,
            config,
        })
    }

    pub fn profiles(&self) -> Result<ProfileStore> {
        ProfileStore::open(&self.data_dir)
    }

    pub fn compliance_log(&self) -> Result<CsvComplianceLog> {
        CsvComplianceLog::open(&self.data_dir)
    }

    pub fn food_log(&self) -> Result<CsvFoodLog> {
        CsvFoodLog::open(&self.data_dir)
    }

    pub fn water_log(&self) -> Result<WaterLog> {
        WaterLog::open(&self.data_dir)
    }
}
