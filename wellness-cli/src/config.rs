use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use wellness_core::time::DEFAULT_TIMEZONE;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub user: UserSection,
    #[serde(default)]
    pub time: TimeSection,
    #[serde(default)]
    pub model: ModelSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSection {
    /// Used when `--user` is not given.
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSection {
    /// IANA zone that decides which calendar day a check-in belongs to.
    pub timezone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelSection {
    /// JSON coefficients for the calorie model. Built-in formula when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coefficients: Option<PathBuf>,
}

impl Default for UserSection {
    fn default() -> Self {
        Self {
            username: "default".to_string(),
        }
    }
}

impl Default for TimeSection {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}

pub fn load_config(data_dir: &Path) -> Result<Config> {
    let p = config_path(data_dir);
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config(data_dir: &Path, cfg: &Config) -> Result<()> {
    let p = config_path(data_dir);
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config(data_dir: &Path) -> Result<()> {
    let p = config_path(data_dir);
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(data_dir, &Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config(dir.path()).unwrap();
        assert_eq!(cfg.time.timezone, "Asia/Kolkata");
        assert!(cfg.model.coefficients.is_none());
    }

    #[test]
    fn partial_file_fills_missing_sections() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(config_path(dir.path()), "[user]\nusername = \"asha\"\n").unwrap();
        let cfg = load_config(dir.path()).unwrap();
        assert_eq!(cfg.user.username, "asha");
        assert_eq!(cfg.time, TimeSection::default());
    }

    #[test]
    fn init_writes_loadable_default() {
        let dir = tempfile::tempdir().unwrap();
        init_config(dir.path()).unwrap();
        assert_eq!(load_config(dir.path()).unwrap(), Config::default());
    }
}
