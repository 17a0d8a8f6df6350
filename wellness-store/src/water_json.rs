//! Per-day water totals, one entry per (username, date).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info;
use wellness_core::WaterDay;

use crate::WATER_FILE;

#[derive(Debug, Clone)]
pub struct WaterLog {
    path: PathBuf,
}

impl WaterLog {
    pub fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        Ok(Self {
            path: dir.join(WATER_FILE),
        })
    }

    fn load(&self) -> Result<Vec<WaterDay>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let s = fs::read_to_string(&self.path)
            .with_context(|| format!("read {}", self.path.display()))?;
        serde_json::from_str(&s).with_context(|| format!("parse {}", self.path.display()))
    }

    fn save(&self, days: &[WaterDay]) -> Result<()> {
        let json = serde_json::to_string_pretty(days)?;
        fs::write(&self.path, json).with_context(|| format!("write {}", self.path.display()))
    }

    /// Stored total for the day, or an empty one.
    pub fn day(&self, username: &str, date: NaiveDate) -> Result<WaterDay> {
        Ok(self
            .load()?
            .into_iter()
            .find(|d| d.username == username && d.date == date)
            .unwrap_or_else(|| WaterDay::new(username, date)))
    }

    fn update(
        &self,
        username: &str,
        date: NaiveDate,
        apply: impl FnOnce(&mut WaterDay) -> Result<()>,
    ) -> Result<WaterDay> {
        let mut days = self.load()?;
        let idx = match days.iter().position(|d| d.username == username && d.date == date) {
            Some(i) => i,
            None => {
                days.push(WaterDay::new(username, date));
                days.len() - 1
            }
        };
        apply(&mut days[idx])?;
        let updated = days[idx].clone();
        self.save(&days)?;
        Ok(updated)
    }

    pub fn add(&self, username: &str, date: NaiveDate, ml: u32) -> Result<WaterDay> {
        let day = self.update(username, date, |d| {
            d.add(ml)?;
            Ok(())
        })?;
        info!(username, %date, ml, total = day.consumed_ml, "logged water");
        Ok(day)
    }

    pub fn reset(&self, username: &str, date: NaiveDate) -> Result<WaterDay> {
        let day = self.update(username, date, |d| {
            d.reset();
            Ok(())
        })?;
        info!(username, %date, "reset water");
        Ok(day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, day).unwrap()
    }

    #[test]
    fn totals_are_per_user_and_day() {
        let dir = tempfile::tempdir().unwrap();
        let log = WaterLog::open(dir.path()).unwrap();
        assert_eq!(log.day("asha", d(12)).unwrap().consumed_ml, 0);

        log.add("asha", d(12), 200).unwrap();
        assert_eq!(log.add("asha", d(12), 500).unwrap().consumed_ml, 700);
        log.add("asha", d(13), 150).unwrap();
        log.add("ravi", d(12), 150).unwrap();

        let reopened = WaterLog::open(dir.path()).unwrap();
        assert_eq!(reopened.day("asha", d(12)).unwrap().consumed_ml, 700);
        assert_eq!(reopened.day("asha", d(13)).unwrap().consumed_ml, 150);

        assert_eq!(reopened.reset("asha", d(12)).unwrap().consumed_ml, 0);
        assert_eq!(reopened.day("ravi", d(12)).unwrap().consumed_ml, 150);
    }
}
