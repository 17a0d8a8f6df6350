//! Append-only food log in CSV.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;
use wellness_core::{EngineResult, FoodLog, FoodLogEntry, NewFoodEntry, Portion, Unit};

use crate::{FOOD_LOG_FILE, storage_err};

#[derive(Debug, Serialize, Deserialize)]
struct Row {
    id: u64,
    username: String,
    food: String,
    quantity: f64,
    unit: Unit,
    calories: i32,
    protein: f64,
    carbs: f64,
    fat: f64,
    fiber: f64,
    logged_at: NaiveDateTime,
}

impl From<&FoodLogEntry> for Row {
    fn from(e: &FoodLogEntry) -> Self {
        Row {
            id: e.id,
            username: e.username.clone(),
            food: e.food.clone(),
            quantity: e.quantity,
            unit: e.unit,
            calories: e.portion.calories,
            protein: e.portion.protein,
            carbs: e.portion.carbs,
            fat: e.portion.fat,
            fiber: e.portion.fiber,
            logged_at: e.logged_at,
        }
    }
}

impl From<Row> for FoodLogEntry {
    fn from(row: Row) -> Self {
        FoodLogEntry {
            id: row.id,
            username: row.username,
            food: row.food,
            quantity: row.quantity,
            unit: row.unit,
            portion: Portion {
                calories: row.calories,
                protein: row.protein,
                carbs: row.carbs,
                fat: row.fat,
                fiber: row.fiber,
            },
            logged_at: row.logged_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CsvFoodLog {
    path: PathBuf,
}

impl CsvFoodLog {
    pub fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        Ok(Self {
            path: dir.join(FOOD_LOG_FILE),
        })
    }

    pub fn read_all(&self) -> Result<Vec<FoodLogEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut rdr = csv::Reader::from_path(&self.path)
            .with_context(|| format!("opening {}", self.path.display()))?;
        rdr.deserialize::<Row>()
            .map(|row| {
                row.map(FoodLogEntry::from)
                    .with_context(|| format!("reading {}", self.path.display()))
            })
            .collect()
    }

    fn append_entry(&self, entry: NewFoodEntry) -> Result<FoodLogEntry> {
        let id = self.read_all()?.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        let logged = FoodLogEntry {
            id,
            username: entry.username,
            food: entry.food,
            quantity: entry.quantity,
            unit: entry.unit,
            portion: entry.portion,
            logged_at: entry.logged_at,
        };

        let needs_header = fs::metadata(&self.path).map(|m| m.len() == 0).unwrap_or(true);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("open {}", self.path.display()))?;
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        wtr.serialize(Row::from(&logged))?;
        wtr.flush()
            .with_context(|| format!("write {}", self.path.display()))?;
        debug!(food = %logged.food, id, "appended food row");
        Ok(logged)
    }
}

impl FoodLog for CsvFoodLog {
    fn append(&mut self, entry: NewFoodEntry) -> EngineResult<FoodLogEntry> {
        self.append_entry(entry).map_err(storage_err)
    }

    fn entries(&self, username: &str) -> EngineResult<Vec<FoodLogEntry>> {
        let all = self.read_all().map_err(storage_err)?;
        Ok(all.into_iter().filter(|e| e.username == username).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use wellness_core::NutrientCatalog;
    use wellness_core::intake::{daily_intake, prepare_entry};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 2, day)
            .unwrap()
            .and_hms_opt(hour, 30, 0)
            .unwrap()
    }

    #[test]
    fn logged_food_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = NutrientCatalog::builtin();
        let mut log = CsvFoodLog::open(dir.path()).unwrap();

        let milk = prepare_entry(&catalog, "asha", "Milk", 250.0, at(12, 8)).unwrap();
        let rice = prepare_entry(&catalog, "asha", "Rice", 150.0, at(12, 13)).unwrap();
        let other = prepare_entry(&catalog, "ravi", "Egg", 100.0, at(12, 9)).unwrap();
        let first = log.append(milk).unwrap();
        log.append(rice).unwrap();
        log.append(other).unwrap();
        assert_eq!(first.id, 1);

        let reopened = CsvFoodLog::open(dir.path()).unwrap();
        let entries = reopened.entries("asha").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], first);
        assert_eq!(entries[0].unit, Unit::Milliliters);
        assert_eq!(entries[1].id, 2);

        let day = daily_intake(&entries, at(12, 0).date());
        assert_eq!(day.totals.calories, 155 + 195);
    }
}
