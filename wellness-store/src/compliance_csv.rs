//! Append-only compliance log in CSV.
//!
//! Columns: id,username,date,water,diet,workout,sleep,total_score
//! Habit flags are stored as 0 or 100. The log assumes a single writer.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use wellness_core::{CheckIn, ComplianceLog, ComplianceRecord, EngineResult};

use crate::{COMPLIANCE_FILE, storage_err};

#[derive(Debug, Serialize, Deserialize)]
struct Row {
    id: u64,
    username: String,
    date: NaiveDate,
    water: u8,
    diet: u8,
    workout: u8,
    sleep: u8,
    total_score: f64,
}

fn flag(met: bool) -> u8 {
    if met { 100 } else { 0 }
}

impl From<&ComplianceRecord> for Row {
    fn from(r: &ComplianceRecord) -> Self {
        Row {
            id: r.id,
            username: r.username.clone(),
            date: r.date,
            water: flag(r.water),
            diet: flag(r.diet),
            workout: flag(r.workout),
            sleep: flag(r.sleep),
            total_score: r.total_score,
        }
    }
}

impl From<Row> for ComplianceRecord {
    fn from(row: Row) -> Self {
        ComplianceRecord {
            id: row.id,
            username: row.username,
            date: row.date,
            water: row.water != 0,
            diet: row.diet != 0,
            workout: row.workout != 0,
            sleep: row.sleep != 0,
            total_score: row.total_score,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CsvComplianceLog {
    path: PathBuf,
}

impl CsvComplianceLog {
    pub fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        Ok(Self {
            path: dir.join(COMPLIANCE_FILE),
        })
    }

    /// Every record, all users, in file order.
    pub fn read_all(&self) -> Result<Vec<ComplianceRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut rdr = csv::Reader::from_path(&self.path)
            .with_context(|| format!("opening {}", self.path.display()))?;
        let mut records = Vec::new();
        for row in rdr.deserialize::<Row>() {
            let row = row.with_context(|| format!("reading {}", self.path.display()))?;
            records.push(row.into());
        }
        Ok(records)
    }

    fn append_record(
        &self,
        username: &str,
        date: NaiveDate,
        check_in: CheckIn,
        total_score: f64,
    ) -> Result<ComplianceRecord> {
        let id = self.read_all()?.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let record = ComplianceRecord {
            id,
            username: username.to_string(),
            date,
            water: check_in.water,
            diet: check_in.diet,
            workout: check_in.workout,
            sleep: check_in.sleep,
            total_score,
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
        wtr.serialize(Row::from(&record))?;
        wtr.flush()
            .with_context(|| format!("write {}", self.path.display()))?;
        debug!(path = %self.path.display(), id, "appended compliance row");
        Ok(record)
    }
}

impl ComplianceLog for CsvComplianceLog {
    fn append(
        &mut self,
        username: &str,
        date: NaiveDate,
        check_in: CheckIn,
        total_score: f64,
    ) -> EngineResult<ComplianceRecord> {
        self.append_record(username, date, check_in, total_score)
            .map_err(storage_err)
    }

    fn records(&self, username: &str) -> EngineResult<Vec<ComplianceRecord>> {
        let all = self.read_all().map_err(storage_err)?;
        Ok(all.into_iter().filter(|r| r.username == username).collect())
    }
}
