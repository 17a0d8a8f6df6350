//! Daily compliance check-ins.
//!
//! A check-in is four yes/no habits. Each submission is appended as a new
//! record; nothing is ever updated in place. "Today's score" is whichever
//! record for today was appended last.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::EngineResult;
use crate::time::CivilClock;

/// The four habits answered in a check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CheckIn {
    pub water: bool,
    pub diet: bool,
    pub workout: bool,
    pub sleep: bool,
}

impl CheckIn {
    pub fn new(water: bool, diet: bool, workout: bool, sleep: bool) -> Self {
        Self {
            water,
            diet,
            workout,
            sleep,
        }
    }

    pub fn met_count(&self) -> u32 {
        [self.water, self.diet, self.workout, self.sleep]
            .iter()
            .filter(|met| **met)
            .count() as u32
    }

    /// One of 0, 25, 50, 75, 100.
    pub fn score(&self) -> f64 {
        f64::from(self.met_count()) / 4.0 * 100.0
    }
}

/// Persisted check-in. `id` increases with every append.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceRecord {
    pub id: u64,
    pub username: String,
    pub date: NaiveDate,
    pub water: bool,
    pub diet: bool,
    pub workout: bool,
    pub sleep: bool,
    pub total_score: f64,
}

impl ComplianceRecord {
    pub fn check_in(&self) -> CheckIn {
        CheckIn::new(self.water, self.diet, self.workout, self.sleep)
    }
}

/// Append-only record log. Implementations assign increasing ids.
pub trait ComplianceLog {
    fn append(
        &mut self,
        username: &str,
        date: NaiveDate,
        check_in: CheckIn,
        total_score: f64,
    ) -> EngineResult<ComplianceRecord>;

    /// All records for `username`, in insertion order.
    fn records(&self, username: &str) -> EngineResult<Vec<ComplianceRecord>>;
}

/// In-process log, mainly for tests and embedding.
#[derive(Debug, Default, Clone)]
pub struct MemoryComplianceLog {
    records: Vec<ComplianceRecord>,
}

impl MemoryComplianceLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ComplianceLog for MemoryComplianceLog {
    fn append(
        &mut self,
        username: &str,
        date: NaiveDate,
        check_in: CheckIn,
        total_score: f64,
    ) -> EngineResult<ComplianceRecord> {
        let id = self.records.last().map_or(1, |r| r.id + 1);
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
        self.records.push(record.clone());
        Ok(record)
    }

    fn records(&self, username: &str) -> EngineResult<Vec<ComplianceRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.username == username)
            .cloned()
            .collect())
    }
}

/// Scores check-ins and appends them to a log.
#[derive(Debug)]
pub struct ComplianceTracker<L: ComplianceLog> {
    log: L,
    clock: CivilClock,
}

impl<L: ComplianceLog> ComplianceTracker<L> {
    pub fn new(log: L, clock: CivilClock) -> Self {
        Self { log, clock }
    }

    /// Score and append a check-in dated by the civil day of `now`.
    pub fn submit_at(
        &mut self,
        username: &str,
        check_in: CheckIn,
        now: DateTime<Utc>,
    ) -> EngineResult<ComplianceRecord> {
        let date = self.clock.date_at(now);
        let score = check_in.score();
        let record = self.log.append(username, date, check_in, score)?;
        info!(
            username,
            %date,
            id = record.id,
            score,
            "appended compliance record"
        );
        Ok(record)
    }

    pub fn submit(&mut self, username: &str, check_in: CheckIn) -> EngineResult<ComplianceRecord> {
        self.submit_at(username, check_in, Utc::now())
    }

    /// Latest record for the civil day of `now`, if any.
    pub fn current_at(
        &self,
        username: &str,
        now: DateTime<Utc>,
    ) -> EngineResult<Option<ComplianceRecord>> {
        let date = self.clock.date_at(now);
        let records = self.log.records(username)?;
        Ok(latest_for_date(&records, date).cloned())
    }

    pub fn current(&self, username: &str) -> EngineResult<Option<ComplianceRecord>> {
        self.current_at(username, Utc::now())
    }

    pub fn records(&self, username: &str) -> EngineResult<Vec<ComplianceRecord>> {
        self.log.records(username)
    }

    pub fn into_log(self) -> L {
        self.log
    }
}

/// Highest-id record on `date`.
pub fn latest_for_date(records: &[ComplianceRecord], date: NaiveDate) -> Option<&ComplianceRecord> {
    records
        .iter()
        .filter(|r| r.date == date)
        .max_by_key(|r| r.id)
}
