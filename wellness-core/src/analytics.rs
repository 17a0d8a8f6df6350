//! Compliance trend: one point per date, latest record wins.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::compliance::ComplianceRecord;
use crate::portion::round1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub total_score: f64,
}

/// Percent of trend days on which each habit was met.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HabitBreakdown {
    pub water: f64,
    pub diet: f64,
    pub workout: f64,
    pub sleep: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    pub points: Vec<TrendPoint>,
    /// `None` when there are no check-ins.
    pub mean_score: Option<f64>,
    pub habits: Option<HabitBreakdown>,
}

/// Keep the max-id record per date, ordered by date.
fn latest_per_date(records: &[ComplianceRecord]) -> BTreeMap<NaiveDate, &ComplianceRecord> {
    let mut by_date: BTreeMap<NaiveDate, &ComplianceRecord> = BTreeMap::new();
    for record in records {
        by_date
            .entry(record.date)
            .and_modify(|current| {
                if record.id > current.id {
                    *current = record;
                }
            })
            .or_insert(record);
    }
    by_date
}

pub fn trend(records: &[ComplianceRecord]) -> Vec<TrendPoint> {
    latest_per_date(records)
        .into_values()
        .map(|r| TrendPoint {
            date: r.date,
            total_score: r.total_score,
        })
        .collect()
}

pub fn mean_score(points: &[TrendPoint]) -> Option<f64> {
    if points.is_empty() {
        return None;
    }
    let sum: f64 = points.iter().map(|p| p.total_score).sum();
    Some(sum / points.len() as f64)
}

pub fn habit_breakdown(records: &[ComplianceRecord]) -> Option<HabitBreakdown> {
    let latest = latest_per_date(records);
    if latest.is_empty() {
        return None;
    }
    let days = latest.len() as f64;
    let pct = |met: usize| round1(met as f64 / days * 100.0);
    Some(HabitBreakdown {
        water: pct(latest.values().filter(|r| r.water).count()),
        diet: pct(latest.values().filter(|r| r.diet).count()),
        workout: pct(latest.values().filter(|r| r.workout).count()),
        sleep: pct(latest.values().filter(|r| r.sleep).count()),
    })
}

/// Trend, mean (rounded to one decimal) and habit breakdown in one pass over the log.
pub fn summarize(records: &[ComplianceRecord]) -> TrendSummary {
    let points = trend(records);
    let mean = mean_score(&points).map(round1);
    TrendSummary {
        points,
        mean_score: mean,
        habits: habit_breakdown(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, date: NaiveDate, score: f64) -> ComplianceRecord {
        let met = (score / 25.0) as usize;
        ComplianceRecord {
            id,
            username: "asha".into(),
            date,
            water: met >= 1,
            diet: met >= 2,
            workout: met >= 3,
            sleep: met >= 4,
            total_score: score,
        }
    }

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, day).unwrap()
    }

    #[test]
    fn latest_id_per_date_wins() {
        let records = vec![record(1, d(1), 60.0), record(2, d(1), 80.0), record(3, d(2), 40.0)];
        let points = trend(&records);
        assert_eq!(
            points,
            vec![
                TrendPoint { date: d(1), total_score: 80.0 },
                TrendPoint { date: d(2), total_score: 40.0 },
            ]
        );
    }

    #[test]
    fn order_is_by_date_not_insertion() {
        let records = vec![record(5, d(3), 25.0), record(6, d(1), 50.0), record(4, d(3), 100.0)];
        let points = trend(&records);
        assert_eq!(points[0].date, d(1));
        assert_eq!(points[1].total_score, 25.0); // id 5 beats id 4
    }

    #[test]
    fn mean_of_points() {
        let records = vec![record(1, d(1), 50.0), record(2, d(2), 100.0), record(3, d(3), 25.0)];
        assert_eq!(mean_score(&trend(&records)), Some(175.0 / 3.0));
        assert_eq!(summarize(&records).mean_score, Some(58.3));
    }

    #[test]
    fn empty_trend_has_no_mean() {
        assert_eq!(mean_score(&[]), None);
        let summary = summarize(&[]);
        assert!(summary.points.is_empty());
        assert!(summary.mean_score.is_none());
        assert!(summary.habits.is_none());
    }

    #[test]
    fn habits_use_latest_record() {
        let records = vec![record(1, d(1), 100.0), record(2, d(1), 25.0), record(3, d(2), 50.0)];
        let habits = habit_breakdown(&records).unwrap();
        assert_eq!(habits.water, 100.0);
        assert_eq!(habits.diet, 50.0);
        assert_eq!(habits.workout, 0.0);
        assert_eq!(habits.sleep, 0.0);
    }
}
