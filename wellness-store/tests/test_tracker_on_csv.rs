use chrono::{Duration, TimeZone, Utc};
use wellness_core::analytics::summarize;
use wellness_core::{CheckIn, CivilClock, ComplianceTracker};
use wellness_store::CsvComplianceLog;

/// Tracker appends through the CSV log; a later process sees the same trend.
#[test]
fn trend_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let start = Utc.with_ymd_and_hms(2026, 2, 10, 3, 0, 0).unwrap();

    {
        let log = CsvComplianceLog::open(dir.path()).unwrap();
        let mut tracker = ComplianceTracker::new(log, CivilClock::default());
        tracker
            .submit_at("asha", CheckIn::new(true, true, false, false), start)
            .unwrap();
        tracker
            .submit_at("asha", CheckIn::new(true, true, true, false), start + Duration::hours(2))
            .unwrap();
        tracker
            .submit_at("asha", CheckIn::new(false, false, false, true), start + Duration::days(1))
            .unwrap();
    }

    let log = CsvComplianceLog::open(dir.path()).unwrap();
    let tracker = ComplianceTracker::new(log, CivilClock::default());
    let today = tracker
        .current_at("asha", start + Duration::hours(5))
        .unwrap()
        .unwrap();
    assert_eq!(today.id, 2);
    assert_eq!(today.total_score, 75.0);

    let summary = summarize(&tracker.records("asha").unwrap());
    let scores: Vec<f64> = summary.points.iter().map(|p| p.total_score).collect();
    assert_eq!(scores, vec![75.0, 25.0]);
    assert_eq!(summary.mean_score, Some(50.0));
}

/// 18:29 UTC and 18:31 UTC straddle midnight in Asia/Kolkata.
#[test]
fn civil_midnight_splits_dates() {
    let dir = tempfile::tempdir().unwrap();
    let log = CsvComplianceLog::open(dir.path()).unwrap();
    let mut tracker = ComplianceTracker::new(log, CivilClock::default());
    let before = Utc.with_ymd_and_hms(2026, 2, 11, 18, 29, 0).unwrap();
    let after = Utc.with_ymd_and_hms(2026, 2, 11, 18, 31, 0).unwrap();
    let a = tracker.submit_at("asha", CheckIn::default(), before).unwrap();
    let b = tracker.submit_at("asha", CheckIn::default(), after).unwrap();
    assert_eq!(a.date.to_string(), "2026-02-11");
    assert_eq!(b.date.to_string(), "2026-02-12");
}
