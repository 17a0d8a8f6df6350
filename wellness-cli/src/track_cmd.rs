use anyhow::Result;
use clap::{Args, Subcommand};
use wellness_core::analytics::summarize;
use wellness_core::hydration::{QUICK_ADD_ML, status};
use wellness_core::{CheckIn, ComplianceRecord, ComplianceTracker, TrendSummary, WaterDay};

use crate::profile_cmd::require_profile;
use crate::report::engine_failure;
use crate::state::Session;

#[derive(Args, Debug)]
pub struct CheckinArgs {
    /// Drank enough water today
    #[arg(long)]
    pub water: bool,
    /// Followed the diet plan
    #[arg(long)]
    pub diet: bool,
    /// Completed the workout
    #[arg(long)]
    pub workout: bool,
    /// Slept well
    #[arg(long)]
    pub sleep: bool,
}

impl From<&CheckinArgs> for CheckIn {
    fn from(a: &CheckinArgs) -> Self {
        CheckIn::new(a.water, a.diet, a.workout, a.sleep)
    }
}

#[derive(Subcommand, Debug)]
pub enum WaterCommand {
    /// Goal, consumed and remaining for today
    Status,
    /// Add water in ml (quick amounts: 150, 200, 500)
    Add { ml: u32 },
    /// Reset today's total to zero
    Reset,
}

pub fn checkin(session: &Session, args: CheckinArgs) -> Result<()> {
    let mut tracker = ComplianceTracker::new(session.compliance_log()?, session.clock);
    let record = tracker
        .submit(&session.username, CheckIn::from(&args))
        .map_err(|e| engine_failure("cannot score check-in", e))?;
    println!("Check-in #{} for {}", record.id, record.date);
    print_record(&record);
    Ok(())
}

/// Latest check-in for today, if any.
pub fn score(session: &Session) -> Result<()> {
    let tracker = ComplianceTracker::new(session.compliance_log()?, session.clock);
    match tracker
        .current(&session.username)
        .map_err(|e| engine_failure("cannot read check-ins", e))?
    {
        Some(record) => print_record(&record),
        None => println!(
            "No check-in yet for {}. Run: wellness checkin --water --diet --workout --sleep",
            session.clock.today()
        ),
    }
    Ok(())
}

fn mark(met: bool) -> &'static str {
    if met { "yes" } else { "no" }
}

fn print_record(r: &ComplianceRecord) {
    println!(
        "water: {} | diet: {} | workout: {} | sleep: {}",
        mark(r.water),
        mark(r.diet),
        mark(r.workout),
        mark(r.sleep)
    );
    println!("Score: {:.0}/100", r.total_score);
}

pub fn trend(session: &Session, json: bool) -> Result<()> {
    let tracker = ComplianceTracker::new(session.compliance_log()?, session.clock);
    let records = tracker
        .records(&session.username)
        .map_err(|e| engine_failure("cannot read check-ins", e))?;
    let summary = summarize(&records);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_trend(&summary);
    }
    Ok(())
}

fn print_trend(summary: &TrendSummary) {
    let Some(mean) = summary.mean_score else {
        println!("No check-ins yet.");
        return;
    };
    println!("{:<12} {:>6}", "Date", "Score");
    for p in &summary.points {
        let bar = "#".repeat((p.total_score / 25.0) as usize);
        println!("{:<12} {:>6.0}  {}", p.date.to_string(), p.total_score, bar);
    }
    println!("\nMean score: {mean:.1} over {} days", summary.points.len());
    if let Some(h) = summary.habits {
        println!(
            "Habits met: water {:.0}% | diet {:.0}% | workout {:.0}% | sleep {:.0}%",
            h.water, h.diet, h.workout, h.sleep
        );
    }
}

pub fn water(session: &Session, command: WaterCommand) -> Result<()> {
    let profile = require_profile(session)?;
    let log = session.water_log()?;
    let today = session.clock.today();
    let day = match command {
        WaterCommand::Status => log.day(&session.username, today)?,
        WaterCommand::Add { ml } => log.add(&session.username, today, ml)?,
        WaterCommand::Reset => log.reset(&session.username, today)?,
    };
    print_water(profile.weight_kg, &day)
}

fn print_water(weight_kg: f64, day: &WaterDay) -> Result<()> {
    let s = status(weight_kg, day.consumed_ml)?;
    println!("Water for {}", day.date);
    println!(
        "Goal {:.0} ml ({:.2} L) | consumed {} ml | remaining {} ml | {:.0}%",
        s.goal_ml,
        s.goal_liters,
        s.consumed_ml,
        s.remaining_ml,
        s.progress * 100.0
    );
    if s.remaining_ml > 0 {
        let presets: Vec<String> = QUICK_ADD_ML.iter().map(|ml| ml.to_string()).collect();
        println!("Quick add: wellness water add <{}>", presets.join("|"));
    }
    Ok(())
}
