use anyhow::Result;
use clap::Args;
use wellness_core::workout::generate;
use wellness_core::{
    DietPlanner, ExperienceLevel, MealPlan, NutrientCatalog, TrainingGoal, WorkoutPlan,
    WorkoutPreference,
};

use crate::profile_cmd::require_profile;
use crate::report::engine_failure;
use crate::state::Session;

#[derive(Args, Debug, Default)]
pub struct WorkoutArgs {
    /// beginner | intermediate | advanced
    #[arg(long)]
    pub level: Option<ExperienceLevel>,

    /// muscle-build | fat-loss
    #[arg(long)]
    pub goal: Option<TrainingGoal>,

    /// Training days per week (3-6)
    #[arg(long)]
    pub days: Option<u8>,

    /// Exercises per session (3-5)
    #[arg(long)]
    pub variations: Option<u8>,
}

impl WorkoutArgs {
    fn overrides_any(&self) -> bool {
        self.level.is_some()
            || self.goal.is_some()
            || self.days.is_some()
            || self.variations.is_some()
    }

    fn apply(&self, mut pref: WorkoutPreference) -> WorkoutPreference {
        if let Some(level) = self.level {
            pref.level = level;
        }
        if let Some(goal) = self.goal {
            pref.goal = goal;
        }
        if let Some(days) = self.days {
            pref.days_per_week = days;
        }
        if let Some(v) = self.variations {
            pref.variations = v;
        }
        pref
    }
}

/// Generate from the stored preference; flags override it and are saved once the plan succeeds.
pub fn workout(session: &Session, args: WorkoutArgs, json: bool) -> Result<()> {
    let store = session.profiles()?;
    let pref = args.apply(store.workout_preference_or_default(&session.username)?);
    let plan = generate(pref.level, pref.goal, pref.days_per_week, pref.variations)
        .map_err(|e| engine_failure("cannot generate plan", e))?;

    if args.overrides_any() {
        store.put_workout_preference(&session.username, pref)?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print_workout(&plan);
    }
    Ok(())
}

fn print_workout(plan: &WorkoutPlan) {
    println!(
        "# {} split | {} | {} ({} days)\n",
        plan.split_name,
        plan.level,
        plan.goal,
        plan.days.len()
    );
    for day in &plan.days {
        println!("Day {}: {}", day.day, day.focus);
        for ex in &day.exercises {
            println!("  {:<24} {} x {}", ex.name, ex.sets, ex.rep_range);
        }
        println!();
    }
}

pub fn diet(session: &Session, json: bool) -> Result<()> {
    let profile = require_profile(session)?;
    let catalog = NutrientCatalog::builtin();
    let plan = DietPlanner::new(&catalog)
        .and_then(|planner| planner.generate_for(&profile))
        .map_err(|e| engine_failure("cannot generate plan", e))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print_diet(&plan);
    }
    Ok(())
}

fn print_diet(plan: &MealPlan) {
    println!(
        "# {} plan | goal: {} | target {} kcal/day\n",
        plan.preference, plan.goal, plan.daily_target_calories
    );
    for meal in &plan.meals {
        println!(
            "{} ({}%): {} | ~{:.0} kcal",
            meal.slot,
            meal.slot.share_percent(),
            meal.title,
            meal.target_calories
        );
        println!("  {:<20} {:>8} {:>10} {:>9} {:>6}", "Food", "Qty", "Protein", "Fiber", "kcal");
        for item in &meal.items {
            println!(
                "  {:<20} {:>7}g {:>9.1}g {:>8.1}g {:>6}",
                item.food, item.quantity_grams, item.protein_g, item.fiber_g, item.calories
            );
        }
        println!();
    }
    println!(
        "Total: {} kcal | protein {:.1} g | fiber {:.1} g",
        plan.total_calories(),
        plan.total_protein(),
        plan.total_fiber()
    );
}
