use anyhow::{Result, bail};
use clap::Args;
use wellness_core::predictor::build_profile;
use wellness_core::{
    ActivityLevel, DietaryPreference, Gender, LinearCalorieModel, ProfileDraft, UserProfile,
    WeightGoal,
};

use crate::config::Config;
use crate::report::engine_failure;
use crate::state::Session;

#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Display name
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub age: u32,

    /// Body weight in kg
    #[arg(long)]
    pub weight: f64,

    /// Height in cm
    #[arg(long)]
    pub height: f64,

    /// female | male
    #[arg(long)]
    pub gender: Gender,

    /// 1 (sedentary) to 5 (extra active)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub activity: u8,

    /// pure-veg | non-veg | combined
    #[arg(long)]
    pub diet: DietaryPreference,

    /// maintain | lose | gain
    #[arg(long, default_value = "maintain")]
    pub goal: WeightGoal,
}

fn calorie_model(cfg: &Config) -> Result<LinearCalorieModel> {
    match &cfg.model.coefficients {
        Some(path) => LinearCalorieModel::load(path)
            .map_err(|e| engine_failure("calorie model unavailable", e)),
        None => Ok(LinearCalorieModel::default()),
    }
}

pub fn set(session: &Session, args: ProfileArgs) -> Result<()> {
    let model = calorie_model(&session.config)?;
    let draft = ProfileDraft {
        name: args.name,
        age: args.age,
        weight_kg: args.weight,
        height_cm: args.height,
        gender: args.gender,
        activity_level: ActivityLevel::new(args.activity)?,
        dietary_preference: args.diet,
        goal: args.goal,
    };
    let profile =
        build_profile(&model, draft).map_err(|e| engine_failure("cannot create profile", e))?;
    session.profiles()?.put_profile(&session.username, profile.clone())?;

    println!("Saved profile for {}", session.username);
    print_profile(&profile);
    Ok(())
}

pub fn show(session: &Session) -> Result<()> {
    let profile = require_profile(session)?;
    print_profile(&profile);
    let pref = session
        .profiles()?
        .workout_preference_or_default(&session.username)?;
    println!(
        "Workout:        {} / {} / {} days / {} variations",
        pref.level, pref.goal, pref.days_per_week, pref.variations
    );
    Ok(())
}

pub fn require_profile(session: &Session) -> Result<UserProfile> {
    match session.profiles()?.get(&session.username)? {
        Some(p) => Ok(p),
        None => bail!("No profile for {}. Run: wellness profile set --help", session.username),
    }
}

fn print_profile(p: &UserProfile) {
    println!("Name:           {}", p.name);
    println!("Age:            {}", p.age);
    println!("Weight:         {:.1} kg", p.weight_kg);
    println!("Height:         {:.1} cm", p.height_cm);
    println!("Activity:       {} ({})", p.activity_level.value(), p.activity_level.label());
    println!("Diet:           {}", p.dietary_preference);
    println!("Goal:           {}", p.goal);
    println!("Baseline:       {} kcal/day", p.baseline_calories);
}
