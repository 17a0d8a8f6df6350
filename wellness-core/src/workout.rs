//! Workout planner: weekly split + per-day exercise table.
//!
//! Fully deterministic. Split choice depends on days/week (and level for 5
//! days); each day's exercises are a fixed pick from five muscle-group lists,
//! truncated to the requested variation count.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::profile::{ExperienceLevel, TrainingGoal, WorkoutPreference};

pub const SETS_PER_EXERCISE: u8 = 4;
pub const MIN_VARIATIONS: u8 = 3;
pub const MAX_VARIATIONS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Arms,
    Legs,
}

impl MuscleGroup {
    /// Five exercises in priority order; index 0 is the primary compound lift.
    pub fn exercises(&self) -> [&'static str; 5] {
        match self {
            MuscleGroup::Chest => [
                "Bench Press",
                "Incline DB Press",
                "Chest Flys",
                "Push-ups",
                "Dips",
            ],
            MuscleGroup::Back => [
                "Deadlifts",
                "Lat Pulldowns",
                "Bent Over Rows",
                "Pull-ups",
                "Cable Rows",
            ],
            MuscleGroup::Shoulders => [
                "Overhead Press",
                "Lateral Raises",
                "Front Raises",
                "Face Pulls",
                "Reverse Flys",
            ],
            MuscleGroup::Arms => [
                "Barbell Curls",
                "Hammer Curls",
                "Tricep Pushdowns",
                "Skull Crushers",
                "Preacher Curls",
            ],
            MuscleGroup::Legs => [
                "Squats",
                "Leg Press",
                "Leg Extensions",
                "Hamstring Curls",
                "Calf Raises",
            ],
        }
    }
}

/// Label assigned to one training day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Focus {
    FullBody,
    Upper,
    Lower,
    Push,
    Pull,
    Legs,
    Chest,
    Back,
    Shoulders,
    Arms,
}

impl Focus {
    pub fn label(&self) -> &'static str {
        match self {
            Focus::FullBody => "Full Body",
            Focus::Upper => "Upper",
            Focus::Lower => "Lower",
            Focus::Push => "Push",
            Focus::Pull => "Pull",
            Focus::Legs => "Legs",
            Focus::Chest => "Chest",
            Focus::Back => "Back",
            Focus::Shoulders => "Shoulders",
            Focus::Arms => "Arms",
        }
    }

    /// The full five-exercise pick for this focus, before truncation.
    pub fn picks(&self) -> [(MuscleGroup, usize); 5] {
        use MuscleGroup::{Arms, Back, Chest, Legs, Shoulders};
        match self {
            Focus::FullBody => [(Chest, 0), (Back, 0), (Legs, 0), (Shoulders, 0), (Arms, 0)],
            Focus::Upper => [(Chest, 1), (Back, 1), (Shoulders, 1), (Arms, 1), (Back, 2)],
            // Squats (Legs[0]) deliberately last.
            Focus::Lower => [(Legs, 1), (Legs, 2), (Legs, 3), (Legs, 4), (Legs, 0)],
            Focus::Push => [(Chest, 0), (Shoulders, 0), (Arms, 2), (Chest, 3), (Shoulders, 2)],
            Focus::Pull => [(Back, 0), (Back, 2), (Arms, 0), (Back, 3), (Arms, 1)],
            Focus::Legs => whole(Legs),
            Focus::Chest => whole(Chest),
            Focus::Back => whole(Back),
            Focus::Shoulders => whole(Shoulders),
            Focus::Arms => whole(Arms),
        }
    }

    pub fn exercise_names(&self) -> [&'static str; 5] {
        self.picks().map(|(group, idx)| group.exercises()[idx])
    }
}

fn whole(group: MuscleGroup) -> [(MuscleGroup, usize); 5] {
    [(group, 0), (group, 1), (group, 2), (group, 3), (group, 4)]
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Split {
    FullBody,
    UpperLower,
    BroSplit,
    PplUpperLower,
    Ppl,
}

impl Split {
    pub fn select(days_per_week: u8, level: ExperienceLevel) -> EngineResult<Self> {
        match (days_per_week, level) {
            (3, _) => Ok(Split::FullBody),
            (4, _) => Ok(Split::UpperLower),
            (5, ExperienceLevel::Advanced) => Ok(Split::BroSplit),
            (5, _) => Ok(Split::PplUpperLower),
            (6, _) => Ok(Split::Ppl),
            (other, _) => Err(EngineError::configuration(format!(
                "days per week must be 3, 4, 5 or 6 (got {other})"
            ))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Split::FullBody => "Full Body",
            Split::UpperLower => "Upper/Lower",
            Split::BroSplit => "Bro Split",
            Split::PplUpperLower => "PPL+Upper/Lower",
            Split::Ppl => "PPL",
        }
    }

    pub fn focuses(&self) -> &'static [Focus] {
        use Focus::*;
        match self {
            Split::FullBody => &[FullBody, FullBody, FullBody],
            Split::UpperLower => &[Upper, Lower, Upper, Lower],
            Split::BroSplit => &[Chest, Back, Shoulders, Legs, Arms],
            Split::PplUpperLower => &[Push, Pull, Legs, Upper, Lower],
            Split::Ppl => &[Push, Pull, Legs, Push, Pull, Legs],
        }
    }
}

/// Rep range shown per exercise.
pub fn rep_range(goal: TrainingGoal) -> &'static str {
    match goal {
        TrainingGoal::MuscleBuild => "8-12",
        TrainingGoal::FatLoss => "15-20",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseRow {
    pub name: String,
    pub sets: u8,
    pub rep_range: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based day number within the week.
    pub day: usize,
    pub focus: Focus,
    pub exercises: Vec<ExerciseRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub split: Split,
    pub split_name: String,
    pub level: ExperienceLevel,
    pub goal: TrainingGoal,
    pub days: Vec<DayPlan>,
}

impl WorkoutPlan {
    pub fn focus_sequence(&self) -> Vec<Focus> {
        self.days.iter().map(|d| d.focus).collect()
    }
}

/// Build the weekly plan for a preference tuple.
pub fn generate(
    level: ExperienceLevel,
    goal: TrainingGoal,
    days_per_week: u8,
    variations: u8,
) -> EngineResult<WorkoutPlan> {
    let split = Split::select(days_per_week, level)?;
    if !(MIN_VARIATIONS..=MAX_VARIATIONS).contains(&variations) {
        return Err(EngineError::configuration(format!(
            "variations per muscle must be {MIN_VARIATIONS}..={MAX_VARIATIONS} (got {variations})"
        )));
    }

    let reps = rep_range(goal);
    let days: Vec<DayPlan> = split
        .focuses()
        .iter()
        .enumerate()
        .map(|(i, focus)| DayPlan {
            day: i + 1,
            focus: *focus,
            exercises: focus
                .exercise_names()
                .iter()
                .take(variations as usize)
                .map(|name| ExerciseRow {
                    name: (*name).to_string(),
                    sets: SETS_PER_EXERCISE,
                    rep_range: reps.to_string(),
                })
                .collect(),
        })
        .collect();

    debug!(
        split = split.name(),
        days = days.len(),
        variations,
        level = level.label(),
        "generated workout plan"
    );

    Ok(WorkoutPlan {
        split,
        split_name: split.name().to_string(),
        level,
        goal,
        days,
    })
}

/// Convenience wrapper over [`generate`] for a stored preference.
pub fn generate_for(pref: &WorkoutPreference) -> EngineResult<WorkoutPlan> {
    generate(pref.level, pref.goal, pref.days_per_week, pref.variations)
}
