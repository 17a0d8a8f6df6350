//! User profile and workout preference types.
//!
//! These are plain values: the profile store owns them, planners borrow them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Normalise a user-facing label for matching: lowercase, no spaces/dashes/underscores.
fn normalize(label: &str) -> String {
    label
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_' | '/'))
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "female")]
    Female,
    #[serde(rename = "male")]
    Male,
}

impl Gender {
    /// Code fed to the calorie model: 0 = female, 1 = male.
    pub fn code(&self) -> u8 {
        match self {
            Gender::Female => 0,
            Gender::Male => 1,
        }
    }

    pub fn from_code(code: u8) -> EngineResult<Self> {
        match code {
            0 => Ok(Gender::Female),
            1 => Ok(Gender::Male),
            other => Err(EngineError::configuration(format!(
                "gender code must be 0 or 1 (got {other})"
            ))),
        }
    }
}

impl FromStr for Gender {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        match normalize(s).as_str() {
            "female" | "f" | "0" => Ok(Gender::Female),
            "male" | "m" | "1" => Ok(Gender::Male),
            _ => Err(EngineError::configuration(format!("unknown gender: {s}"))),
        }
    }
}

/// Activity level on the 1 (sedentary) ..= 5 (extra active) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ActivityLevel(u8);

impl ActivityLevel {
    pub fn new(level: u8) -> EngineResult<Self> {
        if (1..=5).contains(&level) {
            Ok(Self(level))
        } else {
            Err(EngineError::configuration(format!(
                "activity level must be 1..=5 (got {level})"
            )))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> &'static str {
        match self.0 {
            1 => "Sedentary",
            2 => "Lightly Active",
            3 => "Moderately Active",
            4 => "Very Active",
            _ => "Extra Active",
        }
    }
}

impl TryFrom<u8> for ActivityLevel {
    type Error = EngineError;

    fn try_from(value: u8) -> EngineResult<Self> {
        Self::new(value)
    }
}

impl From<ActivityLevel> for u8 {
    fn from(level: ActivityLevel) -> Self {
        level.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietaryPreference {
    #[serde(rename = "pure-veg")]
    PureVeg,
    #[serde(rename = "non-veg")]
    NonVeg,
    #[serde(rename = "combined")]
    Combined,
}

impl DietaryPreference {
    pub const ALL: [DietaryPreference; 3] = [
        DietaryPreference::PureVeg,
        DietaryPreference::NonVeg,
        DietaryPreference::Combined,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DietaryPreference::PureVeg => "Pure Veg",
            DietaryPreference::NonVeg => "Non-Veg",
            DietaryPreference::Combined => "Combined",
        }
    }
}

impl FromStr for DietaryPreference {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        match normalize(s).as_str() {
            "pureveg" | "veg" | "vegetarian" => Ok(DietaryPreference::PureVeg),
            "nonveg" => Ok(DietaryPreference::NonVeg),
            "combined" | "mixed" => Ok(DietaryPreference::Combined),
            _ => Err(EngineError::configuration(format!(
                "unknown dietary preference: {s}"
            ))),
        }
    }
}

impl fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Body-weight goal driving the daily calorie target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightGoal {
    #[serde(rename = "maintain")]
    Maintain,
    #[serde(rename = "lose")]
    Lose,
    #[serde(rename = "gain")]
    Gain,
}

impl WeightGoal {
    /// Daily calorie adjustment applied to the baseline.
    pub fn calorie_delta(&self) -> i32 {
        match self {
            WeightGoal::Maintain => 0,
            WeightGoal::Lose => -500,
            WeightGoal::Gain => 500,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeightGoal::Maintain => "Maintain Weight",
            WeightGoal::Lose => "Lose Weight",
            WeightGoal::Gain => "Gain Weight",
        }
    }
}

impl FromStr for WeightGoal {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        match normalize(s).as_str() {
            "maintain" | "maintainweight" => Ok(WeightGoal::Maintain),
            "lose" | "loseweight" => Ok(WeightGoal::Lose),
            "gain" | "gainweight" => Ok(WeightGoal::Gain),
            _ => Err(EngineError::configuration(format!("unknown weight goal: {s}"))),
        }
    }
}

impl fmt::Display for WeightGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub dietary_preference: DietaryPreference,
    pub goal: WeightGoal,
    /// Output of the calorie model at the time the profile was saved.
    pub baseline_calories: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "beginner")]
    Beginner,
    #[serde(rename = "intermediate")]
    Intermediate,
    #[serde(rename = "advanced")]
    Advanced,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Advanced => "Advanced",
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        match normalize(s).as_str() {
            "beginner" => Ok(ExperienceLevel::Beginner),
            "intermediate" => Ok(ExperienceLevel::Intermediate),
            "advanced" => Ok(ExperienceLevel::Advanced),
            _ => Err(EngineError::configuration(format!(
                "unknown experience level: {s}"
            ))),
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainingGoal {
    #[serde(rename = "muscle-build")]
    MuscleBuild,
    #[serde(rename = "fat-loss")]
    FatLoss,
}

impl TrainingGoal {
    pub fn label(&self) -> &'static str {
        match self {
            TrainingGoal::MuscleBuild => "Muscle Build",
            TrainingGoal::FatLoss => "Fat Loss",
        }
    }
}

impl FromStr for TrainingGoal {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        match normalize(s).as_str() {
            "musclebuild" | "muscle" | "build" => Ok(TrainingGoal::MuscleBuild),
            "fatloss" | "fat" | "cut" => Ok(TrainingGoal::FatLoss),
            _ => Err(EngineError::configuration(format!(
                "unknown training goal: {s}"
            ))),
        }
    }
}

impl fmt::Display for TrainingGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The tuple that produced a workout plan. Persisted next to the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPreference {
    pub level: ExperienceLevel,
    pub goal: TrainingGoal,
    pub days_per_week: u8,
    pub variations: u8,
}

impl Default for WorkoutPreference {
    fn default() -> Self {
        Self {
            level: ExperienceLevel::Beginner,
            goal: TrainingGoal::MuscleBuild,
            days_per_week: 4,
            variations: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_user_facing_labels() {
        assert_eq!("Pure Veg".parse::<DietaryPreference>().unwrap(), DietaryPreference::PureVeg);
        assert_eq!("non-veg".parse::<DietaryPreference>().unwrap(), DietaryPreference::NonVeg);
        assert_eq!("Lose Weight".parse::<WeightGoal>().unwrap(), WeightGoal::Lose);
        assert_eq!("Fat Loss".parse::<TrainingGoal>().unwrap(), TrainingGoal::FatLoss);
        assert_eq!("ADVANCED".parse::<ExperienceLevel>().unwrap(), ExperienceLevel::Advanced);
    }

    #[test]
    fn unknown_dietary_preference_is_configuration_error() {
        let err = "keto".parse::<DietaryPreference>().unwrap_err();
        assert!(matches!(err, EngineError::Configuration(_)));
    }

    #[test]
    fn activity_level_bounds() {
        assert!(ActivityLevel::new(0).is_err());
        assert!(ActivityLevel::new(6).is_err());
        assert_eq!(ActivityLevel::new(3).unwrap().label(), "Moderately Active");
    }

    #[test]
    fn activity_level_rejects_bad_json() {
        let res: Result<ActivityLevel, _> = serde_json::from_str("9");
        assert!(res.is_err());
        let ok: ActivityLevel = serde_json::from_str("2").unwrap();
        assert_eq!(ok.value(), 2);
    }

    #[test]
    fn gender_codes() {
        assert_eq!(Gender::Male.code(), 1);
        assert_eq!(Gender::from_code(0).unwrap(), Gender::Female);
        assert!(Gender::from_code(2).is_err());
    }

    #[test]
    fn goal_deltas() {
        assert_eq!(WeightGoal::Lose.calorie_delta(), -500);
        assert_eq!(WeightGoal::Gain.calorie_delta(), 500);
        assert_eq!(WeightGoal::Maintain.calorie_delta(), 0);
    }

    #[test]
    fn default_workout_preference() {
        let pref = WorkoutPreference::default();
        assert_eq!(pref.level, ExperienceLevel::Beginner);
        assert_eq!(pref.goal, TrainingGoal::MuscleBuild);
        assert_eq!(pref.days_per_week, 4);
        assert_eq!(pref.variations, 4);
    }
}
