//! Calorie prediction seam.
//!
//! Profiles get their baseline calories from a `CaloriePredictor` once, at
//! creation time. The shipped implementation is a linear model whose
//! coefficients can be overridden from a JSON file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::profile::{ActivityLevel, DietaryPreference, Gender, UserProfile, WeightGoal};

/// The five features the model is trained on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetabolicInput {
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub gender: Gender,
    pub activity: ActivityLevel,
}

impl MetabolicInput {
    pub fn validate(&self) -> EngineResult<()> {
        if self.age == 0 {
            return Err(EngineError::configuration("age must be positive"));
        }
        if !(self.weight_kg > 0.0) {
            return Err(EngineError::configuration(format!(
                "weight must be positive (got {})",
                self.weight_kg
            )));
        }
        if !(self.height_cm > 0.0) {
            return Err(EngineError::configuration(format!(
                "height must be positive (got {})",
                self.height_cm
            )));
        }
        Ok(())
    }
}

pub trait CaloriePredictor {
    /// Daily maintenance calories for the input.
    fn predict(&self, input: &MetabolicInput) -> EngineResult<i32>;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearCalorieModel {
    pub intercept: f64,
    pub weight: f64,
    pub height: f64,
    pub age: f64,
    pub gender: f64,
    pub activity: f64,
}

impl Default for LinearCalorieModel {
    fn default() -> Self {
        Self {
            intercept: 0.0,
            weight: 10.0,
            height: 6.25,
            age: -5.0,
            gender: 5.0,
            activity: 250.0,
        }
    }
}

impl LinearCalorieModel {
    /// Read coefficients from a JSON file. Any failure means the model is unavailable.
    pub fn load(path: &Path) -> EngineResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "calorie model file unreadable");
            EngineError::unavailable(format!("calorie model {}: {e}", path.display()))
        })?;
        let model: Self = serde_json::from_str(&raw).map_err(|e| {
            warn!(path = %path.display(), error = %e, "calorie model file malformed");
            EngineError::unavailable(format!("calorie model {}: {e}", path.display()))
        })?;
        debug!(path = %path.display(), ?model, "loaded calorie model");
        Ok(model)
    }
}

impl CaloriePredictor for LinearCalorieModel {
    fn predict(&self, input: &MetabolicInput) -> EngineResult<i32> {
        input.validate()?;
        let raw = self.intercept
            + self.weight * input.weight_kg
            + self.height * input.height_cm
            + self.age * f64::from(input.age)
            + self.gender * f64::from(input.gender.code())
            + self.activity * f64::from(input.activity.value());
        if !raw.is_finite() || raw <= 0.0 || raw > f64::from(i32::MAX) {
            return Err(EngineError::Computation(format!(
                "calorie model produced {raw}"
            )));
        }
        Ok(raw.round() as i32)
    }
}

/// What the user submits to create or replace a profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDraft {
    pub name: String,
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub dietary_preference: DietaryPreference,
    pub goal: WeightGoal,
}

impl ProfileDraft {
    pub fn metabolic_input(&self) -> MetabolicInput {
        MetabolicInput {
            age: self.age,
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            gender: self.gender,
            activity: self.activity_level,
        }
    }
}

/// Ask the predictor for a baseline and produce the profile to persist.
pub fn build_profile(
    predictor: &dyn CaloriePredictor,
    draft: ProfileDraft,
) -> EngineResult<UserProfile> {
    let baseline_calories = predictor.predict(&draft.metabolic_input())?;
    Ok(UserProfile {
        name: draft.name,
        age: draft.age,
        weight_kg: draft.weight_kg,
        height_cm: draft.height_cm,
        gender: draft.gender,
        activity_level: draft.activity_level,
        dietary_preference: draft.dietary_preference,
        goal: draft.goal,
        baseline_calories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn draft() -> ProfileDraft {
        ProfileDraft {
            name: "Ravi".into(),
            age: 30,
            weight_kg: 70.0,
            height_cm: 175.0,
            gender: Gender::Male,
            activity_level: ActivityLevel::new(3).unwrap(),
            dietary_preference: DietaryPreference::NonVeg,
            goal: WeightGoal::Maintain,
        }
    }

    #[test]
    fn default_coefficients() {
        let model = LinearCalorieModel::default();
        // 700 + 1093.75 - 150 + 5 + 750
        assert_eq!(model.predict(&draft().metabolic_input()).unwrap(), 2399);
    }

    #[test]
    fn build_profile_fills_baseline() {
        let profile = build_profile(&LinearCalorieModel::default(), draft()).unwrap();
        assert_eq!(profile.baseline_calories, 2399);
        assert_eq!(profile.name, "Ravi");
    }

    #[test]
    fn bad_input_is_configuration() {
        let mut d = draft();
        d.weight_kg = 0.0;
        assert!(matches!(
            LinearCalorieModel::default().predict(&d.metabolic_input()),
            Err(EngineError::Configuration(_))
        ));
    }

    #[test]
    fn out_of_range_prediction_is_computation_error() {
        let mut d = draft();
        d.weight_kg = 1e9;
        d.goal = WeightGoal::Gain;
        assert!(matches!(
            build_profile(&LinearCalorieModel::default(), d),
            Err(EngineError::Computation(_))
        ));
    }

    #[test]
    fn missing_file_is_unavailable() {
        let err = LinearCalorieModel::load(Path::new("/nonexistent/wellness/model.json"))
            .unwrap_err();
        assert!(matches!(err, EngineError::Unavailable(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        let mut f = fs::File::create(&path).unwrap();
        write!(
            f,
            r#"{{"intercept": 100.0, "weight": 10.0, "height": 6.25,
                "age": -5.0, "gender": 5.0, "activity": 250.0}}"#
        )
        .unwrap();
        drop(f);
        let model = LinearCalorieModel::load(&path).unwrap();
        assert_eq!(model.predict(&draft().metabolic_input()).unwrap(), 2499);

        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            LinearCalorieModel::load(&path),
            Err(EngineError::Unavailable(_))
        ));
    }
}
