//! Water goal and daily intake status.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

pub const ML_PER_KG: f64 = 35.0;

/// Quick-add amounts offered by the front end.
pub const QUICK_ADD_ML: [u32; 3] = [150, 200, 500];

/// Daily water goal in ml for a body weight.
pub fn goal_ml(weight_kg: f64) -> f64 {
    weight_kg * ML_PER_KG
}

/// Per-user, per-civil-day consumed total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterDay {
    pub username: String,
    pub date: NaiveDate,
    pub consumed_ml: u32,
}

impl WaterDay {
    pub fn new(username: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            username: username.into(),
            date,
            consumed_ml: 0,
        }
    }

    pub fn add(&mut self, ml: u32) -> EngineResult<u32> {
        self.consumed_ml = self.consumed_ml.checked_add(ml).ok_or_else(|| {
            EngineError::configuration(format!("water total overflow adding {ml} ml"))
        })?;
        Ok(self.consumed_ml)
    }

    pub fn reset(&mut self) {
        self.consumed_ml = 0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HydrationStatus {
    pub goal_ml: f64,
    pub goal_liters: f64,
    pub consumed_ml: u32,
    pub remaining_ml: u32,
    /// 0.0 ..= 1.0
    pub progress: f64,
}

pub fn status(weight_kg: f64, consumed_ml: u32) -> EngineResult<HydrationStatus> {
    if weight_kg <= 0.0 {
        return Err(EngineError::configuration(format!(
            "weight must be positive (got {weight_kg})"
        )));
    }
    let goal = goal_ml(weight_kg);
    let consumed = f64::from(consumed_ml);
    Ok(HydrationStatus {
        goal_ml: goal,
        goal_liters: (goal / 1000.0 * 100.0).round() / 100.0,
        consumed_ml,
        remaining_ml: (goal - consumed).max(0.0) as u32,
        progress: (consumed / goal).min(1.0),
    })
}
