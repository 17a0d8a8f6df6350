//! Linear portion scaling of catalog macros.

use serde::{Deserialize, Serialize};

use crate::catalog::FoodItem;

/// Macros for a concrete quantity of one food.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Portion {
    pub calories: i32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
}

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Scale `food` to `quantity` grams (or ml): macros to one decimal, calories to an integer.
pub fn scale(food: &FoodItem, quantity: f64) -> Portion {
    let factor = quantity / 100.0;
    Portion {
        calories: (food.calories * factor).round() as i32,
        protein: round1(food.protein * factor),
        carbs: round1(food.carbs * factor),
        fat: round1(food.fat * factor),
        fiber: round1(food.fiber * factor),
    }
}

impl Portion {
    /// Sum of macro grams (protein + carbs + fat + fiber).
    pub fn macro_grams(&self) -> f64 {
        self.protein + self.carbs + self.fat + self.fiber
    }
}

impl std::ops::Add for Portion {
    type Output = Portion;

    fn add(self, rhs: Portion) -> Portion {
        Portion {
            calories: self.calories + rhs.calories,
            protein: round1(self.protein + rhs.protein),
            carbs: round1(self.carbs + rhs.carbs),
            fat: round1(self.fat + rhs.fat),
            fiber: round1(self.fiber + rhs.fiber),
        }
    }
}

impl std::iter::Sum for Portion {
    fn sum<I: Iterator<Item = Portion>>(iter: I) -> Portion {
        iter.fold(Portion::default(), |acc, p| acc + p)
    }
}
