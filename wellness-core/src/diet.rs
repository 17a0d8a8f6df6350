//! Diet planner: calorie target → four meals with per-item quantities.
//!
//! Meal budgets are fixed shares of the daily target; inside a meal the
//! budget is split equally across items and each item's grams are
//! back-solved from its calorie density.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::NutrientCatalog;
use crate::error::{EngineError, EngineResult};
use crate::portion::round1;
use crate::profile::{DietaryPreference, UserProfile, WeightGoal};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Snacks,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Snacks,
        MealSlot::Dinner,
    ];

    /// Percent of the daily target allocated to this meal.
    pub fn share_percent(&self) -> u32 {
        match self {
            MealSlot::Breakfast => 25,
            MealSlot::Lunch => 35,
            MealSlot::Snacks => 15,
            MealSlot::Dinner => 25,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Snacks => "Snacks",
            MealSlot::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One meal of a template: slot, short title, ordered foods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealTemplate {
    pub slot: MealSlot,
    pub title: &'static str,
    pub foods: &'static [&'static str],
}

const fn meal(
    slot: MealSlot,
    title: &'static str,
    foods: &'static [&'static str],
) -> MealTemplate {
    MealTemplate { slot, title, foods }
}

const PURE_VEG: [MealTemplate; 4] = [
    meal(MealSlot::Breakfast, "Oats & Milk", &["Oats", "Milk", "Banana", "Almonds"]),
    meal(MealSlot::Lunch, "Rice & Soya", &["Rice", "Soya Chunks", "Spinach", "Carrot"]),
    meal(MealSlot::Snacks, "Energy Focus", &["Sweet Potato", "Banana"]),
    meal(MealSlot::Dinner, "Roti & Paneer", &["Paneer", "Rice", "Dal (Lentils)", "Cucumber"]),
];

const NON_VEG: [MealTemplate; 4] = [
    meal(MealSlot::Breakfast, "Eggs & Milk", &["Egg", "Milk", "Banana", "Almonds"]),
    meal(MealSlot::Lunch, "Chicken & Rice", &["Rice", "Chicken Breast", "Spinach", "Carrot"]),
    meal(MealSlot::Snacks, "Protein Focus", &["Egg", "Banana"]),
    meal(
        MealSlot::Dinner,
        "Fish & Veggies",
        &["Fish (Tilapia)", "Rice", "Dal (Lentils)", "Cucumber"],
    ),
];

// Non-veg lunch, vegetarian dinner.
const COMBINED: [MealTemplate; 4] = [
    meal(MealSlot::Breakfast, "Eggs & Oats", &["Egg", "Oats", "Milk", "Almonds"]),
    meal(MealSlot::Lunch, "Non-Veg Focus", &["Rice", "Chicken Breast", "Spinach", "Carrot"]),
    meal(MealSlot::Snacks, "Fruit & Nuts", &["Banana", "Almonds"]),
    meal(MealSlot::Dinner, "Veggie Focus", &["Paneer", "Rice", "Dal (Lentils)", "Cucumber"]),
];

pub fn template(pref: DietaryPreference) -> &'static [MealTemplate; 4] {
    match pref {
        DietaryPreference::PureVeg => &PURE_VEG,
        DietaryPreference::NonVeg => &NON_VEG,
        DietaryPreference::Combined => &COMBINED,
    }
}

/// Baseline adjusted by the weight goal.
pub fn daily_target(baseline_calories: i32, goal: WeightGoal) -> EngineResult<i32> {
    baseline_calories
        .checked_add(goal.calorie_delta())
        .ok_or_else(|| {
            EngineError::configuration(format!(
                "daily target out of range (baseline {baseline_calories}, goal {goal})"
            ))
        })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealItem {
    pub food: String,
    pub quantity_grams: i32,
    pub protein_g: f64,
    pub fiber_g: f64,
    pub calories: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanEntry {
    pub slot: MealSlot,
    pub title: String,
    pub target_calories: f64,
    pub items: Vec<MealItem>,
}

impl MealPlanEntry {
    pub fn calories(&self) -> i32 {
        self.items.iter().map(|i| i.calories).sum()
    }

    pub fn protein(&self) -> f64 {
        round1(self.items.iter().map(|i| i.protein_g).sum())
    }

    pub fn fiber(&self) -> f64 {
        round1(self.items.iter().map(|i| i.fiber_g).sum())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub preference: DietaryPreference,
    pub goal: WeightGoal,
    pub daily_target_calories: i32,
    pub meals: Vec<MealPlanEntry>,
}

impl MealPlan {
    pub fn total_calories(&self) -> i32 {
        self.meals.iter().map(MealPlanEntry::calories).sum()
    }

    pub fn total_protein(&self) -> f64 {
        round1(self.meals.iter().map(MealPlanEntry::protein).sum())
    }

    pub fn total_fiber(&self) -> f64 {
        round1(self.meals.iter().map(MealPlanEntry::fiber).sum())
    }
}

/// Meal-plan generator bound to a validated catalog.
#[derive(Debug, Clone, Copy)]
pub struct DietPlanner<'a> {
    catalog: &'a NutrientCatalog,
}

impl<'a> DietPlanner<'a> {
    /// Check every template food against the catalog up front, so request-time
    /// generation never hits a missing food or a zero divisor.
    pub fn new(catalog: &'a NutrientCatalog) -> EngineResult<Self> {
        for pref in DietaryPreference::ALL {
            for meal in template(pref) {
                for food in meal.foods {
                    catalog.require_positive_calories(food)?;
                }
            }
        }
        Ok(Self { catalog })
    }

    pub fn generate(
        &self,
        baseline_calories: i32,
        goal: WeightGoal,
        pref: DietaryPreference,
    ) -> EngineResult<MealPlan> {
        if baseline_calories <= 0 {
            return Err(EngineError::configuration(format!(
                "baseline calories must be positive (got {baseline_calories})"
            )));
        }
        let target = daily_target(baseline_calories, goal)?;
        if target <= 0 {
            return Err(EngineError::configuration(format!(
                "daily target must be positive (baseline {baseline_calories}, goal {goal})"
            )));
        }

        let meals = template(pref)
            .iter()
            .map(|meal| self.plan_meal(meal, target))
            .collect::<EngineResult<Vec<_>>>()?;

        debug!(target, preference = pref.label(), meals = meals.len(), "generated meal plan");

        Ok(MealPlan {
            preference: pref,
            goal,
            daily_target_calories: target,
            meals,
        })
    }

    pub fn generate_for(&self, profile: &UserProfile) -> EngineResult<MealPlan> {
        self.generate(profile.baseline_calories, profile.goal, profile.dietary_preference)
    }

    fn plan_meal(&self, meal: &MealTemplate, target: i32) -> EngineResult<MealPlanEntry> {
        let budget = f64::from(target) * f64::from(meal.slot.share_percent()) / 100.0;
        let share = budget / meal.foods.len() as f64;

        let items = meal
            .foods
            .iter()
            .map(|name| {
                let food = self.catalog.get(name)?;
                if food.calories <= 0.0 {
                    return Err(EngineError::Computation(format!(
                        "zero calorie density for {name}"
                    )));
                }
                let quantity = (share / food.calories * 100.0).round() as i32;
                let grams = f64::from(quantity) / 100.0;
                Ok(MealItem {
                    food: (*name).to_string(),
                    quantity_grams: quantity,
                    protein_g: round1(food.protein * grams),
                    fiber_g: round1(food.fiber * grams),
                    calories: share.round() as i32,
                })
            })
            .collect::<EngineResult<Vec<_>>>()?;

        Ok(MealPlanEntry {
            slot: meal.slot,
            title: meal.title.to_string(),
            target_calories: budget,
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogBuilder, FoodItem, Unit};

    fn planner(catalog: &NutrientCatalog) -> DietPlanner<'_> {
        DietPlanner::new(catalog).unwrap()
    }

    #[test]
    fn meal_shares_sum_to_hundred() {
        for pref in DietaryPreference::ALL {
            let total: u32 = template(pref).iter().map(|m| m.slot.share_percent()).sum();
            assert_eq!(total, 100, "{pref}");
        }
    }

    #[test]
    fn targets_follow_goal() {
        assert_eq!(daily_target(2000, WeightGoal::Lose).unwrap(), 1500);
        assert_eq!(daily_target(2000, WeightGoal::Gain).unwrap(), 2500);
        assert_eq!(daily_target(2000, WeightGoal::Maintain).unwrap(), 2000);
    }

    #[test]
    fn target_overflow_is_configuration_error() {
        assert!(matches!(
            daily_target(i32::MAX, WeightGoal::Gain),
            Err(EngineError::Configuration(_))
        ));
        let catalog = NutrientCatalog::builtin();
        let err = planner(&catalog)
            .generate(i32::MAX, WeightGoal::Gain, DietaryPreference::PureVeg)
            .unwrap_err();
        assert!(matches!(err, EngineError::Configuration(_)));
    }

    #[test]
    fn maintain_pure_veg_sums_to_target() {
        let catalog = NutrientCatalog::builtin();
        let plan = planner(&catalog)
            .generate(2000, WeightGoal::Maintain, DietaryPreference::PureVeg)
            .unwrap();
        assert_eq!(plan.meals.len(), 4);
        assert!((plan.total_calories() - 2000).abs() <= 4);

        let slots: Vec<_> = plan.meals.iter().map(|m| m.slot).collect();
        assert_eq!(slots, MealSlot::ALL.to_vec());

        // Breakfast: 500 kcal over 4 items, oats first.
        let oats = &plan.meals[0].items[0];
        assert_eq!(oats.food, "Oats");
        assert_eq!(oats.calories, 125);
        assert_eq!(oats.quantity_grams, 32); // 125 / 389 * 100 = 32.1
        assert_eq!(oats.protein_g, 5.4); // 17 * 0.32
        assert_eq!(oats.fiber_g, 3.2);
    }

    #[test]
    fn item_order_matches_template() {
        let catalog = NutrientCatalog::builtin();
        let plan = planner(&catalog)
            .generate(2200, WeightGoal::Lose, DietaryPreference::Combined)
            .unwrap();
        for (entry, meal) in plan.meals.iter().zip(template(DietaryPreference::Combined)) {
            let names: Vec<_> = entry.items.iter().map(|i| i.food.as_str()).collect();
            assert_eq!(names, meal.foods.to_vec());
        }
        assert_eq!(plan.daily_target_calories, 1700);
    }

    #[test]
    fn snacks_split_two_ways() {
        let catalog = NutrientCatalog::builtin();
        let plan = planner(&catalog)
            .generate(2000, WeightGoal::Maintain, DietaryPreference::NonVeg)
            .unwrap();
        let snacks = &plan.meals[2];
        assert_eq!(snacks.slot, MealSlot::Snacks);
        assert_eq!(snacks.items.len(), 2);
        assert_eq!(snacks.target_calories, 300.0);
        assert!(snacks.items.iter().all(|i| i.calories == 150));
    }

    #[test]
    fn tiny_targets_still_emit_every_meal() {
        let catalog = NutrientCatalog::builtin();
        let plan = planner(&catalog)
            .generate(600, WeightGoal::Lose, DietaryPreference::PureVeg)
            .unwrap();
        assert_eq!(plan.meals.len(), 4);
        assert!(plan.meals.iter().all(|m| !m.items.is_empty()));
    }

    #[test]
    fn non_positive_target_rejected() {
        let catalog = NutrientCatalog::builtin();
        let p = planner(&catalog);
        assert!(matches!(
            p.generate(400, WeightGoal::Lose, DietaryPreference::PureVeg),
            Err(EngineError::Configuration(_))
        ));
        assert!(p.generate(0, WeightGoal::Gain, DietaryPreference::PureVeg).is_err());
    }

    #[test]
    fn zero_calorie_template_food_rejected_at_construction() {
        let catalog = CatalogBuilder::extend(&NutrientCatalog::builtin())
            .with_food("Cucumber", FoodItem::new(0.0, 0.7, 3.6, 0.1, 0.5), Unit::Grams)
            .build();
        assert!(matches!(
            DietPlanner::new(&catalog),
            Err(EngineError::Configuration(_))
        ));
    }

    #[test]
    fn missing_template_food_is_lookup_error() {
        let catalog = CatalogBuilder::new()
            .with_food("Rice", FoodItem::new(130.0, 2.7, 28.0, 0.3, 0.4), Unit::Grams)
            .build();
        assert!(matches!(
            DietPlanner::new(&catalog),
            Err(EngineError::Lookup { .. })
        ));
    }
}
