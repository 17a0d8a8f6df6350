//! wellness-core: planning, scoring and tracking engine for the wellness coach

pub mod analytics;
pub mod catalog;
pub mod compliance;
pub mod diet;
pub mod error;
pub mod hydration;
pub mod intake;
pub mod portion;
pub mod predictor;
pub mod profile;
pub mod time;
pub mod workout;

pub use analytics::{HabitBreakdown, TrendPoint, TrendSummary, summarize, trend};
pub use catalog::{CatalogBuilder, FoodItem, MacroGroup, NutrientCatalog, Unit};
pub use compliance::{
    CheckIn, ComplianceLog, ComplianceRecord, ComplianceTracker, MemoryComplianceLog,
};
pub use diet::{DietPlanner, MealItem, MealPlan, MealPlanEntry, MealSlot};
pub use error::{EngineError, EngineResult};
pub use hydration::{HydrationStatus, WaterDay};
pub use intake::{DailyIntake, FoodLog, FoodLogEntry, MacroShare, NewFoodEntry};
pub use portion::Portion;
pub use predictor::{CaloriePredictor, LinearCalorieModel, MetabolicInput, ProfileDraft};
pub use profile::{
    ActivityLevel, DietaryPreference, ExperienceLevel, Gender, TrainingGoal, UserProfile,
    WeightGoal, WorkoutPreference,
};
pub use time::CivilClock;
pub use workout::{DayPlan, ExerciseRow, Focus, Split, WorkoutPlan};
