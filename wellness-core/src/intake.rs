//! Food logging and the per-day intake summary.

use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::catalog::{NutrientCatalog, Unit};
use crate::error::{EngineError, EngineResult};
use crate::portion::{Portion, round1, scale};

/// One logged food, already scaled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodLogEntry {
    pub id: u64,
    pub username: String,
    pub food: String,
    pub quantity: f64,
    pub unit: Unit,
    pub portion: Portion,
    pub logged_at: NaiveDateTime,
}

/// A food entry before the log assigns its id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFoodEntry {
    pub username: String,
    pub food: String,
    pub quantity: f64,
    pub unit: Unit,
    pub portion: Portion,
    pub logged_at: NaiveDateTime,
}

/// Append-only food log.
pub trait FoodLog {
    fn append(&mut self, entry: NewFoodEntry) -> EngineResult<FoodLogEntry>;
    fn entries(&self, username: &str) -> EngineResult<Vec<FoodLogEntry>>;
}

fn quantity_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^\s*(\d+(?:\.\d+)?)\s*(g|gm|grams?|ml)?\s*$")
            .expect("quantity pattern is valid")
    })
}

/// Parse "150", "150g", "200 ml". A unit suffix must match the food's unit.
pub fn parse_quantity(input: &str, expected: Unit) -> EngineResult<f64> {
    let caps = quantity_re().captures(input).ok_or_else(|| {
        EngineError::configuration(format!("cannot read quantity: {input:?}"))
    })?;
    let value: f64 = caps[1]
        .parse()
        .map_err(|_| EngineError::configuration(format!("cannot read quantity: {input:?}")))?;
    if let Some(unit) = caps.get(2) {
        let given = if unit.as_str().eq_ignore_ascii_case("ml") {
            Unit::Milliliters
        } else {
            Unit::Grams
        };
        if given != expected {
            return Err(EngineError::configuration(format!(
                "quantity given in {given} but this food is measured in {expected}"
            )));
        }
    }
    if value <= 0.0 {
        return Err(EngineError::configuration("quantity must be positive"));
    }
    Ok(value)
}

/// Scale a catalog food for the log.
pub fn prepare_entry(
    catalog: &NutrientCatalog,
    username: &str,
    food: &str,
    quantity: f64,
    logged_at: NaiveDateTime,
) -> EngineResult<NewFoodEntry> {
    let name = catalog.resolve(food)?;
    let item = catalog.get(name)?;
    Ok(NewFoodEntry {
        username: username.to_string(),
        food: name.to_string(),
        quantity,
        unit: catalog.unit(name)?,
        portion: scale(item, quantity),
        logged_at,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MacroShare {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyIntake {
    pub date: NaiveDate,
    pub entries: Vec<FoodLogEntry>,
    pub totals: Portion,
    /// Percent of logged macro grams; `None` when nothing with macros was logged.
    pub distribution: Option<MacroShare>,
}

/// Entries logged on `date`, with totals and macro distribution.
pub fn daily_intake(entries: &[FoodLogEntry], date: NaiveDate) -> DailyIntake {
    let todays: Vec<FoodLogEntry> = entries
        .iter()
        .filter(|e| e.logged_at.date() == date)
        .cloned()
        .collect();
    let totals: Portion = todays.iter().map(|e| e.portion).sum();
    let grams = totals.macro_grams();
    let distribution = (grams > 0.0).then(|| MacroShare {
        protein: round1(totals.protein / grams * 100.0),
        carbs: round1(totals.carbs / grams * 100.0),
        fat: round1(totals.fat / grams * 100.0),
        fiber: round1(totals.fiber / grams * 100.0),
    });
    DailyIntake {
        date,
        entries: todays,
        totals,
        distribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 2, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn logged(id: u64, entry: NewFoodEntry) -> FoodLogEntry {
        FoodLogEntry {
            id,
            username: entry.username,
            food: entry.food,
            quantity: entry.quantity,
            unit: entry.unit,
            portion: entry.portion,
            logged_at: entry.logged_at,
        }
    }

    #[test]
    fn parses_quantities() {
        assert_eq!(parse_quantity("150", Unit::Grams).unwrap(), 150.0);
        assert_eq!(parse_quantity("150g", Unit::Grams).unwrap(), 150.0);
        assert_eq!(parse_quantity(" 200 ML ", Unit::Milliliters).unwrap(), 200.0);
        assert_eq!(parse_quantity("12.5 grams", Unit::Grams).unwrap(), 12.5);
        assert!(parse_quantity("200ml", Unit::Grams).is_err());
        assert!(parse_quantity("lots", Unit::Grams).is_err());
        assert!(parse_quantity("0", Unit::Grams).is_err());
    }

    #[test]
    fn prepare_entry_resolves_and_scales() {
        let catalog = NutrientCatalog::builtin();
        let e = prepare_entry(&catalog, "asha", "milk", 250.0, at(12, 8)).unwrap();
        assert_eq!(e.food, "Milk");
        assert_eq!(e.unit, Unit::Milliliters);
        assert_eq!(e.portion.calories, 155);
        assert_eq!(e.portion.protein, 8.0);
    }

    #[test]
    fn unknown_food_is_lookup_error() {
        let catalog = NutrientCatalog::builtin();
        assert!(matches!(
            prepare_entry(&catalog, "asha", "Kale", 100.0, at(12, 8)),
            Err(EngineError::Lookup { .. })
        ));
    }

    #[test]
    fn daily_intake_sums_only_that_day() {
        let catalog = NutrientCatalog::builtin();
        let entries = vec![
            logged(1, prepare_entry(&catalog, "asha", "Rice", 200.0, at(12, 13)).unwrap()),
            logged(2, prepare_entry(&catalog, "asha", "Egg", 100.0, at(12, 19)).unwrap()),
            logged(3, prepare_entry(&catalog, "asha", "Oats", 50.0, at(11, 8)).unwrap()),
        ];
        let day = daily_intake(&entries, at(12, 0).date());
        assert_eq!(day.entries.len(), 2);
        assert_eq!(day.totals.calories, 260 + 155);
        assert_eq!(day.totals.protein, 18.4);
        let share = day.distribution.unwrap();
        let sum = share.protein + share.carbs + share.fat + share.fiber;
        assert!((sum - 100.0).abs() < 0.5);
    }

    #[test]
    fn empty_day_has_no_distribution() {
        let day = daily_intake(&[], at(12, 0).date());
        assert!(day.entries.is_empty());
        assert!(day.distribution.is_none());
        assert_eq!(day.totals.calories, 0);
    }
}
