//! Nutrient catalog: macro values per 100 g (or 100 ml for liquids).
//!
//! Loaded once and shared by reference. Additions go through
//! [`CatalogBuilder`], never through the catalog itself.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Macro composition of one food, per 100 units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
}

impl FoodItem {
    pub const fn new(calories: f64, protein: f64, carbs: f64, fat: f64, fiber: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
            fiber,
        }
    }
}

/// Measuring unit shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "g")]
    Grams,
    #[serde(rename = "ml")]
    Milliliters,
}

impl Unit {
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Grams => "g",
            Unit::Milliliters => "ml",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Curated "good source of" groups used for browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MacroGroup {
    Protein,
    Carbs,
    Fats,
    Fiber,
}

impl MacroGroup {
    pub const ALL: [MacroGroup; 4] = [
        MacroGroup::Protein,
        MacroGroup::Carbs,
        MacroGroup::Fats,
        MacroGroup::Fiber,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MacroGroup::Protein => "Protein",
            MacroGroup::Carbs => "Carbs",
            MacroGroup::Fats => "Fats",
            MacroGroup::Fiber => "Fiber",
        }
    }

    pub fn sources(&self) -> &'static [&'static str] {
        match self {
            MacroGroup::Protein => &[
                "Chicken Breast",
                "Soya Chunks",
                "Egg",
                "Paneer",
                "Milk",
                "Curd (Dahi)",
                "Whey Protein",
            ],
            MacroGroup::Carbs => &[
                "Rice",
                "Sweet Potato",
                "Whole Wheat Bread",
                "Oats",
                "Roti (Chapati)",
                "Potato",
                "Banana",
            ],
            MacroGroup::Fats => &["Almonds", "Avocado", "Peanut Butter", "Walnuts", "Peanuts"],
            MacroGroup::Fiber => &[
                "Chia Seeds",
                "Chickpeas",
                "Broccoli",
                "Dal (Lentils)",
                "Spinach",
                "Carrot",
                "Apples",
            ],
        }
    }
}

impl FromStr for MacroGroup {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        let wanted = s.trim();
        MacroGroup::ALL
            .into_iter()
            .find(|g| g.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                EngineError::configuration(format!(
                    "unknown macro group {wanted:?} (protein, carbs, fats, fiber)"
                ))
            })
    }
}

const LIQUIDS: &[&str] = &[
    "Milk",
    "Curd (Dahi)",
    "Whey Protein",
    "Olive Oil",
    "Orange Juice",
    "Apple Juice",
    "Sugarcane Juice",
];

const BUILTIN_FOODS: &[(&str, FoodItem)] = &[
    // protein rich
    ("Chicken Breast", FoodItem::new(165.0, 31.0, 0.0, 3.6, 0.0)),
    ("Egg", FoodItem::new(155.0, 13.0, 1.1, 11.0, 0.0)),
    ("Paneer", FoodItem::new(265.0, 18.0, 6.0, 20.0, 0.0)),
    ("Fish (Tilapia)", FoodItem::new(128.0, 26.0, 0.0, 2.7, 0.0)),
    ("Greek Yogurt", FoodItem::new(59.0, 10.0, 3.6, 0.4, 0.0)),
    ("Soya Chunks", FoodItem::new(345.0, 52.0, 33.0, 0.5, 13.0)),
    ("Milk", FoodItem::new(62.0, 3.2, 4.8, 3.3, 0.0)),
    ("Curd (Dahi)", FoodItem::new(61.0, 3.5, 4.7, 3.3, 0.0)),
    ("Whey Protein", FoodItem::new(390.0, 80.0, 5.0, 4.0, 0.0)),
    // carb rich
    ("Rice", FoodItem::new(130.0, 2.7, 28.0, 0.3, 0.4)),
    ("Oats", FoodItem::new(389.0, 17.0, 66.0, 7.0, 10.0)),
    ("Banana", FoodItem::new(89.0, 1.1, 23.0, 0.3, 2.6)),
    ("Sweet Potato", FoodItem::new(86.0, 1.6, 20.0, 0.1, 3.0)),
    ("Whole Wheat Bread", FoodItem::new(247.0, 13.0, 41.0, 3.4, 7.0)),
    ("Roti (Chapati)", FoodItem::new(297.0, 10.0, 45.0, 7.0, 9.0)),
    ("Potato", FoodItem::new(77.0, 2.0, 17.0, 0.1, 2.2)),
    // fat rich
    ("Almonds", FoodItem::new(579.0, 21.0, 22.0, 50.0, 12.0)),
    ("Peanut Butter", FoodItem::new(588.0, 25.0, 20.0, 50.0, 6.0)),
    ("Avocado", FoodItem::new(160.0, 2.0, 8.5, 15.0, 6.7)),
    ("Walnuts", FoodItem::new(654.0, 15.0, 14.0, 65.0, 6.7)),
    ("Olive Oil", FoodItem::new(884.0, 0.0, 0.0, 100.0, 0.0)),
    ("Peanuts", FoodItem::new(567.0, 26.0, 16.0, 49.0, 9.0)),
    // fiber rich
    ("Dal (Lentils)", FoodItem::new(116.0, 9.0, 20.0, 0.4, 8.0)),
    ("Broccoli", FoodItem::new(34.0, 2.8, 6.6, 0.4, 2.6)),
    ("Chia Seeds", FoodItem::new(486.0, 17.0, 42.0, 31.0, 34.0)),
    ("Chickpeas", FoodItem::new(164.0, 9.0, 27.0, 2.6, 7.6)),
    ("Apples", FoodItem::new(52.0, 0.3, 14.0, 0.2, 2.4)),
    ("Spinach", FoodItem::new(23.0, 2.9, 3.6, 0.4, 2.2)),
    ("Carrot", FoodItem::new(41.0, 0.9, 10.0, 0.2, 2.8)),
    ("Cucumber", FoodItem::new(15.0, 0.7, 3.6, 0.1, 0.5)),
    // juices
    ("Orange Juice", FoodItem::new(45.0, 0.7, 10.0, 0.2, 0.2)),
    ("Apple Juice", FoodItem::new(46.0, 0.1, 11.0, 0.1, 0.2)),
    ("Sugarcane Juice", FoodItem::new(270.0, 0.0, 73.0, 0.0, 0.0)),
];

#[derive(Debug, Clone)]
struct Entry {
    item: FoodItem,
    unit: Unit,
}

/// Immutable food → macros table.
#[derive(Debug, Clone, Default)]
pub struct NutrientCatalog {
    foods: BTreeMap<String, Entry>,
}

impl NutrientCatalog {
    /// The table shipped with the app.
    pub fn builtin() -> Self {
        let mut builder = CatalogBuilder::new();
        for (name, item) in BUILTIN_FOODS {
            let unit = if LIQUIDS.contains(name) {
                Unit::Milliliters
            } else {
                Unit::Grams
            };
            builder = builder.with_food(*name, *item, unit);
        }
        builder.build()
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.foods.contains_key(name)
    }

    pub fn get(&self, name: &str) -> EngineResult<&FoodItem> {
        self.foods
            .get(name)
            .map(|e| &e.item)
            .ok_or_else(|| EngineError::lookup(name))
    }

    pub fn unit(&self, name: &str) -> EngineResult<Unit> {
        self.foods
            .get(name)
            .map(|e| e.unit)
            .ok_or_else(|| EngineError::lookup(name))
    }

    /// Case-insensitive lookup returning the canonical name.
    pub fn resolve(&self, name: &str) -> EngineResult<&str> {
        let wanted = name.trim().to_lowercase();
        self.foods
            .keys()
            .find(|k| k.to_lowercase() == wanted)
            .map(String::as_str)
            .ok_or_else(|| EngineError::lookup(name.trim()))
    }

    /// Alphabetical food names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.foods.keys().map(String::as_str)
    }

    /// Foods usable as a divisor in quantity back-solves.
    pub fn require_positive_calories(&self, name: &str) -> EngineResult<&FoodItem> {
        let item = self.get(name)?;
        if item.calories > 0.0 {
            Ok(item)
        } else {
            Err(EngineError::configuration(format!(
                "{name} has non-positive calories ({}) and cannot be portioned by calorie share",
                item.calories
            )))
        }
    }
}

/// Dedicated loader for catalog contents.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    foods: BTreeMap<String, Entry>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing catalog (e.g. to add a custom food).
    pub fn extend(catalog: &NutrientCatalog) -> Self {
        Self {
            foods: catalog.foods.clone(),
        }
    }

    pub fn with_food(mut self, name: impl Into<String>, item: FoodItem, unit: Unit) -> Self {
        self.foods.insert(name.into(), Entry { item, unit });
        self
    }

    pub fn build(self) -> NutrientCatalog {
        NutrientCatalog { foods: self.foods }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_every_food() {
        let catalog = NutrientCatalog::builtin();
        assert_eq!(catalog.len(), 33);
        let chicken = catalog.get("Chicken Breast").unwrap();
        assert_eq!(chicken.calories, 165.0);
        assert_eq!(chicken.protein, 31.0);
    }

    #[test]
    fn liquids_are_measured_in_ml() {
        let catalog = NutrientCatalog::builtin();
        assert_eq!(catalog.unit("Milk").unwrap(), Unit::Milliliters);
        assert_eq!(catalog.unit("Olive Oil").unwrap(), Unit::Milliliters);
        assert_eq!(catalog.unit("Rice").unwrap(), Unit::Grams);
    }

    #[test]
    fn missing_food_is_lookup_error() {
        let catalog = NutrientCatalog::builtin();
        assert_eq!(
            catalog.get("Kale").unwrap_err(),
            EngineError::Lookup { food: "Kale".into() }
        );
    }

    #[test]
    fn resolve_ignores_case() {
        let catalog = NutrientCatalog::builtin();
        assert_eq!(catalog.resolve("dal (lentils)").unwrap(), "Dal (Lentils)");
        assert!(catalog.resolve("dal").is_err());
    }

    #[test]
    fn zero_calorie_food_rejected_as_divisor() {
        let catalog = CatalogBuilder::extend(&NutrientCatalog::builtin())
            .with_food("Water", FoodItem::new(0.0, 0.0, 0.0, 0.0, 0.0), Unit::Milliliters)
            .build();
        assert!(matches!(
            catalog.require_positive_calories("Water"),
            Err(EngineError::Configuration(_))
        ));
        assert!(catalog.require_positive_calories("Rice").is_ok());
    }

    #[test]
    fn macro_group_sources_exist_in_catalog() {
        let catalog = NutrientCatalog::builtin();
        for group in MacroGroup::ALL {
            for name in group.sources() {
                assert!(catalog.contains(name), "{name} missing for {}", group.label());
            }
        }
    }

    #[test]
    fn macro_group_parses_label() {
        assert_eq!("fats".parse::<MacroGroup>().unwrap(), MacroGroup::Fats);
        assert!("sugar".parse::<MacroGroup>().is_err());
    }
}
