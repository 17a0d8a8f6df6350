//! wellness-store: file-backed profile, compliance, food and water stores

use wellness_core::EngineError;

pub mod compliance_csv;
pub mod food_csv;
pub mod profile_store;
pub mod water_json;

pub use compliance_csv::CsvComplianceLog;
pub use food_csv::CsvFoodLog;
pub use profile_store::{ProfileStore, StoredUser};
pub use water_json::WaterLog;

pub const PROFILES_FILE: &str = "profiles.json";
pub const COMPLIANCE_FILE: &str = "compliance.csv";
pub const FOOD_LOG_FILE: &str = "food_log.csv";
pub const WATER_FILE: &str = "water.json";

/// Collapse an anyhow chain into the engine's storage failure.
pub(crate) fn storage_err(err: anyhow::Error) -> EngineError {
    EngineError::storage(format!("{err:#}"))
}
