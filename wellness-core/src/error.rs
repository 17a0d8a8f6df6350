//! Typed engine failures.
//!
//! Every planner and tracker returns `EngineResult`; callers decide how to
//! present the failure. Nothing in the engine retries.

use thiserror::Error;
use tracing::warn;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    /// Bad plan parameters or a catalog/template that cannot be used.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A food referenced by a template or a user selection is not in the catalog.
    #[error("unknown food: {food}")]
    Lookup { food: String },

    /// Guard trip during quantity math. Always a configuration defect.
    #[error("computation error: {0}")]
    Computation(String),

    /// Upstream collaborator (calorie model) could not be loaded or queried.
    #[error("unavailable: {0}")]
    Unavailable(String),

    /// Persistence failed underneath a log or store trait.
    #[error("storage error: {0}")]
    Storage(String),
}

impl EngineError {
    pub fn configuration(message: impl Into<String>) -> Self {
        let message = message.into();
        warn!(target: "wellness::config", %message, "rejected configuration");
        EngineError::Configuration(message)
    }

    pub fn lookup(food: impl Into<String>) -> Self {
        let food = food.into();
        warn!(target: "wellness::catalog", %food, "food not in catalog");
        EngineError::Lookup { food }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        EngineError::Unavailable(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        EngineError::Storage(message.into())
    }

    /// True for failures a caller may reasonably re-issue.
    pub fn is_transient(&self) -> bool {
        matches!(self, EngineError::Unavailable(_) | EngineError::Storage(_))
    }
}
