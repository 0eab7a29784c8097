//! Error types for report bundle loading

use thiserror::Error;

use crate::events::SchemaError;

use super::report::FightSelector;

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("failed to decode report bundle")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("fight {selector} not found ({available} fights in report)")]
    FightNotFound {
        selector: FightSelector,
        available: usize,
    },

    #[error("invalid fight selector `{input}` (expected `last` or a fight id)")]
    InvalidSelector { input: String },
}
