//! Value model error types.

use thiserror::Error;

/// Errors that can occur while building a [`Value`](crate::Value).
#[derive(Debug, Error)]
pub enum ValueError {
    /// The input was not valid JSON.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
