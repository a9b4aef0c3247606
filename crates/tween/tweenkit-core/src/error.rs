//! Error types for the declarative (stored-tween) path.
//!
//! The imperative scheduler API is infallible by design: duplicate names and
//! unknown names degrade to silent no-ops. Validation errors exist only
//! where tween descriptions arrive as data.

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TweenError {
    /// Duration must be strictly positive.
    #[error("tween duration must be > 0 ms")]
    InvalidDuration,

    /// Start/end values must be finite numbers.
    #[error("tween endpoint must be finite: {field} = {value}")]
    NonFiniteEndpoint { field: &'static str, value: f32 },

    /// Snap threshold must lie within the normalized progress domain.
    #[error("snap threshold must be in [0,1], got {threshold}")]
    InvalidSnapThreshold { threshold: f32 },

    /// JSON parse failure.
    #[error("parse error: {reason}")]
    Parse { reason: String },
}

impl From<serde_json::Error> for TweenError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            reason: err.to_string(),
        }
    }
}
