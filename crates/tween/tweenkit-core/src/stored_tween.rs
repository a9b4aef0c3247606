//! StoredTween: the declarative tween description used by editor front
//! ends. A document selects curve/ease/repeat by enum value; resolution to
//! a blend function goes through the catalog.
//!
//! Notes:
//! - Duration arrives in milliseconds and is kept as milliseconds.
//! - Validation happens at parse time; the scheduler path stays infallible.

use serde::{Deserialize, Serialize};

use crate::catalog::{blend_for, CurveKind, EaseMode, RepeatMode};
use crate::ease::{snap, BlendFn};
use crate::error::TweenError;
use crate::scheduler::Scheduler;

/// A named tween description, ready to be scheduled against a value sink.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StoredTween {
    pub name: String,
    pub from: f32,
    pub to: f32,
    /// Duration in milliseconds.
    #[serde(rename = "duration")]
    pub duration_ms: u32,
    pub curve: CurveKind,
    #[serde(default)]
    pub ease: EaseMode,
    #[serde(default)]
    pub repeat: RepeatMode,
    /// Progress threshold for `EaseMode::Snap`; defaults to 1.0 (hold the
    /// start value until the final tick).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snap_threshold: Option<f32>,
}

impl StoredTween {
    /// Validate basic invariants (positive duration, finite endpoints,
    /// snap threshold within [0,1]).
    pub fn validate(&self) -> Result<(), TweenError> {
        if self.duration_ms == 0 {
            return Err(TweenError::InvalidDuration);
        }
        if !self.from.is_finite() {
            return Err(TweenError::NonFiniteEndpoint {
                field: "from",
                value: self.from,
            });
        }
        if !self.to.is_finite() {
            return Err(TweenError::NonFiniteEndpoint {
                field: "to",
                value: self.to,
            });
        }
        if let Some(threshold) = self.snap_threshold {
            if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
                return Err(TweenError::InvalidSnapThreshold { threshold });
            }
        }
        Ok(())
    }

    /// Resolve the selected curve/ease pair to a blend function.
    pub fn blend(&self) -> BlendFn {
        match (self.ease, self.snap_threshold) {
            (EaseMode::Snap, Some(threshold)) => snap(threshold),
            _ => blend_for(self.curve, self.ease),
        }
    }
}

/// Parse and validate a StoredTween JSON document.
pub fn parse_stored_tween_json(s: &str) -> Result<StoredTween, TweenError> {
    let stored: StoredTween = serde_json::from_str(s)?;
    stored.validate()?;
    Ok(stored)
}

impl Scheduler {
    /// Schedule a stored tween against a value sink. Same silent-no-op
    /// semantics as [`Scheduler::start`] when the name is occupied.
    pub fn start_stored(&self, stored: &StoredTween, apply: impl FnMut(f32) + 'static) {
        self.start(
            &stored.name,
            stored.from,
            stored.to,
            stored.duration_ms,
            stored.blend(),
            apply,
            stored.repeat,
        );
    }
}
