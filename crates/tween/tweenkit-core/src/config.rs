//! Core configuration for tweenkit-core.

use serde::{Deserialize, Serialize};

/// Configuration for scheduler sizing and defensive limits.
/// Keep this minimal; expand as needed without breaking API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Initial capacity hint for the name -> tween registry.
    pub registry_capacity: usize,

    /// Floor applied to requested durations. A start request with a zero
    /// duration is clamped up to this instead of dividing by zero.
    pub min_duration_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registry_capacity: 16,
            min_duration_ms: 1,
        }
    }
}
