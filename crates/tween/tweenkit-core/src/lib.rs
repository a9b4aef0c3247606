//! Tweenkit core (host-agnostic)
//!
//! Time-based value interpolation for a frame-driven host: a pure curve
//! library (shaping functions + blend constructors) and a scheduler of
//! named tweens, each advanced once per host frame tick with configurable
//! repeat behavior. Hosts own the frame hook and invoke [`Scheduler::tick`]
//! once per rendered frame.

pub mod catalog;
pub mod clock;
pub mod config;
pub mod ease;
pub mod error;
pub mod scheduler;
pub mod stored_tween;

// Re-exports for consumers (host adapters)
pub use catalog::{blend_for, shape_for, CurveKind, EaseMode, RepeatMode};
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::Config;
pub use ease::{ease_in, ease_in_out, ease_out, lerp, linear, snap, BlendFn, ShapeFn};
pub use error::TweenError;
pub use scheduler::Scheduler;
pub use stored_tween::{parse_stored_tween_json, StoredTween};
