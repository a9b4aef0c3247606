//! Enumerated selectors for the editor/metadata surface.
//!
//! Block-programming front ends pick curves, ease directions, and repeat
//! behavior by enum value; this module is the only place the enumeration is
//! needed. The scheduler itself consumes opaque [`BlendFn`] callables.

use serde::{Deserialize, Serialize};

use crate::ease::{self, BlendFn, ShapeFn};

/// Shaping-curve selector.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CurveKind {
    Sq1,
    Sq2,
    Sq3,
    Sq4,
    Sq5,
    Sine,
    Expo,
    Circ,
    Back,
    Elastic,
}

/// Direction policy selector.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum EaseMode {
    #[default]
    Linear,
    In,
    Out,
    InOut,
    Snap,
}

/// Policy applied when a tween's duration elapses.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum RepeatMode {
    /// Deliver the end value, fire the completion handler, remove.
    #[default]
    Once,
    /// Flip direction and continue from the current host time.
    Reverse,
    /// Restart from the beginning at the current host time.
    Restart,
}

/// Resolve a curve selector to its shaping function.
pub fn shape_for(kind: CurveKind) -> ShapeFn {
    match kind {
        CurveKind::Sq1 => ease::sq1,
        CurveKind::Sq2 => ease::sq2,
        CurveKind::Sq3 => ease::sq3,
        CurveKind::Sq4 => ease::sq4,
        CurveKind::Sq5 => ease::sq5,
        CurveKind::Sine => ease::sine,
        CurveKind::Expo => ease::expo,
        CurveKind::Circ => ease::circ,
        CurveKind::Back => ease::back,
        CurveKind::Elastic => ease::elastic,
    }
}

/// Resolve a (curve, ease) selector pair to a blend function.
///
/// `Linear` ignores the curve entirely. `Snap` uses a threshold of 1.0
/// (hold the start value until the final tick); use [`ease::snap`]
/// directly for other thresholds.
pub fn blend_for(kind: CurveKind, mode: EaseMode) -> BlendFn {
    match mode {
        EaseMode::Linear => ease::linear(),
        EaseMode::In => ease::ease_in(shape_for(kind)),
        EaseMode::Out => ease::ease_out(shape_for(kind)),
        EaseMode::InOut => ease::ease_in_out(shape_for(kind)),
        EaseMode::Snap => ease::snap(1.0),
    }
}
