//! Curve library:
//! - shaping functions (normalized acceleration profiles over t in [0,1])
//! - blend constructors (linear / snap / ease_in / ease_out / ease_in_out)
//!
//! Shaping functions describe acceleration only; direction policy is applied
//! by the blend constructors. `back` and `elastic` intentionally leave [0,1]
//! (overshoot); callers must tolerate out-of-range interpolated values and
//! must not clamp them.

use std::f32::consts::PI;

/// A shaping function: normalized progress in [0,1] -> shaped progress.
pub type ShapeFn = fn(f32) -> f32;

/// A blend function: (start, end, t) -> interpolated value, t in [0,1].
pub type BlendFn = Box<dyn Fn(f32, f32, f32) -> f32>;

/// Linear interpolation of scalars.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Identity (degenerate power curve, n = 1).
#[inline]
pub fn sq1(t: f32) -> f32 {
    t
}

/// Quadratic acceleration.
#[inline]
pub fn sq2(t: f32) -> f32 {
    t * t
}

/// Cubic acceleration.
#[inline]
pub fn sq3(t: f32) -> f32 {
    t * t * t
}

/// Quartic acceleration.
#[inline]
pub fn sq4(t: f32) -> f32 {
    t * t * t * t
}

/// Quintic acceleration.
#[inline]
pub fn sq5(t: f32) -> f32 {
    t * t * t * t * t
}

/// Sinusoidal acceleration: 1 - cos(t * pi / 2).
#[inline]
pub fn sine(t: f32) -> f32 {
    1.0 - (t * PI / 2.0).cos()
}

/// Exponential acceleration: 2^(10t - 10), with an exact 0 endpoint.
#[inline]
pub fn expo(t: f32) -> f32 {
    if t == 0.0 {
        0.0
    } else {
        (2.0_f32).powf(10.0 * t - 10.0)
    }
}

/// Circular acceleration: 1 - sqrt(1 - t^2).
#[inline]
pub fn circ(t: f32) -> f32 {
    1.0 - (1.0 - t * t).sqrt()
}

/// Overshoot cubic: (c1 + 1)t^3 - c1 * t^2, c1 = 1.70158.
/// Dips below 0 near small t.
#[inline]
pub fn back(t: f32) -> f32 {
    const C1: f32 = 1.70158;
    (C1 + 1.0) * t * t * t - C1 * t * t
}

/// Spring-damped sinusoid with exact 0/1 endpoints. Period 2*pi/3,
/// offset by a 10.75-sample lead-in.
#[inline]
pub fn elastic(t: f32) -> f32 {
    const C4: f32 = 2.0 * PI / 3.0;
    if t == 0.0 {
        0.0
    } else if t == 1.0 {
        1.0
    } else {
        -(2.0_f32).powf(10.0 * t - 10.0) * ((10.0 * t - 10.75) * C4).sin()
    }
}

/// Plain linear blend; any shaping curve is irrelevant here.
pub fn linear() -> BlendFn {
    Box::new(|a, b, t| lerp(a, b, t))
}

/// Step blend: start while t < threshold, end from the threshold on.
pub fn snap(threshold: f32) -> BlendFn {
    Box::new(move |a, b, t| if t < threshold { a } else { b })
}

/// Blend governed by the shaping curve at the start of the transition.
pub fn ease_in(f: ShapeFn) -> BlendFn {
    Box::new(move |a, b, t| lerp(a, b, f(t)))
}

/// Decelerating mirror of `ease_in`, derived from the same curve:
/// shaped progress is 1 - f(1 - t).
pub fn ease_out(f: ShapeFn) -> BlendFn {
    Box::new(move |a, b, t| lerp(a, b, 1.0 - f(1.0 - t)))
}

/// Symmetric acceleration/deceleration as a self-blend of the ease-in and
/// ease-out shapes, weighted by t itself. This exact form is load-bearing
/// for numeric parity with authored content; it is not the mirrored-midpoint
/// construction.
pub fn ease_in_out(f: ShapeFn) -> BlendFn {
    Box::new(move |a, b, t| {
        let rise = f(t);
        let fall = 1.0 - f(1.0 - t);
        lerp(a, b, lerp(rise, fall, t))
    })
}
