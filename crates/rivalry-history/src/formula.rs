//! Closed-form exponential update for one percept over one interval.
//!
//! Both branches are the exact solution of a first-order linear ODE toward a
//! fixed point (1 while dominant, 0 while absent), re-parameterized with a
//! phase offset so that the formula continues from the currently accumulated
//! value instead of from the fixed point:
//!
//! ```text
//! saturate:  φ = -τ·ln(1 − h)    h' = 1 − e^(−(d + φ)/τ)
//! recover:   φ = -τ·ln(h)        h' = e^(−(d + φ)/τ)
//! ```
//!
//! The offset algebraically rewinds the exponential to the time at which it
//! would have equalled `h`, so one evaluation is exact for any interval
//! length. No iterative stepping.

/// Exponential approach toward 1 (adaptation while dominant).
///
/// `h == 0` is the sequence-start state and needs no offset; `h == 1` is the
/// saturated fixed point and stays there (the offset would be infinite).
pub fn saturate(current: f64, duration: f64, tau: f64) -> f64 {
    if current >= 1.0 {
        return 1.0;
    }
    let phase = if current > 0.0 {
        -tau * (1.0 - current).ln()
    } else {
        0.0
    };
    1.0 - (-(duration + phase) / tau).exp()
}

/// Exponential decay toward 0 (recovery while absent).
///
/// `h == 0` stays at 0: the phase offset would be infinite, so the value is
/// pinned directly rather than evaluated through `ln(0)`.
pub fn recover(current: f64, duration: f64, tau: f64) -> f64 {
    if current <= 0.0 {
        return 0.0;
    }
    let phase = -tau * current.ln();
    (-(duration + phase) / tau).exp()
}

/// Advance one percept's history across one interval. Any non-zero dominance
/// weight (full or mixed) selects the adaptation branch; the weight is not
/// otherwise used.
pub fn step(current: f64, weight: f64, duration: f64, tau: f64) -> f64 {
    if weight != 0.0 {
        saturate(current, duration, tau)
    } else {
        recover(current, duration, tau)
    }
}
