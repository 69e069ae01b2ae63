use serde::{Deserialize, Serialize};
use std::fmt;

/// Accumulated adaptation history clamped to [0.0, 1.0].
/// An exponentially smoothed dominance fraction: how adapted/fatigued a
/// percept is right now. 0.0 means unadapted, 1.0 fully saturated.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct History(f64);

impl History {
    /// Create a new History, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// True for the unadapted state (exactly zero accumulated history).
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl Default for History {
    fn default() -> Self {
        Self(0.0)
    }
}

impl fmt::Display for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}
