use serde::{Deserialize, Serialize};

use crate::constants::{STATE_PERCEPT_ONE, STATE_PERCEPT_TWO};

/// One of the exactly two competing percepts whose histories are tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Percept {
    One,
    Two,
}

impl Percept {
    /// Both tracked percepts, in state-code order.
    pub const BOTH: [Percept; 2] = [Percept::One, Percept::Two];

    /// The state code reported when this percept is dominant.
    pub fn code(self) -> i32 {
        match self {
            Percept::One => STATE_PERCEPT_ONE,
            Percept::Two => STATE_PERCEPT_TWO,
        }
    }

    /// The competing percept (the 1↔2 complement).
    pub fn other(self) -> Percept {
        match self {
            Percept::One => Percept::Two,
            Percept::Two => Percept::One,
        }
    }

    /// The percept dominant under a given state code, if any.
    pub fn from_state(state: i32) -> Option<Percept> {
        match state {
            STATE_PERCEPT_ONE => Some(Percept::One),
            STATE_PERCEPT_TWO => Some(Percept::Two),
            _ => None,
        }
    }

    /// Index into per-percept arrays.
    pub fn index(self) -> usize {
        match self {
            Percept::One => 0,
            Percept::Two => 1,
        }
    }
}
