use serde::{Deserialize, Serialize};

/// One perceptual dominance interval.
///
/// A slice of these is always in temporal order; the order is semantically
/// significant because the history recurrence folds over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalRecord {
    /// Time at which the interval begins. Carried for bookkeeping only;
    /// the recurrence itself never reads it.
    pub onset: i64,
    /// Length of the interval. Must be positive.
    pub duration: i64,
    /// Perceptual state code during the interval: 1 = percept one dominant,
    /// 2 = percept two dominant, anything else = neither purely dominant.
    pub state: i32,
}

impl IntervalRecord {
    pub fn new(onset: i64, duration: i64, state: i32) -> Self {
        Self {
            onset,
            duration,
            state,
        }
    }
}
