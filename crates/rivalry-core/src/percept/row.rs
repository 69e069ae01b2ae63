use serde::{Deserialize, Serialize};

use super::History;

/// One output row of the history computation, aligned with its input
/// interval. `None` encodes a missing value.
///
/// `history_same`/`history_other` are populated iff the interval's state
/// names a tracked percept; they are always missing for the final interval,
/// whose update is never computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryRow {
    /// Pre-update history of the percept dominant in this interval.
    pub history_same: Option<History>,
    /// Pre-update history of the competing percept.
    pub history_other: Option<History>,
    /// Echo of the normalized tau used for the run, one copy per row for
    /// downstream bookkeeping.
    pub tau_normalized: f64,
}

impl HistoryRow {
    /// A row with both history values missing.
    pub fn missing(tau_normalized: f64) -> Self {
        Self {
            history_same: None,
            history_other: None,
            tau_normalized,
        }
    }

    /// True when both history values are populated.
    pub fn is_populated(&self) -> bool {
        self.history_same.is_some() && self.history_other.is_some()
    }
}
