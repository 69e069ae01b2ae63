use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::{HistoryError, RivalryResult};

/// Parameters for one history computation run. Immutable once validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryParams {
    /// Decay time constant, as a multiple of the mean interval duration.
    pub tau_normalized: f64,
    /// State code treated as mixed perception.
    pub mixed_state: i32,
    /// Dominance weight (0–1) assigned to the mixed state.
    pub mixed_value: f64,
}

impl HistoryParams {
    /// Check parameter preconditions: `tau_normalized > 0`,
    /// `mixed_value` in [0, 1].
    pub fn validate(&self) -> RivalryResult<()> {
        if !(self.tau_normalized > 0.0) {
            return Err(HistoryError::NonPositiveTau {
                tau_normalized: self.tau_normalized,
            });
        }
        if !(0.0..=1.0).contains(&self.mixed_value) {
            return Err(HistoryError::MixedValueOutOfRange {
                mixed_value: self.mixed_value,
            });
        }
        Ok(())
    }
}

impl Default for HistoryParams {
    fn default() -> Self {
        Self {
            tau_normalized: constants::DEFAULT_TAU_NORMALIZED,
            mixed_state: constants::DEFAULT_MIXED_STATE,
            mixed_value: constants::DEFAULT_MIXED_VALUE,
        }
    }
}
