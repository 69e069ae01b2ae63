use rivalry_core::errors::{HistoryError, RivalryResult};
use rivalry_core::traits::IHistoryEngine;
use rivalry_core::{History, HistoryParams, HistoryRow, IntervalRecord, Percept};
use tracing::debug;

use crate::classify;
use crate::formula;

/// Engine computing per-interval adaptation history for the two tracked
/// percepts.
///
/// Holds only validated, immutable parameters; all running state is local to
/// `compute`, so one engine can serve independent sequences from multiple
/// threads.
#[derive(Debug)]
pub struct HistoryEngine {
    params: HistoryParams,
}

impl HistoryEngine {
    /// Create an engine with the default parameters.
    pub fn new() -> Self {
        Self {
            params: HistoryParams::default(),
        }
    }

    /// Create an engine with explicit parameters. Fails fast on invalid
    /// `tau_normalized` or `mixed_value`.
    pub fn with_params(params: HistoryParams) -> RivalryResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Get the run parameters.
    pub fn params(&self) -> &HistoryParams {
        &self.params
    }

    /// Compute one output row per input interval.
    ///
    /// `mean_duration` is the sequence-level mean interval duration; the
    /// time constant `tau = tau_normalized * mean_duration` is fixed once
    /// for the whole sequence.
    ///
    /// Rows whose state names a tracked percept carry that percept's
    /// pre-update history (`history_same`) and its competitor's
    /// (`history_other`); all other rows, and always the final row, carry
    /// neither. Histories persist across the whole sequence; there is no
    /// mid-sequence reset.
    pub fn compute(
        &self,
        intervals: &[IntervalRecord],
        mean_duration: f64,
    ) -> RivalryResult<Vec<HistoryRow>> {
        validate_sequence(intervals, mean_duration)?;

        let tau = self.params.tau_normalized * mean_duration;
        debug!(
            intervals = intervals.len(),
            tau, "computing adaptation history"
        );

        let mut current = [0.0f64; 2];
        let mut rows = vec![HistoryRow::missing(self.params.tau_normalized); intervals.len()];

        // The final interval is excluded: there is no next row to receive
        // its update.
        let last = intervals.len() - 1;
        for (record, row) in intervals.iter().zip(rows.iter_mut()).take(last) {
            if let Some(dominant) = Percept::from_state(record.state) {
                row.history_same = Some(History::new(current[dominant.index()]));
                row.history_other = Some(History::new(current[dominant.other().index()]));
            }

            let duration = record.duration as f64;
            for percept in Percept::BOTH {
                let weight = classify::classify(record.state, percept, self.params.mixed_state)
                    .weight(&self.params);
                current[percept.index()] =
                    formula::step(current[percept.index()], weight, duration, tau);
            }
        }

        debug!(rows = rows.len(), "history pass complete");
        Ok(rows)
    }
}

impl Default for HistoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IHistoryEngine for HistoryEngine {
    fn compute(
        &self,
        intervals: &[IntervalRecord],
        mean_duration: f64,
    ) -> RivalryResult<Vec<HistoryRow>> {
        HistoryEngine::compute(self, intervals, mean_duration)
    }
}

/// Sequence preconditions: non-empty, positive durations, positive mean
/// duration. Checked in full before any computation; no partial output.
fn validate_sequence(intervals: &[IntervalRecord], mean_duration: f64) -> RivalryResult<()> {
    if intervals.is_empty() {
        return Err(HistoryError::EmptySequence);
    }
    if !(mean_duration > 0.0) {
        return Err(HistoryError::NonPositiveMeanDuration { mean_duration });
    }
    for (index, record) in intervals.iter().enumerate() {
        if record.duration <= 0 {
            return Err(HistoryError::NonPositiveDuration {
                index,
                duration: record.duration,
            });
        }
    }
    Ok(())
}
