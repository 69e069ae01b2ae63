use crate::errors::RivalryResult;
use crate::percept::{HistoryRow, IntervalRecord};

/// Seam between the history engine and its consumers.
///
/// `mean_duration` is a sequence-level constant supplied by the input
/// provider (the mean interval duration of the sequence); the engine derives
/// its time constant from it once, for the whole sequence.
pub trait IHistoryEngine {
    fn compute(
        &self,
        intervals: &[IntervalRecord],
        mean_duration: f64,
    ) -> RivalryResult<Vec<HistoryRow>>;
}
