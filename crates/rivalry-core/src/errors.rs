/// History computation errors.
///
/// All variants are precondition violations detected before or during the
/// single pass over a sequence. There is no partial-success mode: either the
/// whole sequence is processed or the call fails outright.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("interval sequence is empty")]
    EmptySequence,

    #[error("non-positive duration {duration} at interval {index}")]
    NonPositiveDuration { index: usize, duration: i64 },

    #[error("non-positive mean duration {mean_duration}")]
    NonPositiveMeanDuration { mean_duration: f64 },

    #[error("non-positive normalized tau {tau_normalized}")]
    NonPositiveTau { tau_normalized: f64 },

    #[error("mixed-state weight {mixed_value} outside [0, 1]")]
    MixedValueOutOfRange { mixed_value: f64 },
}

/// Result alias used across the workspace.
pub type RivalryResult<T> = Result<T, HistoryError>;
