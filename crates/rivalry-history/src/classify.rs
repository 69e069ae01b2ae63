use rivalry_core::{HistoryParams, Percept};

/// Dominance level of one tracked percept during one interval.
///
/// Exactly one variant applies per (state, percept) pair. A state code that
/// names the percept wins over the mixed code if the two ever coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// The interval's state names this percept.
    Full,
    /// Mixed perception; this percept holds a partial dominance weight.
    Mixed,
    /// The competitor, or a transition/blink code, holds the interval.
    Absent,
}

impl Dominance {
    /// Dominance weight: 1 for full dominance, the configured mixed weight
    /// for mixed perception, 0 otherwise.
    pub fn weight(self, params: &HistoryParams) -> f64 {
        match self {
            Dominance::Full => 1.0,
            Dominance::Mixed => params.mixed_value,
            Dominance::Absent => 0.0,
        }
    }
}

/// Classify a percept's dominance during an interval with the given state
/// code. Pure; the whole state-code convention lives here.
pub fn classify(state: i32, percept: Percept, mixed_state: i32) -> Dominance {
    if state == percept.code() {
        Dominance::Full
    } else if state == mixed_state {
        Dominance::Mixed
    } else {
        Dominance::Absent
    }
}
