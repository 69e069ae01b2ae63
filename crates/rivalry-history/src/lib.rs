//! # rivalry-history
//!
//! Per-interval exponential-decay adaptation history for bistable-perception
//! sequences (e.g., binocular rivalry). For every interval except the last,
//! the engine reports the accumulated history of the dominant percept and of
//! its competitor at interval onset, then advances both histories with the
//! closed-form exponential recurrence.

pub mod classify;
pub mod engine;
pub mod formula;

pub use classify::Dominance;
pub use engine::HistoryEngine;
