//! # rivalry-core
//!
//! Foundation crate for the rivalry analysis workspace.
//! Defines the types, errors, config, and constants shared by the
//! engine crates. No computation lives here.

pub mod config;
pub mod constants;
pub mod errors;
pub mod percept;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::HistoryParams;
pub use errors::{HistoryError, RivalryResult};
pub use percept::{History, HistoryRow, IntervalRecord, Percept};
