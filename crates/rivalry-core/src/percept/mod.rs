pub mod history;
pub mod interval;
pub mod row;
pub mod tracked;

pub use history::History;
pub use interval::IntervalRecord;
pub use row::HistoryRow;
pub use tracked::Percept;
