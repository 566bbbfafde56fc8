//! Domain entities - analysis outcomes and per-user history records

mod analysis;
mod history_entry;

pub use analysis::{AnalysisResult, AnalysisTicket};
pub use history_entry::HistoryEntry;
