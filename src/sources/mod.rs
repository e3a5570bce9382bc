//! Hint sources other than the screen grid

pub mod hintspec;
pub mod history;

pub use hintspec::{hintspec_hints, parse_hint_specs, read_hint_specs, HintSpec};
pub use history::{history_hints, HistoryEntry, HistoryFile, MemoryHistory, PositionHistory};
