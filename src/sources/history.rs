//! Pointer position history
//!
//! Full-screen hint mode records where the pointer was before each
//! selection. History mode then offers one hint per recorded position,
//! labeled `a`, `b`, `c`, ... oldest first.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::hint::labels::single_char_labels;
use crate::hint::Hint;

/// Number of positions kept
pub const HISTORY_CAPACITY: usize = 16;

/// Labels for history hints, assigned in entry order
pub const HISTORY_LABELS: &str = "abcdefghijklmnopqrstuvwxyz";

/// A recorded pointer position, screen-local
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub x: i32,
    pub y: i32,
}

/// Storage for recorded pointer positions
pub trait PositionHistory {
    /// Record a position as the most recent entry
    fn add(&mut self, x: i32, y: i32) -> Result<()>;

    /// All entries, oldest first
    fn read(&self) -> Result<Vec<HistoryEntry>>;
}

/// Insert `entry` as the newest, dropping an equal older entry and the
/// oldest entries beyond capacity
fn push_entry(entries: &mut Vec<HistoryEntry>, entry: HistoryEntry) {
    entries.retain(|e| *e != entry);
    entries.push(entry);
    if entries.len() > HISTORY_CAPACITY {
        let excess = entries.len() - HISTORY_CAPACITY;
        entries.drain(..excess);
    }
}

/// History kept only for the lifetime of the process
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
    entries: Vec<HistoryEntry>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PositionHistory for MemoryHistory {
    fn add(&mut self, x: i32, y: i32) -> Result<()> {
        push_entry(&mut self.entries, HistoryEntry { x, y });
        Ok(())
    }

    fn read(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self.entries.clone())
    }
}

/// History persisted as a JSON array on disk
#[derive(Debug, Clone)]
pub struct HistoryFile {
    path: PathBuf,
}

impl HistoryFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location in the user's cache directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::cache_dir().map(|p| p.join("hintwarp").join("history.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PositionHistory for HistoryFile {
    fn add(&mut self, x: i32, y: i32) -> Result<()> {
        let mut entries = self.read()?;
        push_entry(&mut entries, HistoryEntry { x, y });

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string(&entries)?)?;
        log::debug!("Recorded history entry ({}, {}) in {}", x, y, self.path.display());
        Ok(())
    }

    fn read(&self) -> Result<Vec<HistoryEntry>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(Vec::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }
}

/// One `w x h` hint centered on each entry, labeled in entry order
pub fn history_hints(entries: &[HistoryEntry], w: i32, h: i32) -> Vec<Hint> {
    entries
        .iter()
        .zip(single_char_labels(HISTORY_LABELS, entries.len()))
        .map(|(e, label)| Hint::centered_at(e.x, e.y, w, h, label))
        .collect()
}
