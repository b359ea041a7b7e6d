use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{info, warn};

/// Inventory log I/O failure.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("inventory log i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("inventory log format error: {0}")]
    Format(#[from] serde_json::Error),
}

/// Append-only log of captured records, bound to a JSON file.
///
/// The log is a journal, not a keyed store: records are appended as they
/// arrive and duplicates are the caller's concern. The file holds the whole
/// log as one pretty-printed JSON array; a load replaces the in-memory log
/// atomically or not at all.
#[derive(Debug)]
pub struct InventoryLog<T> {
    path: PathBuf,
    records: Vec<T>,
}

impl<T> InventoryLog<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn add(&mut self, record: T) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Clone> InventoryLog<T> {
    /// Snapshot copy of all records, in capture order.
    pub fn records(&self) -> Vec<T> {
        self.records.clone()
    }
}

impl<T: Serialize> InventoryLog<T> {
    /// Write the whole log to the bound file.
    pub fn save(&self) -> Result<(), LogError> {
        let file = File::create(&self.path)?;
        self.save_to(BufWriter::new(file))?;
        info!(path = %self.path.display(), records = self.records.len(), "inventory log saved");
        Ok(())
    }

    /// Write the whole log to an arbitrary sink (pretty-printed JSON array).
    pub fn save_to<W: Write>(&self, writer: W) -> Result<(), LogError> {
        serde_json::to_writer_pretty(writer, &self.records)?;
        Ok(())
    }
}

impl<T: DeserializeOwned> InventoryLog<T> {
    /// Replace the log contents from the bound file.
    ///
    /// A missing file is not an error: the log is left as-is and zero is
    /// returned. A file that fails to decode loads nothing (all-or-nothing)
    /// and reports `LogError::Format`.
    pub fn load(&mut self) -> Result<usize, LogError> {
        if !self.path.exists() {
            warn!(path = %self.path.display(), "inventory log file does not exist, nothing loaded");
            return Ok(0);
        }
        let file = File::open(&self.path)?;
        let loaded = self.load_from(BufReader::new(file))?;
        info!(path = %self.path.display(), records = loaded, "inventory log loaded");
        Ok(loaded)
    }

    /// Replace the log contents from an arbitrary source.
    pub fn load_from<R: Read>(&mut self, reader: R) -> Result<usize, LogError> {
        let records: Vec<T> = serde_json::from_reader(reader)?;
        self.records = records;
        Ok(self.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{InventoryItem, ItemId};
    use chrono::Utc;

    fn sample(id: u32, name: &str, quantity: i64) -> InventoryItem {
        InventoryItem::new(ItemId::new(id), name, quantity, Utc::now())
    }

    #[test]
    fn round_trips_through_a_buffer() {
        let mut log = InventoryLog::new("unused.json");
        log.add(sample(1, "Laptop", 10));
        log.add(sample(2, "Mouse", 50));

        let mut buf = Vec::new();
        log.save_to(&mut buf).unwrap();

        let mut restored: InventoryLog<InventoryItem> = InventoryLog::new("unused.json");
        let loaded = restored.load_from(buf.as_slice()).unwrap();

        assert_eq!(loaded, 2);
        assert_eq!(restored.records(), log.records());
    }

    #[test]
    fn corrupt_input_loads_nothing() {
        let mut log: InventoryLog<InventoryItem> = InventoryLog::new("unused.json");
        log.add(sample(1, "Keyboard", 25));

        let err = log.load_from(&b"{ not json"[..]).unwrap_err();
        assert!(matches!(err, LogError::Format(_)));
        // All-or-nothing: the previous contents survive a failed load.
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn missing_file_leaves_log_untouched() {
        let mut log: InventoryLog<InventoryItem> =
            InventoryLog::new("definitely/not/here/inventory_log.json");
        log.add(sample(3, "Monitor", 4));

        assert_eq!(log.load().unwrap(), 0);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn saved_output_is_a_json_array() {
        let mut log = InventoryLog::new("unused.json");
        log.add(sample(1, "Laptop", 10));

        let mut buf = Vec::new();
        log.save_to(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.trim_start().starts_with('['));
        assert!(text.contains("\"Laptop\""));
    }
}
