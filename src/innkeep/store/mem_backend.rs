use super::StorageBackend;
use crate::error::{InnkeepError, Result};
use std::collections::HashMap;

/// In-memory storage for testing. Does NOT persist data.
/// Cloning produces an independent store.
#[derive(Default, Clone)]
pub struct MemBackend {
    files: HashMap<String, Vec<String>>,
    fail_writes: bool,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail, for exercising rollback paths.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// The raw stored lines for a file, for asserting on persisted state.
    pub fn raw_lines(&self, name: &str) -> Vec<String> {
        self.files.get(name).cloned().unwrap_or_default()
    }
}

impl StorageBackend for MemBackend {
    fn read_lines(&self, name: &str) -> Result<Vec<String>> {
        Ok(self.files.get(name).cloned().unwrap_or_default())
    }

    fn write_lines(&mut self, name: &str, lines: &[String]) -> Result<()> {
        if self.fail_writes {
            return Err(InnkeepError::Store("simulated write failure".to_string()));
        }
        self.files.insert(name.to_string(), lines.to_vec());
        Ok(())
    }
}
