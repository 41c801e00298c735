use super::{RosterStore, decode, encode};
use crate::errors::{AppError, AppResult};
use crate::models::Roster;
use std::collections::BTreeMap;

/// In-process store keeping the same JSON text the SQLite table would.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put raw text under `key`, bypassing encoding.
    pub fn insert_raw(&mut self, key: &str, raw: &str) {
        self.entries.insert(key.to_string(), raw.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Make every subsequent `save` fail.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }
}

impl RosterStore for MemoryStore {
    fn load(&self, key: &str) -> AppResult<Option<Roster>> {
        self.entries
            .get(key)
            .map(|raw| decode(key, raw))
            .transpose()
    }

    fn save(&mut self, key: &str, roster: &Roster) -> AppResult<()> {
        if self.read_only {
            return Err(AppError::Other(format!("store is read-only, '{key}' not saved")));
        }
        let raw = encode(roster)?;
        self.entries.insert(key.to_string(), raw);
        Ok(())
    }

    fn contains(&self, key: &str) -> AppResult<bool> {
        Ok(self.entries.contains_key(key))
    }
}
