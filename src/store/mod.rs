//! Durable mapping from period key to roster.
//!
//! Values are stored as a JSON array of `{ "name": .., "paid": .. }`
//! objects. A key that was never written loads as `Ok(None)`; a key whose
//! value does not decode loads as `Err(AppError::CorruptRoster)` so that
//! "no data" and "bad data" stay distinguishable.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::{AppError, AppResult};
use crate::models::Roster;

pub trait RosterStore {
    fn load(&self, key: &str) -> AppResult<Option<Roster>>;

    /// Overwrite the value stored under `key`.
    fn save(&mut self, key: &str, roster: &Roster) -> AppResult<()>;

    fn contains(&self, key: &str) -> AppResult<bool>;
}

pub fn encode(roster: &Roster) -> AppResult<String> {
    Ok(serde_json::to_string(roster)?)
}

pub fn decode(key: &str, raw: &str) -> AppResult<Roster> {
    serde_json::from_str(raw).map_err(|e| AppError::CorruptRoster {
        key: key.to_string(),
        reason: e.to_string(),
    })
}
