use super::{RosterStore, decode, encode};
use crate::errors::AppResult;
use crate::models::Roster;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

/// Roster store over the `rosters` table.
pub struct SqliteStore<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn load_raw(&self, key: &str) -> AppResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT data FROM rosters WHERE period_key = ?1")?;
        let raw = stmt
            .query_row([key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(raw)
    }

    /// All stored keys, ascending.
    pub fn keys(&self) -> AppResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT period_key FROM rosters ORDER BY period_key ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}

impl RosterStore for SqliteStore<'_> {
    fn load(&self, key: &str) -> AppResult<Option<Roster>> {
        match self.load_raw(key)? {
            Some(raw) => decode(key, &raw).map(Some),
            None => Ok(None),
        }
    }

    fn save(&mut self, key: &str, roster: &Roster) -> AppResult<()> {
        let data = encode(roster)?;
        let now = Local::now().to_rfc3339();

        self.conn.execute(
            "INSERT INTO rosters (period_key, data, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(period_key) DO UPDATE SET
                data = excluded.data,
                updated_at = excluded.updated_at",
            params![key, data, now],
        )?;

        Ok(())
    }

    fn contains(&self, key: &str) -> AppResult<bool> {
        Ok(self.load_raw(key)?.is_some())
    }
}
