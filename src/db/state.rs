//! Persistence of the navigation state in the `app_state` table.

use crate::errors::AppResult;
use crate::models::{AppState, GroupPair, YearMonth};
use rusqlite::{Connection, OptionalExtension, params};

const KEY_MONTH: &str = "current_month";
const KEY_GROUP: &str = "current_group";

fn get_value(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let mut stmt = conn.prepare_cached("SELECT value FROM app_state WHERE key = ?1")?;
    Ok(stmt.query_row([key], |row| row.get(0)).optional()?)
}

fn set_value(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO app_state (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )?;
    Ok(())
}

/// Load the saved state.
///
/// A missing or unparsable month falls back to the current month; a group
/// that is not one of `groups` falls back to the first label.
pub fn load_state(conn: &Connection, groups: Option<&GroupPair>) -> AppResult<AppState> {
    let month = get_value(conn, KEY_MONTH)?
        .and_then(|m| m.parse::<YearMonth>().ok())
        .unwrap_or_else(YearMonth::current);

    let group = match groups {
        Some(pair) => {
            let saved = get_value(conn, KEY_GROUP)?;
            let label = saved
                .as_deref()
                .and_then(|g| pair.resolve(g).ok())
                .unwrap_or_else(|| pair.first());
            Some(label.to_string())
        }
        None => None,
    };

    Ok(AppState::new(month, group))
}

pub fn save_state(conn: &Connection, state: &AppState) -> AppResult<()> {
    set_value(conn, KEY_MONTH, &state.month.to_string())?;
    if let Some(g) = &state.group {
        set_value(conn, KEY_GROUP, g)?;
    }
    Ok(())
}
