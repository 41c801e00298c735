use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `rosters` table with the current schema.
fn create_rosters_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS rosters (
            period_key  TEXT PRIMARY KEY,
            data        TEXT NOT NULL,
            updated_at  TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;
    Ok(())
}

/// Create the `app_state` key/value table (current month, current group).
fn create_app_state_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS app_state (
            key    TEXT PRIMARY KEY,
            value  TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Adds `updated_at` to a `rosters` table that was created without it.
fn migrate_add_updated_at_to_rosters(conn: &Connection) -> Result<()> {
    let version = "20250310_0002_add_rosters_updated_at";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    if !table_has_column(conn, "rosters", "updated_at")? {
        warning("Adding 'updated_at' column to rosters table...");
        conn.execute(
            "ALTER TABLE rosters ADD COLUMN updated_at TEXT NOT NULL DEFAULT ''",
            [],
        )?;
    }

    mark_applied(conn, version, "Added updated_at to rosters")?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by `db::initialize::init_db()` and every time a command opens
/// the database.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !table_exists(conn, "rosters")? {
        create_rosters_table(conn)?;
        success("Created rosters table.");
    }

    if !table_exists(conn, "app_state")? {
        create_app_state_table(conn)?;
    }

    migrate_add_updated_at_to_rosters(conn)?;

    Ok(())
}
