use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

const HOMEOFFICE_MIGRATION: &str = "20230601_0002_add_homeoffice_flag";

/// Ensure that the `log` table exists with the modern schema.
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
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create `block`, `pause` and `current` with the current schema.
fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS block (
            id         INTEGER PRIMARY KEY ASC,
            start      TEXT,
            "end"      TEXT,
            homeoffice INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS pause (
            id       INTEGER PRIMARY KEY ASC,
            start    TEXT,
            "end"    TEXT,
            block_id INTEGER NOT NULL,
            FOREIGN KEY(block_id) REFERENCES block(id) ON DELETE CASCADE
        );

        CREATE TABLE IF NOT EXISTS current (
            id               INTEGER PRIMARY KEY ASC,
            current_block_id INTEGER NOT NULL DEFAULT -1,
            current_pause_id INTEGER NOT NULL DEFAULT -1
        );
        "#,
    )?;
    Ok(())
}

/// The singleton row always has id 1 and starts idle.
fn seed_current(conn: &Connection) -> Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO current (id, current_block_id, current_pause_id)
         VALUES (1, -1, -1)",
        [],
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

/// Databases created before home-office tracking have no `homeoffice` column.
fn migrate_add_homeoffice_column(conn: &Connection) -> Result<()> {
    if migration_applied(conn, HOMEOFFICE_MIGRATION)? {
        return Ok(());
    }

    if !table_has_column(conn, "block", "homeoffice")? {
        warning("Adding 'homeoffice' column to block table...");
        conn.execute(
            "ALTER TABLE block ADD COLUMN homeoffice INTEGER NOT NULL DEFAULT 0",
            [],
        )?;
        success(format!(
            "Migration applied: {} → added 'homeoffice' to block table",
            HOMEOFFICE_MIGRATION
        ));
    }

    record_migration(conn, HOMEOFFICE_MIGRATION)
}

fn record_migration(conn: &Connection, version: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Block table has homeoffice flag')",
        [version],
    )?;
    Ok(())
}

fn ensure_indexes(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_pause_block_id ON pause(block_id);
        CREATE INDEX IF NOT EXISTS idx_block_start ON block(start);
        "#,
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db(); every step is idempotent.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Legacy databases already have a block table, possibly without homeoffice
    let legacy = table_exists(conn, "block")?;

    // 3) Create missing tables and the singleton row
    create_schema(conn)?;
    seed_current(conn)?;

    // 4) Upgrade older block tables; a fresh one already has the column
    if legacy {
        migrate_add_homeoffice_column(conn)?;
    } else if !migration_applied(conn, HOMEOFFICE_MIGRATION)? {
        record_migration(conn, HOMEOFFICE_MIGRATION)?;
    }

    // 5) Indexes
    ensure_indexes(conn)?;

    Ok(())
}
