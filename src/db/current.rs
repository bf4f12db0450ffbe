//! Reads and writes of the `current` singleton row (id = 1).

use crate::errors::{AppError, AppResult};
use crate::models::current::NONE_ID;
use crate::models::Current;
use rusqlite::{Connection, OptionalExtension};

pub fn load_current(conn: &Connection) -> AppResult<Current> {
    let row = conn
        .query_row(
            "SELECT current_block_id, current_pause_id FROM current WHERE id = 1",
            [],
            |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)),
        )
        .optional()?;

    // The row is seeded by init_db(); its absence means the schema was never initialized.
    let (block_id, pause_id) =
        row.ok_or_else(|| AppError::Migration("current row missing, run init".to_string()))?;

    Ok(Current::from_raw(block_id, pause_id))
}

pub fn set_current_block(conn: &Connection, id: Option<i64>) -> AppResult<()> {
    conn.execute(
        "UPDATE current SET current_block_id = ?1 WHERE id = 1",
        [id.unwrap_or(NONE_ID)],
    )?;
    Ok(())
}

pub fn set_current_pause(conn: &Connection, id: Option<i64>) -> AppResult<()> {
    conn.execute(
        "UPDATE current SET current_pause_id = ?1 WHERE id = 1",
        [id.unwrap_or(NONE_ID)],
    )?;
    Ok(())
}

pub fn reset_current(conn: &Connection) -> AppResult<()> {
    conn.execute(
        "UPDATE current SET current_block_id = ?1, current_pause_id = ?1 WHERE id = 1",
        [NONE_ID],
    )?;
    Ok(())
}
