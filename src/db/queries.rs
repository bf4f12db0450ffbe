//! Single-statement reads and writes on the `block` and `pause` tables.
//!
//! Everything here takes a plain `&Connection` so it can run either on
//! its own or inside a transaction opened by the `core` layer.

use crate::models::{Block, BlockRange, Pause};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const BLOCK_COLUMNS: &str = r#"id, start, "end", homeoffice"#;
const PAUSE_COLUMNS: &str = r#"id, start, "end", block_id"#;

/// Older rows may carry '' instead of NULL for an unset end.
fn read_end(row: &Row, idx: &str) -> Result<Option<String>> {
    let end: Option<String> = row.get(idx)?;
    Ok(end.filter(|e| !e.is_empty()))
}

/// Map a `block` row; `pauses` is left empty and filled by the caller.
pub fn map_block_row(row: &Row) -> Result<Block> {
    Ok(Block {
        id: row.get("id")?,
        start: row.get::<_, Option<String>>("start")?.unwrap_or_default(),
        end: read_end(row, "end")?,
        homeoffice: row.get::<_, Option<bool>>("homeoffice")?.unwrap_or(false),
        pauses: Vec::new(),
    })
}

pub fn map_pause_row(row: &Row) -> Result<Pause> {
    Ok(Pause {
        id: row.get("id")?,
        start: row.get::<_, Option<String>>("start")?.unwrap_or_default(),
        end: read_end(row, "end")?,
        block_id: row.get("block_id")?,
    })
}

// ---------------------------------------------------------------------------
// block
// ---------------------------------------------------------------------------

pub fn insert_block(
    conn: &Connection,
    start: &str,
    end: Option<&str>,
    homeoffice: bool,
) -> Result<i64> {
    conn.execute(
        r#"INSERT INTO block (start, "end", homeoffice) VALUES (?1, ?2, ?3)"#,
        params![start, end, homeoffice],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn block_exists(conn: &Connection, id: i64) -> Result<bool> {
    let mut stmt = conn.prepare_cached("SELECT 1 FROM block WHERE id = ?1")?;
    stmt.exists([id])
}

/// Load one block with its pauses.
pub fn load_block(conn: &Connection, id: i64) -> Result<Option<Block>> {
    let sql = format!("SELECT {BLOCK_COLUMNS} FROM block WHERE id = ?1");
    let block = conn.query_row(&sql, [id], map_block_row).optional()?;

    match block {
        Some(mut b) => {
            b.pauses = load_pauses_by_block(conn, b.id)?;
            Ok(Some(b))
        }
        None => Ok(None),
    }
}

/// Load the blocks matching `range`, ordered by id, each with its pauses.
pub fn load_blocks(conn: &Connection, range: &BlockRange) -> Result<Vec<Block>> {
    let (filter, bounds): (&str, Vec<&str>) = match range {
        BlockRange::All => ("", vec![]),
        BlockRange::AfterStart(s) => ("WHERE start > date(?1)", vec![s.as_str()]),
        BlockRange::BeforeEnd(e) => (r#"WHERE NULLIF("end", '') < date(?1)"#, vec![e.as_str()]),
        BlockRange::Within { start, end } => (
            r#"WHERE start > date(?1) AND NULLIF("end", '') < date(?2)"#,
            vec![start.as_str(), end.as_str()],
        ),
    };

    // 1) Collect the rows first so the statement is released before the pause lookups
    let mut blocks: Vec<Block> = {
        let sql = format!("SELECT {BLOCK_COLUMNS} FROM block {filter} ORDER BY id ASC");
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(rusqlite::params_from_iter(bounds), map_block_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        out
    };

    // 2) Populate pauses
    for b in &mut blocks {
        b.pauses = load_pauses_by_block(conn, b.id)?;
    }

    Ok(blocks)
}

/// Full replace of start/end/homeoffice. Returns rows affected.
pub fn update_block(conn: &Connection, block: &Block) -> Result<usize> {
    conn.execute(
        r#"UPDATE block SET start = ?1, "end" = ?2, homeoffice = ?3 WHERE id = ?4"#,
        params![block.start, block.end, block.homeoffice, block.id],
    )
}

pub fn update_block_start(conn: &Connection, id: i64, start: &str) -> Result<usize> {
    conn.execute(
        "UPDATE block SET start = ?1 WHERE id = ?2",
        params![start, id],
    )
}

pub fn update_block_end(conn: &Connection, id: i64, end: &str) -> Result<usize> {
    conn.execute(
        r#"UPDATE block SET "end" = ?1 WHERE id = ?2"#,
        params![end, id],
    )
}

pub fn update_block_homeoffice(conn: &Connection, id: i64, homeoffice: bool) -> Result<usize> {
    conn.execute(
        "UPDATE block SET homeoffice = ?1 WHERE id = ?2",
        params![homeoffice, id],
    )
}

/// Delete a block and its pauses. The explicit pause delete keeps the
/// cascade intact on connections opened without `foreign_keys`.
pub fn delete_block(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM pause WHERE block_id = ?1", [id])?;
    conn.execute("DELETE FROM block WHERE id = ?1", [id])
}

// ---------------------------------------------------------------------------
// pause
// ---------------------------------------------------------------------------

pub fn insert_pause(
    conn: &Connection,
    start: &str,
    end: Option<&str>,
    block_id: i64,
) -> Result<i64> {
    conn.execute(
        r#"INSERT INTO pause (start, "end", block_id) VALUES (?1, ?2, ?3)"#,
        params![start, end, block_id],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_pause(conn: &Connection, id: i64) -> Result<Option<Pause>> {
    let sql = format!("SELECT {PAUSE_COLUMNS} FROM pause WHERE id = ?1");
    conn.query_row(&sql, [id], map_pause_row).optional()
}

/// Pauses of a block in creation order.
pub fn load_pauses_by_block(conn: &Connection, block_id: i64) -> Result<Vec<Pause>> {
    let sql = format!("SELECT {PAUSE_COLUMNS} FROM pause WHERE block_id = ?1 ORDER BY id ASC");
    let mut stmt = conn.prepare_cached(&sql)?;
    let rows = stmt.query_map([block_id], map_pause_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn update_pause(conn: &Connection, pause: &Pause) -> Result<usize> {
    conn.execute(
        r#"UPDATE pause SET start = ?1, "end" = ?2 WHERE id = ?3"#,
        params![pause.start, pause.end, pause.id],
    )
}

pub fn update_pause_start(conn: &Connection, id: i64, start: &str) -> Result<usize> {
    conn.execute(
        "UPDATE pause SET start = ?1 WHERE id = ?2",
        params![start, id],
    )
}

pub fn update_pause_end(conn: &Connection, id: i64, end: &str) -> Result<usize> {
    conn.execute(
        r#"UPDATE pause SET "end" = ?1 WHERE id = ?2"#,
        params![end, id],
    )
}

pub fn delete_pause(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM pause WHERE id = ?1", [id])
}
