use crate::db::current::load_current;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::SessionState;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTALS
    //
    let blocks: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM block", [], |row| row.get(0))?;
    let pauses: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM pause", [], |row| row.get(0))?;
    println!("{}• Blocks:{} {}{}{}", CYAN, RESET, GREEN, blocks, RESET);
    println!("{}• Pauses:{} {}{}{}", CYAN, RESET, GREEN, pauses, RESET);

    //
    // 3) RANGE (lexical on stored start)
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT start FROM block ORDER BY start ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?
        .flatten();
    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT start FROM block ORDER BY start DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?
        .flatten();

    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Block starts:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) SESSION
    //
    let state = match load_current(&pool.conn)?.state() {
        SessionState::Idle => "idle".to_string(),
        SessionState::BlockActive { block_id } => format!("block {} active", block_id),
        SessionState::PauseActive { block_id, pause_id } => {
            format!("block {} active, pause {} active", block_id, pause_id)
        }
    };
    println!("{}• Session:{} {}", CYAN, RESET, state);

    println!();
    Ok(())
}
