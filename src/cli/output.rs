//! Rendering of store results, either human readable or JSON.

use crate::errors::{AppError, AppResult};
use crate::models::{Block, Current, Pause, SessionState};
use crate::utils::colors::{GREY, RESET, color_for_optional_field};
use crate::utils::datetime::{format_minutes, minutes_between, short_time};
use serde::Serialize;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    let s = serde_json::to_string_pretty(value).map_err(|e| AppError::Other(e.to_string()))?;
    println!("{}", s);
    Ok(())
}

fn end_or_open(end: Option<&str>) -> String {
    match end {
        Some(e) => e.to_string(),
        None => format!("{GREY}(open){RESET}"),
    }
}

/// Block length minus its closed pauses, for closed blocks only.
fn net_minutes(block: &Block) -> Option<i64> {
    let gross = minutes_between(&block.start, block.end.as_deref()?)?;
    let paused: i64 = block
        .pauses
        .iter()
        .filter_map(|p| minutes_between(&p.start, p.end.as_deref()?))
        .sum();
    Some(gross - paused)
}

fn pause_line(p: &Pause) -> String {
    let len = p
        .end
        .as_deref()
        .and_then(|e| minutes_between(&p.start, e))
        .map(|m| format!(" ({})", format_minutes(m)))
        .unwrap_or_default();
    let end = p
        .end
        .as_deref()
        .map(short_time)
        .unwrap_or_else(|| "--:--".to_string());

    format!(
        "pause #{} {} → {}{}{}{}",
        p.id,
        short_time(&p.start),
        color_for_optional_field(p.end.as_deref()),
        end,
        RESET,
        len
    )
}

pub fn print_block(block: &Block, json: bool) -> AppResult<()> {
    if json {
        return print_json(block);
    }

    let place = if block.homeoffice { "🏠 home" } else { "🏢 office" };
    let worked = net_minutes(block)
        .map(|m| format!(" | worked {}", format_minutes(m)))
        .unwrap_or_default();

    println!(
        "#{} {} → {} | {}{}",
        block.id,
        block.start,
        end_or_open(block.end.as_deref()),
        place,
        worked
    );
    for p in &block.pauses {
        println!("    {}", pause_line(p));
    }
    Ok(())
}

pub fn print_blocks(blocks: &[Block], json: bool, separator: &str) -> AppResult<()> {
    if json {
        return print_json(blocks);
    }

    if blocks.is_empty() {
        println!("No blocks found.");
        return Ok(());
    }

    let rule = separator.repeat(40);
    for b in blocks {
        print_block(b, false)?;
        println!("{}", rule);
    }
    println!("{} block(s)", blocks.len());
    Ok(())
}

pub fn print_pause(pause: &Pause, json: bool) -> AppResult<()> {
    if json {
        return print_json(pause);
    }

    println!(
        "pause #{} of block #{}: {} → {}",
        pause.id,
        pause.block_id,
        pause.start,
        end_or_open(pause.end.as_deref())
    );
    Ok(())
}

pub fn print_pauses(pauses: &[Pause], json: bool) -> AppResult<()> {
    if json {
        return print_json(pauses);
    }

    if pauses.is_empty() {
        println!("No pauses found.");
        return Ok(());
    }

    for p in pauses {
        println!("{}", pause_line(p));
    }
    Ok(())
}

pub fn print_status(current: &Current, json: bool) -> AppResult<()> {
    if json {
        return print_json(current);
    }

    match current.state() {
        SessionState::Idle => println!("Idle: no block active."),
        SessionState::BlockActive { block_id } => println!("Block #{} active.", block_id),
        SessionState::PauseActive { block_id, pause_id } => {
            println!("Block #{} active, pause #{} running.", block_id, pause_id)
        }
    }
    Ok(())
}
