use crate::cli::commands::{audit, open_store, optional_timestamp};
use crate::cli::output::{print_block, print_blocks};
use crate::cli::parser::BlockAction;
use crate::config::Config;
use crate::core::block::BlockLogic;
use crate::errors::{AppError, AppResult};
use crate::models::{Affected, Block, BlockCreate, BlockRange, PauseSpan};
use crate::ui::messages::success;
use crate::utils::datetime::{ensure_day_bound, ensure_rfc3339};

/// Parse a `START,END` pause argument; END may be empty for an open pause.
fn parse_pause_arg(raw: &str) -> AppResult<PauseSpan> {
    let (start, end) = match raw.split_once(',') {
        Some((s, e)) => (s.trim(), Some(e.trim().to_string())),
        None => (raw.trim(), None),
    };

    let span = PauseSpan {
        start: start.to_string(),
        end: optional_timestamp(&end)?,
    };
    span.validate()?;
    Ok(span)
}

fn require_found(affected: Affected, id: i64) -> AppResult<()> {
    match affected {
        Affected::Updated(_) => Ok(()),
        Affected::NotFound => Err(AppError::BlockNotFound(id)),
    }
}

pub fn handle(action: &BlockAction, cfg: &Config, json: bool) -> AppResult<()> {
    match action {
        BlockAction::Add {
            start,
            end,
            homeoffice,
            pauses,
        } => {
            let mut create = BlockCreate::new(start.clone(), optional_timestamp(end)?, *homeoffice);
            for raw in pauses {
                create.pauses.push(parse_pause_arg(raw)?);
            }
            create.validate()?;

            let mut pool = open_store(cfg)?;
            let block = BlockLogic::add(&mut pool, &create)?;

            audit(
                &pool,
                "add",
                &format!("block {}", block.id),
                &format!("Block added with {} pause(s)", block.pauses.len()),
            );
            print_block(&block, json)?;
        }

        BlockAction::Get { id } => {
            let mut pool = open_store(cfg)?;
            let block = BlockLogic::get(&mut pool, *id)?;
            print_block(&block, json)?;
        }

        BlockAction::List { after, before } => {
            let range = BlockRange::from_bounds(after.clone(), before.clone());
            match &range {
                BlockRange::All => {}
                BlockRange::AfterStart(t) | BlockRange::BeforeEnd(t) => ensure_day_bound(t)?,
                BlockRange::Within { start, end } => {
                    ensure_day_bound(start)?;
                    ensure_day_bound(end)?;
                }
            }

            let mut pool = open_store(cfg)?;
            let blocks = BlockLogic::list(&mut pool, &range)?;
            print_blocks(&blocks, json, &cfg.separator_char)?;
        }

        BlockAction::Update {
            id,
            start,
            end,
            homeoffice,
        } => {
            let block = Block {
                id: *id,
                start: start.clone(),
                end: optional_timestamp(end)?,
                homeoffice: *homeoffice,
                pauses: Vec::new(),
            };
            block.validate()?;

            let mut pool = open_store(cfg)?;
            require_found(BlockLogic::update(&mut pool, &block)?, *id)?;

            audit(&pool, "update", &format!("block {}", id), "Block replaced");
            if !json {
                success(format!("Block #{} updated.", id));
            }
        }

        BlockAction::SetStart { id, start } => {
            ensure_rfc3339(start)?;

            let mut pool = open_store(cfg)?;
            require_found(BlockLogic::update_start(&mut pool, *id, start)?, *id)?;

            audit(&pool, "update", &format!("block {}", id), &format!("start = {}", start));
            if !json {
                success(format!("Block #{} start set to {}.", id, start));
            }
        }

        BlockAction::SetEnd { id, end } => {
            ensure_rfc3339(end)?;

            let mut pool = open_store(cfg)?;
            require_found(BlockLogic::update_end(&mut pool, *id, end)?, *id)?;

            audit(&pool, "update", &format!("block {}", id), &format!("end = {}", end));
            if !json {
                success(format!("Block #{} end set to {}.", id, end));
            }
        }

        BlockAction::SetHomeoffice { id, homeoffice } => {
            let mut pool = open_store(cfg)?;
            require_found(
                BlockLogic::update_homeoffice(&mut pool, *id, *homeoffice)?,
                *id,
            )?;

            audit(
                &pool,
                "update",
                &format!("block {}", id),
                &format!("homeoffice = {}", homeoffice),
            );
            if !json {
                success(format!("Block #{} homeoffice set to {}.", id, homeoffice));
            }
        }

        BlockAction::Del { id } => {
            let mut pool = open_store(cfg)?;
            require_found(BlockLogic::delete(&mut pool, *id)?, *id)?;

            audit(&pool, "del", &format!("block {}", id), "Block and its pauses deleted");
            if !json {
                success(format!("Block #{} and its pauses deleted.", id));
            }
        }
    }

    Ok(())
}
