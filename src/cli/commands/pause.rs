use crate::cli::commands::{audit, open_store, optional_timestamp};
use crate::cli::output::{print_pause, print_pauses};
use crate::cli::parser::PauseAction;
use crate::config::Config;
use crate::core::pause::PauseLogic;
use crate::errors::{AppError, AppResult};
use crate::models::{Affected, Pause, PauseCreate};
use crate::ui::messages::success;
use crate::utils::datetime::ensure_rfc3339;

fn require_found(affected: Affected, id: i64) -> AppResult<()> {
    match affected {
        Affected::Updated(_) => Ok(()),
        Affected::NotFound => Err(AppError::PauseNotFound(id)),
    }
}

pub fn handle(action: &PauseAction, cfg: &Config, json: bool) -> AppResult<()> {
    match action {
        PauseAction::Add {
            block_id,
            start,
            end,
        } => {
            let create = PauseCreate::new(start.clone(), optional_timestamp(end)?, *block_id);
            create.validate()?;

            let mut pool = open_store(cfg)?;
            let pause = PauseLogic::add(&mut pool, &create)?;

            audit(
                &pool,
                "add",
                &format!("pause {}", pause.id),
                &format!("Pause added to block {}", pause.block_id),
            );
            print_pause(&pause, json)?;
        }

        PauseAction::Get { id } => {
            let mut pool = open_store(cfg)?;
            let pause = PauseLogic::get(&mut pool, *id)?;
            print_pause(&pause, json)?;
        }

        PauseAction::List { block_id } => {
            let mut pool = open_store(cfg)?;
            let pauses = PauseLogic::by_block(&mut pool, *block_id)?;
            print_pauses(&pauses, json)?;
        }

        PauseAction::Update { id, start, end } => {
            // block_id is never written by an update
            let pause = Pause {
                id: *id,
                start: start.clone(),
                end: optional_timestamp(end)?,
                block_id: 0,
            };
            pause.validate()?;

            let mut pool = open_store(cfg)?;
            require_found(PauseLogic::update(&mut pool, &pause)?, *id)?;

            audit(&pool, "update", &format!("pause {}", id), "Pause replaced");
            if !json {
                success(format!("Pause #{} updated.", id));
            }
        }

        PauseAction::SetStart { id, start } => {
            ensure_rfc3339(start)?;

            let mut pool = open_store(cfg)?;
            require_found(PauseLogic::update_start(&mut pool, *id, start)?, *id)?;

            audit(&pool, "update", &format!("pause {}", id), &format!("start = {}", start));
            if !json {
                success(format!("Pause #{} start set to {}.", id, start));
            }
        }

        PauseAction::SetEnd { id, end } => {
            ensure_rfc3339(end)?;

            let mut pool = open_store(cfg)?;
            require_found(PauseLogic::update_end(&mut pool, *id, end)?, *id)?;

            audit(&pool, "update", &format!("pause {}", id), &format!("end = {}", end));
            if !json {
                success(format!("Pause #{} end set to {}.", id, end));
            }
        }

        PauseAction::Del { id } => {
            let mut pool = open_store(cfg)?;
            require_found(PauseLogic::delete(&mut pool, *id)?, *id)?;

            audit(&pool, "del", &format!("pause {}", id), "Pause deleted");
            if !json {
                success(format!("Pause #{} deleted.", id));
            }
        }
    }

    Ok(())
}
