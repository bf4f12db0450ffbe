//! start / end / pause-start / pause-end / current / status

use crate::cli::commands::{audit, open_store};
use crate::cli::output::{print_block, print_pause, print_status};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::SessionLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config, json: bool) -> AppResult<()> {
    let mut pool = open_store(cfg)?;

    match cmd {
        Commands::Start { homeoffice, office } => {
            let flag = if *homeoffice {
                true
            } else if *office {
                false
            } else {
                cfg.default_homeoffice
            };

            let block = SessionLogic::start_block(&mut pool, flag)?;
            audit(&pool, "start", &format!("block {}", block.id), "Block started");
            if !json {
                success(format!("Block #{} started at {}.", block.id, block.start));
            }
            print_block(&block, json)?;
        }

        Commands::End => {
            let block = SessionLogic::end_block(&mut pool)?;
            audit(&pool, "end", &format!("block {}", block.id), "Block ended");
            if !json {
                success(format!("Block #{} ended.", block.id));
            }
            print_block(&block, json)?;
        }

        Commands::PauseStart => {
            let pause = SessionLogic::start_pause(&mut pool)?;
            audit(&pool, "pause-start", &format!("pause {}", pause.id), "Pause started");
            if !json {
                success(format!("Pause #{} started at {}.", pause.id, pause.start));
            }
            print_pause(&pause, json)?;
        }

        Commands::PauseEnd => {
            let pause = SessionLogic::end_pause(&mut pool)?;
            audit(&pool, "pause-end", &format!("pause {}", pause.id), "Pause ended");
            if !json {
                success(format!("Pause #{} ended.", pause.id));
            }
            print_pause(&pause, json)?;
        }

        Commands::Current => {
            let block = SessionLogic::current_block(&mut pool)?;
            print_block(&block, json)?;
        }

        Commands::Status => {
            let current = SessionLogic::current(&mut pool)?;
            print_status(&current, json)?;
        }

        _ => {}
    }

    Ok(())
}
