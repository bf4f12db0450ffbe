//! work_hours library root.
//! Exposes the store (db + core), the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Block { action } => cli::commands::block::handle(action, cfg, cli.json),
        Commands::Pause { action } => cli::commands::pause::handle(action, cfg, cli.json),
        Commands::Start { .. }
        | Commands::End
        | Commands::PauseStart
        | Commands::PauseEnd
        | Commands::Current
        | Commands::Status => cli::commands::session::handle(&cli.command, cfg, cli.json),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command line override of the DB path
    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_database(Some(custom_db))
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}
