use clap::{Parser, Subcommand};

/// Command-line interface definition for work_hours
/// CLI application to track work blocks and pauses with SQLite
#[derive(Parser)]
#[command(
    name = "work_hours",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track work blocks and the pauses inside them, one active session at a time",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Print results as JSON
    #[arg(global = true, long = "json")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },

    /// Manage the database (integrity checks, etc.)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Store the backup as a .zip archive")]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file")]
        force: bool,
    },

    /// Create, inspect, edit or delete work blocks
    Block {
        #[command(subcommand)]
        action: BlockAction,
    },

    /// Create, inspect, edit or delete pauses
    Pause {
        #[command(subcommand)]
        action: PauseAction,
    },

    /// Start a new block now
    Start {
        #[arg(long, conflicts_with = "office", help = "Mark the block as home office")]
        homeoffice: bool,

        #[arg(long, help = "Mark the block as office work")]
        office: bool,
    },

    /// End the current block now
    End,

    /// Start a pause in the current block now
    PauseStart,

    /// End the current pause now
    PauseEnd,

    /// Show the current block with its pauses
    Current,

    /// Show whether a block or pause is active
    Status,
}

#[derive(Subcommand)]
pub enum BlockAction {
    /// Add a complete block (backfill)
    Add {
        #[arg(long, help = "Start (RFC 3339, e.g. 2023-05-09T07:00:00Z)")]
        start: String,

        #[arg(long, help = "End (RFC 3339); omit for an open block")]
        end: Option<String>,

        #[arg(long)]
        homeoffice: bool,

        #[arg(
            long = "pause",
            value_name = "START,END",
            help = "Pause inside the block; repeat for several"
        )]
        pauses: Vec<String>,
    },

    /// Show one block
    Get { id: i64 },

    /// List blocks, optionally filtered by day bounds
    List {
        #[arg(long, help = "Only blocks starting after this day")]
        after: Option<String>,

        #[arg(long, help = "Only blocks ending before this day")]
        before: Option<String>,
    },

    /// Replace start, end and homeoffice of a block
    Update {
        id: i64,

        #[arg(long)]
        start: String,

        #[arg(long)]
        end: Option<String>,

        #[arg(long)]
        homeoffice: bool,
    },

    /// Change the start of a block
    SetStart { id: i64, start: String },

    /// Change the end of a block
    SetEnd { id: i64, end: String },

    /// Change the homeoffice flag of a block
    SetHomeoffice {
        id: i64,

        #[arg(
            action = clap::ArgAction::Set,
            value_parser = clap::builder::BoolishValueParser::new()
        )]
        homeoffice: bool,
    },

    /// Delete a block and its pauses
    Del { id: i64 },
}

#[derive(Subcommand)]
pub enum PauseAction {
    /// Add a pause to an existing block
    Add {
        #[arg(long = "block")]
        block_id: i64,

        #[arg(long)]
        start: String,

        #[arg(long)]
        end: Option<String>,
    },

    /// Show one pause
    Get { id: i64 },

    /// List the pauses of a block
    List {
        #[arg(long = "block")]
        block_id: i64,
    },

    /// Replace start and end of a pause
    Update {
        id: i64,

        #[arg(long)]
        start: String,

        #[arg(long)]
        end: Option<String>,
    },

    /// Change the start of a pause
    SetStart { id: i64, start: String },

    /// Change the end of a pause
    SetEnd { id: i64, end: String },

    /// Delete a pause
    Del { id: i64 },
}
