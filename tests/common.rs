#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;
use work_hours::db::initialize::init_db;
use work_hours::db::pool::DbPool;
use work_hours::models::{BlockCreate, PauseCreate};

pub const B_START: &str = "2023-05-09T07:00:00Z";
pub const B_END: &str = "2023-05-09T15:30:00Z";
pub const B_START_UPDATED: &str = "2023-05-09T08:30:00Z";
pub const B_END_UPDATED: &str = "2023-05-09T17:00:00Z";
pub const P_START: &str = "2023-05-09T12:00:00Z";
pub const P_END: &str = "2023-05-09T12:30:00Z";
pub const P_START_UPDATED: &str = "2023-05-09T13:00:00Z";
pub const P_END_UPDATED: &str = "2023-05-09T13:30:00Z";

pub fn wh() -> Command {
    cargo_bin_cmd!("work_hours")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_work_hours.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh in-memory store with the schema in place.
pub fn store() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init db");
    pool
}

/// File-backed store, for tests that need several connections.
pub fn file_store(db_path: &str) -> DbPool {
    let pool = DbPool::new(db_path).expect("open db");
    init_db(&pool.conn).expect("init db");
    pool
}

/// Init a database through the CLI without touching the user's config.
pub fn init_cli_db(db_path: &str) {
    wh().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn test_block_create() -> BlockCreate {
    test_block_create_without_pause().with_pause(P_START, Some(P_END.to_string()))
}

pub fn test_block_create_without_pause() -> BlockCreate {
    BlockCreate::new(B_START, Some(B_END.to_string()), false)
}

pub fn test_pause_create() -> PauseCreate {
    PauseCreate::new(P_START, Some(P_END.to_string()), 1)
}

/// Three closed blocks on the 9th of May, June and July 2023.
pub fn range_test_blocks() -> Vec<BlockCreate> {
    vec![
        BlockCreate::new(
            "2023-05-09T07:00:00Z",
            Some("2023-05-09T15:30:00Z".to_string()),
            false,
        ),
        BlockCreate::new(
            "2023-06-09T07:00:00Z",
            Some("2023-06-09T15:30:00Z".to_string()),
            false,
        ),
        BlockCreate::new(
            "2023-07-09T07:00:00Z",
            Some("2023-07-09T15:30:00Z".to_string()),
            true,
        ),
    ]
}
