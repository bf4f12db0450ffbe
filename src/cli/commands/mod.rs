pub mod backup;
pub mod block;
pub mod config;
pub mod db;
pub mod init;
pub mod log;
pub mod pause;
pub mod session;

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::datetime::ensure_rfc3339;
use std::fs;
use std::path::Path;

/// Open the configured database, making sure its directory and schema are in place.
pub(crate) fn open_store(cfg: &Config) -> AppResult<DbPool> {
    if let Some(parent) = Path::new(&cfg.database).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}

/// Record a mutating command in the audit table. Never fails the command.
pub(crate) fn audit(pool: &DbPool, operation: &str, target: &str, message: &str) {
    if let Err(e) = crate::db::log::ttlog(&pool.conn, operation, target, message) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }
}

/// Validate an optional timestamp argument, treating "" as unset.
pub(crate) fn optional_timestamp(value: &Option<String>) -> AppResult<Option<String>> {
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(v) => {
            ensure_rfc3339(v)?;
            Ok(Some(v.to_string()))
        }
    }
}
