//! SQLite connection wrapper (one connection per handle).

use rusqlite::{Connection, Result, Transaction, TransactionBehavior};
use std::path::Path;
use std::time::Duration;

/// How long a writer waits for another writer's lock before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Self::configure(conn)
    }

    /// Private in-memory database, mostly for tests.
    pub fn in_memory() -> Result<Self> {
        Self::configure(Connection::open_in_memory()?)
    }

    fn configure(conn: Connection) -> Result<Self> {
        // Cascading deletes of pauses rely on this pragma (off by default in SQLite).
        conn.pragma_update(None, "foreign_keys", true)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(Self { conn })
    }

    /// Start a write transaction that takes the database write lock up front.
    ///
    /// Every operation that reads `current` and then writes goes through
    /// here, so two racing session transitions cannot both pass their checks.
    pub fn begin_write(&mut self) -> Result<Transaction<'_>> {
        self.conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
    }

    /// Start a read transaction: a block and its pauses are read from one snapshot.
    pub fn begin_read(&mut self) -> Result<Transaction<'_>> {
        self.conn.transaction()
    }
}
