//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::fmt;
use std::io;
use thiserror::Error;

/// Lifecycle precondition that a session transition violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conflict {
    BlockAlreadyActive,
    NoBlockActive,
    PauseNotEnded,
    PauseAlreadyActive,
    NoPauseActive,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Conflict::BlockAlreadyActive => "current block already active",
            Conflict::NoBlockActive => "no current block active",
            Conflict::PauseNotEnded => "pause not ended",
            Conflict::PauseAlreadyActive => "current pause already active",
            Conflict::NoPauseActive => "no current pause active",
        };
        f.write_str(msg)
    }
}

/// Coarse classification callers use to tell failures apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    Referential,
    Validation,
    Internal,
}

impl ErrorKind {
    /// Process exit code used by the binary for this kind.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorKind::Internal => 1,
            ErrorKind::Validation => 2,
            ErrorKind::Conflict => 3,
            ErrorKind::NotFound => 4,
            ErrorKind::Referential => 5,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid datetime: {0} (expected RFC 3339, e.g. 2023-05-09T07:00:00Z)")]
    InvalidTimestamp(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("Block {0} not found")]
    BlockNotFound(i64),

    #[error("Pause {0} not found")]
    PauseNotFound(i64),

    #[error("No active block")]
    NoActiveBlock,

    // ---------------------------
    // Session state machine
    // ---------------------------
    #[error("{0}")]
    Conflict(Conflict),

    // ---------------------------
    // Referential integrity
    // ---------------------------
    #[error("Block {0} does not exist, cannot attach a pause to it")]
    MissingBlock(i64),

    #[error("Block {block_id} was created, but adding its pauses failed after {created} succeeded: {source}")]
    PauseBatch {
        block_id: i64,
        created: usize,
        #[source]
        source: Box<AppError>,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::BlockNotFound(_) | AppError::PauseNotFound(_) | AppError::NoActiveBlock => {
                ErrorKind::NotFound
            }
            AppError::Conflict(_) => ErrorKind::Conflict,
            AppError::MissingBlock(_) => ErrorKind::Referential,
            AppError::InvalidTimestamp(_) => ErrorKind::Validation,
            AppError::PauseBatch { source, .. } => source.kind(),
            AppError::Io(_)
            | AppError::Db(_)
            | AppError::Migration(_)
            | AppError::Config(_)
            | AppError::Other(_) => ErrorKind::Internal,
        }
    }
}

impl From<Conflict> for AppError {
    fn from(c: Conflict) -> Self {
        AppError::Conflict(c)
    }
}

pub type AppResult<T> = Result<T, AppError>;
