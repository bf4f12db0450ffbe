//! The `current` singleton: which block and pause are in progress.

use serde::Serialize;

/// Sentinel stored in the `current` table for "nothing active".
pub const NONE_ID: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Current {
    pub block_id: Option<i64>,
    pub pause_id: Option<i64>,
}

/// Phase of the work session derived from `Current`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    BlockActive { block_id: i64 },
    PauseActive { block_id: i64, pause_id: i64 },
}

impl Current {
    /// Build from the raw column values, mapping the -1 sentinel to `None`.
    pub fn from_raw(block_id: i64, pause_id: i64) -> Self {
        Self {
            block_id: from_sentinel(block_id),
            pause_id: from_sentinel(pause_id),
        }
    }

    pub fn raw_block_id(&self) -> i64 {
        self.block_id.unwrap_or(NONE_ID)
    }

    pub fn raw_pause_id(&self) -> i64 {
        self.pause_id.unwrap_or(NONE_ID)
    }

    /// A pause pointer without a block pointer is not a valid session,
    /// so it reads as `Idle`.
    pub fn state(&self) -> SessionState {
        match (self.block_id, self.pause_id) {
            (Some(block_id), Some(pause_id)) => SessionState::PauseActive { block_id, pause_id },
            (Some(block_id), None) => SessionState::BlockActive { block_id },
            (None, _) => SessionState::Idle,
        }
    }
}

fn from_sentinel(id: i64) -> Option<i64> {
    if id == NONE_ID { None } else { Some(id) }
}
