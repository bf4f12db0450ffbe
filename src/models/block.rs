use super::pause::{Pause, PauseSpan};
use crate::errors::AppResult;
use crate::utils::datetime::{ensure_optional_rfc3339, ensure_rfc3339};
use serde::{Deserialize, Serialize};

/// A work interval, as stored in the `block` table plus its pauses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: i64,
    pub start: String,       // ⇔ block.start (TEXT, RFC 3339)
    pub end: Option<String>, // ⇔ block.end (NULL while the block is open)
    #[serde(default)]
    pub homeoffice: bool, // ⇔ block.homeoffice (INTEGER 0/1)
    #[serde(default)]
    pub pauses: Vec<Pause>,
}

impl Block {
    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    pub fn is_closed(&self) -> bool {
        !self.is_open()
    }

    /// Check every timestamp of the block and of its pauses.
    pub fn validate(&self) -> AppResult<()> {
        ensure_rfc3339(&self.start)?;
        ensure_optional_rfc3339(self.end.as_deref())?;
        for p in &self.pauses {
            p.validate()?;
        }
        Ok(())
    }
}

/// Input for creating a block, optionally with its pauses (backfill).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockCreate {
    pub start: String,
    pub end: Option<String>,
    #[serde(default)]
    pub homeoffice: bool,
    #[serde(default)]
    pub pauses: Vec<PauseSpan>,
}

impl BlockCreate {
    pub fn new(start: impl Into<String>, end: Option<String>, homeoffice: bool) -> Self {
        Self {
            start: start.into(),
            end,
            homeoffice,
            pauses: Vec::new(),
        }
    }

    pub fn with_pause(mut self, start: impl Into<String>, end: Option<String>) -> Self {
        self.pauses.push(PauseSpan {
            start: start.into(),
            end,
        });
        self
    }

    pub fn validate(&self) -> AppResult<()> {
        ensure_rfc3339(&self.start)?;
        ensure_optional_rfc3339(self.end.as_deref())?;
        for p in &self.pauses {
            p.validate()?;
        }
        Ok(())
    }
}
