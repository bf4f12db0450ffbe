use crate::errors::AppResult;
use crate::utils::datetime::{ensure_optional_rfc3339, ensure_rfc3339};
use serde::{Deserialize, Serialize};

/// A break inside a block, as stored in the `pause` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pause {
    pub id: i64,
    pub start: String,
    pub end: Option<String>,
    #[serde(rename = "blockID")]
    pub block_id: i64, // ⇔ pause.block_id (FK → block.id, ON DELETE CASCADE)
}

impl Pause {
    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    pub fn validate(&self) -> AppResult<()> {
        ensure_rfc3339(&self.start)?;
        ensure_optional_rfc3339(self.end.as_deref())
    }
}

/// Input for creating a pause against an existing block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseCreate {
    pub start: String,
    pub end: Option<String>,
    #[serde(rename = "blockID")]
    pub block_id: i64,
}

impl PauseCreate {
    pub fn new(start: impl Into<String>, end: Option<String>, block_id: i64) -> Self {
        Self {
            start: start.into(),
            end,
            block_id,
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        ensure_rfc3339(&self.start)?;
        ensure_optional_rfc3339(self.end.as_deref())
    }
}

/// Pause without its owner, used when a block is created together with its pauses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseSpan {
    pub start: String,
    pub end: Option<String>,
}

impl PauseSpan {
    pub fn attach_to(&self, block_id: i64) -> PauseCreate {
        PauseCreate {
            start: self.start.clone(),
            end: self.end.clone(),
            block_id,
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        ensure_rfc3339(&self.start)?;
        ensure_optional_rfc3339(self.end.as_deref())
    }
}
