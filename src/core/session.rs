//! The work session state machine.
//!
//! ```text
//! Idle --start_block--> BlockActive --start_pause--> PauseActive
//!  ^                      |    ^                          |
//!  +------end_block-------+    +---------end_pause--------+
//! ```
//!
//! The state lives in the `current` row. Each transition reads it and
//! writes it back inside one IMMEDIATE transaction, which is what keeps
//! concurrent callers from both starting a block.

use crate::db::current::{load_current, set_current_block, set_current_pause};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult, Conflict};
use crate::models::{Block, Current, Pause, SessionState};
use crate::utils::datetime::now_rfc3339;

pub struct SessionLogic;

impl SessionLogic {
    pub fn current(pool: &mut DbPool) -> AppResult<Current> {
        load_current(&pool.conn)
    }

    pub fn state(pool: &mut DbPool) -> AppResult<SessionState> {
        Ok(Self::current(pool)?.state())
    }

    /// Idle → BlockActive: open a block stamped with the current time.
    pub fn start_block(pool: &mut DbPool, homeoffice: bool) -> AppResult<Block> {
        let tx = pool.begin_write()?;

        if load_current(&tx)?.block_id.is_some() {
            return Err(Conflict::BlockAlreadyActive.into());
        }

        let id = queries::insert_block(&tx, &now_rfc3339(), None, homeoffice)?;
        set_current_block(&tx, Some(id))?;
        // a leftover pause pointer without a block is meaningless
        set_current_pause(&tx, None)?;

        let block = queries::load_block(&tx, id)?.ok_or(AppError::BlockNotFound(id))?;
        tx.commit()?;

        Ok(block)
    }

    /// BlockActive → Idle: stamp the end of the current block.
    pub fn end_block(pool: &mut DbPool) -> AppResult<Block> {
        let tx = pool.begin_write()?;

        let block_id = match load_current(&tx)?.state() {
            SessionState::Idle => return Err(Conflict::NoBlockActive.into()),
            SessionState::PauseActive { .. } => return Err(Conflict::PauseNotEnded.into()),
            SessionState::BlockActive { block_id } => block_id,
        };

        let rows = queries::update_block_end(&tx, block_id, &now_rfc3339())?;
        set_current_block(&tx, None)?;

        if rows == 0 {
            // pointer to a vanished row: release it so a new block can start
            tx.commit()?;
            return Err(AppError::BlockNotFound(block_id));
        }

        let block = queries::load_block(&tx, block_id)?.ok_or(AppError::BlockNotFound(block_id))?;
        tx.commit()?;

        Ok(block)
    }

    /// BlockActive → PauseActive: open a pause inside the current block.
    pub fn start_pause(pool: &mut DbPool) -> AppResult<Pause> {
        let tx = pool.begin_write()?;

        let block_id = match load_current(&tx)?.state() {
            SessionState::Idle => return Err(Conflict::NoBlockActive.into()),
            SessionState::PauseActive { .. } => return Err(Conflict::PauseAlreadyActive.into()),
            SessionState::BlockActive { block_id } => block_id,
        };

        if !queries::block_exists(&tx, block_id)? {
            set_current_block(&tx, None)?;
            tx.commit()?;
            return Err(AppError::BlockNotFound(block_id));
        }

        let start = now_rfc3339();
        let id = queries::insert_pause(&tx, &start, None, block_id)?;
        set_current_pause(&tx, Some(id))?;
        tx.commit()?;

        Ok(Pause {
            id,
            start,
            end: None,
            block_id,
        })
    }

    /// PauseActive → BlockActive: stamp the end of the current pause.
    pub fn end_pause(pool: &mut DbPool) -> AppResult<Pause> {
        let tx = pool.begin_write()?;

        let Some(pause_id) = load_current(&tx)?.pause_id else {
            return Err(Conflict::NoPauseActive.into());
        };

        let rows = queries::update_pause_end(&tx, pause_id, &now_rfc3339())?;
        set_current_pause(&tx, None)?;

        if rows == 0 {
            tx.commit()?;
            return Err(AppError::PauseNotFound(pause_id));
        }

        let pause = queries::load_pause(&tx, pause_id)?.ok_or(AppError::PauseNotFound(pause_id))?;
        tx.commit()?;

        Ok(pause)
    }

    /// The block the session is in, with its pauses. Idle is reported as
    /// `NoActiveBlock` rather than a lookup of the sentinel id.
    pub fn current_block(pool: &mut DbPool) -> AppResult<Block> {
        let tx = pool.begin_read()?;

        let Some(block_id) = load_current(&tx)?.block_id else {
            return Err(AppError::NoActiveBlock);
        };

        let block = queries::load_block(&tx, block_id)?;
        tx.commit()?;

        block.ok_or(AppError::BlockNotFound(block_id))
    }
}
