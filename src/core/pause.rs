//! Pause operations of the store.

use crate::db::current::{load_current, set_current_pause};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::{Affected, Pause, PauseCreate};

pub struct PauseLogic;

impl PauseLogic {
    /// Create a pause; the referenced block must exist.
    pub fn add(pool: &mut DbPool, pause: &PauseCreate) -> AppResult<Pause> {
        let end = pause.end.clone().filter(|e| !e.is_empty());

        let tx = pool.begin_write()?;
        if !queries::block_exists(&tx, pause.block_id)? {
            return Err(AppError::MissingBlock(pause.block_id));
        }

        let id = queries::insert_pause(&tx, &pause.start, end.as_deref(), pause.block_id)
            .map_err(|e| referential(e, pause.block_id))?;
        tx.commit()?;

        Ok(Pause {
            id,
            start: pause.start.clone(),
            end,
            block_id: pause.block_id,
        })
    }

    pub fn get(pool: &mut DbPool, id: i64) -> AppResult<Pause> {
        queries::load_pause(&pool.conn, id)?.ok_or(AppError::PauseNotFound(id))
    }

    /// Pauses of a block in creation order. Fails if the block does not exist.
    pub fn by_block(pool: &mut DbPool, block_id: i64) -> AppResult<Vec<Pause>> {
        let tx = pool.begin_read()?;
        if !queries::block_exists(&tx, block_id)? {
            return Err(AppError::BlockNotFound(block_id));
        }
        let pauses = queries::load_pauses_by_block(&tx, block_id)?;
        tx.commit()?;
        Ok(pauses)
    }

    /// Replace start and end of `pause.id`. The owning block is not changed.
    pub fn update(pool: &mut DbPool, pause: &Pause) -> AppResult<Affected> {
        let rows = queries::update_pause(&pool.conn, pause)?;
        Ok(Affected::from_rows(rows))
    }

    pub fn update_start(pool: &mut DbPool, id: i64, start: &str) -> AppResult<Affected> {
        let rows = queries::update_pause_start(&pool.conn, id, start)?;
        Ok(Affected::from_rows(rows))
    }

    pub fn update_end(pool: &mut DbPool, id: i64, end: &str) -> AppResult<Affected> {
        let rows = queries::update_pause_end(&pool.conn, id, end)?;
        Ok(Affected::from_rows(rows))
    }

    /// Delete a pause, releasing the current pause pointer if it pointed here.
    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<Affected> {
        let tx = pool.begin_write()?;

        if load_current(&tx)?.pause_id == Some(id) {
            set_current_pause(&tx, None)?;
        }

        let rows = queries::delete_pause(&tx, id)?;
        tx.commit()?;

        Ok(Affected::from_rows(rows))
    }
}

/// A foreign key violation on insert means the block vanished.
fn referential(err: rusqlite::Error, block_id: i64) -> AppError {
    if let rusqlite::Error::SqliteFailure(e, _) = &err
        && e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY
    {
        return AppError::MissingBlock(block_id);
    }
    AppError::Db(err)
}
