//! Block operations of the store: create (with pauses), read, update, delete.

use crate::core::pause::PauseLogic;
use crate::db::current::{load_current, reset_current, set_current_pause};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::{Affected, Block, BlockCreate, BlockRange};

pub struct BlockLogic;

impl BlockLogic {
    /// Create a block, then each of its pauses in the given order.
    ///
    /// The block row is committed before the pauses are attempted. If a
    /// pause fails, the block and the pauses created so far stay in place
    /// and the error carries the block id so the caller can clean up.
    pub fn add(pool: &mut DbPool, block: &BlockCreate) -> AppResult<Block> {
        let end = block.end.clone().filter(|e| !e.is_empty());
        let id = queries::insert_block(&pool.conn, &block.start, end.as_deref(), block.homeoffice)?;

        let mut pauses = Vec::with_capacity(block.pauses.len());
        for (created, span) in block.pauses.iter().enumerate() {
            match PauseLogic::add(pool, &span.attach_to(id)) {
                Ok(p) => pauses.push(p),
                Err(e) => {
                    return Err(AppError::PauseBatch {
                        block_id: id,
                        created,
                        source: Box::new(e),
                    });
                }
            }
        }

        Ok(Block {
            id,
            start: block.start.clone(),
            end,
            homeoffice: block.homeoffice,
            pauses,
        })
    }

    pub fn get(pool: &mut DbPool, id: i64) -> AppResult<Block> {
        let tx = pool.begin_read()?;
        let block = queries::load_block(&tx, id)?;
        tx.commit()?;
        block.ok_or(AppError::BlockNotFound(id))
    }

    pub fn list(pool: &mut DbPool, range: &BlockRange) -> AppResult<Vec<Block>> {
        let tx = pool.begin_read()?;
        let blocks = queries::load_blocks(&tx, range)?;
        tx.commit()?;
        Ok(blocks)
    }

    pub fn all(pool: &mut DbPool) -> AppResult<Vec<Block>> {
        Self::list(pool, &BlockRange::All)
    }

    pub fn after_start(pool: &mut DbPool, start: &str) -> AppResult<Vec<Block>> {
        Self::list(pool, &BlockRange::AfterStart(start.to_string()))
    }

    pub fn before_end(pool: &mut DbPool, end: &str) -> AppResult<Vec<Block>> {
        Self::list(pool, &BlockRange::BeforeEnd(end.to_string()))
    }

    pub fn within(pool: &mut DbPool, start: &str, end: &str) -> AppResult<Vec<Block>> {
        Self::list(
            pool,
            &BlockRange::Within {
                start: start.to_string(),
                end: end.to_string(),
            },
        )
    }

    /// Replace start, end and homeoffice of `block.id`. Pauses are not touched.
    pub fn update(pool: &mut DbPool, block: &Block) -> AppResult<Affected> {
        let rows = queries::update_block(&pool.conn, block)?;
        Ok(Affected::from_rows(rows))
    }

    pub fn update_start(pool: &mut DbPool, id: i64, start: &str) -> AppResult<Affected> {
        let rows = queries::update_block_start(&pool.conn, id, start)?;
        Ok(Affected::from_rows(rows))
    }

    pub fn update_end(pool: &mut DbPool, id: i64, end: &str) -> AppResult<Affected> {
        let rows = queries::update_block_end(&pool.conn, id, end)?;
        Ok(Affected::from_rows(rows))
    }

    pub fn update_homeoffice(pool: &mut DbPool, id: i64, homeoffice: bool) -> AppResult<Affected> {
        let rows = queries::update_block_homeoffice(&pool.conn, id, homeoffice)?;
        Ok(Affected::from_rows(rows))
    }

    /// Delete a block with its pauses and release the session pointers
    /// that referenced it, all in one transaction.
    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<Affected> {
        let tx = pool.begin_write()?;

        let current = load_current(&tx)?;
        if current.block_id == Some(id) {
            reset_current(&tx)?;
        } else if let Some(pause_id) = current.pause_id
            && let Some(p) = queries::load_pause(&tx, pause_id)?
            && p.block_id == id
        {
            set_current_pause(&tx, None)?;
        }

        let rows = queries::delete_block(&tx, id)?;
        tx.commit()?;

        Ok(Affected::from_rows(rows))
    }
}
