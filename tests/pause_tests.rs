mod common;

use common::*;
use work_hours::core::block::BlockLogic;
use work_hours::core::pause::PauseLogic;
use work_hours::errors::{AppError, ErrorKind};
use work_hours::models::{Affected, Pause, PauseCreate};

fn count_pauses(pool: &work_hours::db::pool::DbPool) -> i64 {
    pool.conn
        .query_row("SELECT COUNT(*) FROM pause", [], |row| row.get(0))
        .expect("count pauses")
}

#[test]
fn test_add_pause_requires_existing_block() {
    let mut pool = store();

    let err = PauseLogic::add(&mut pool, &test_pause_create()).unwrap_err();
    assert!(matches!(err, AppError::MissingBlock(1)));
    assert_eq!(err.kind(), ErrorKind::Referential);
    assert_eq!(count_pauses(&pool), 0);

    BlockLogic::add(&mut pool, &test_block_create_without_pause()).expect("add block");

    let p = PauseLogic::add(&mut pool, &test_pause_create()).expect("add pause");
    assert_eq!(p.id, 1);
    assert_eq!(p.start, P_START);
    assert_eq!(p.end.as_deref(), Some(P_END));
    assert_eq!(p.block_id, 1);
}

#[test]
fn test_get_pause_by_id() {
    let mut pool = store();

    assert!(matches!(
        PauseLogic::get(&mut pool, 1),
        Err(AppError::PauseNotFound(1))
    ));

    BlockLogic::add(&mut pool, &test_block_create()).expect("add block");
    let p = PauseLogic::get(&mut pool, 1).expect("get pause");
    assert_eq!(p.start, P_START);
    assert_eq!(p.block_id, 1);
}

#[test]
fn test_get_pauses_by_block_id() {
    let mut pool = store();

    let err = PauseLogic::by_block(&mut pool, 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    BlockLogic::add(&mut pool, &test_block_create_without_pause()).expect("add block");
    assert!(PauseLogic::by_block(&mut pool, 1).expect("list").is_empty());

    PauseLogic::add(&mut pool, &test_pause_create()).expect("add pause");
    PauseLogic::add(
        &mut pool,
        &PauseCreate::new(P_START_UPDATED, Some(P_END_UPDATED.to_string()), 1),
    )
    .expect("add pause");

    let pauses = PauseLogic::by_block(&mut pool, 1).expect("list");
    let ids: Vec<i64> = pauses.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_update_pause() {
    let mut pool = store();
    BlockLogic::add(&mut pool, &test_block_create()).expect("add block");

    let updated = Pause {
        id: 1,
        start: P_START_UPDATED.to_string(),
        end: Some(P_END_UPDATED.to_string()),
        block_id: 1,
    };
    assert_eq!(
        PauseLogic::update(&mut pool, &updated).expect("update"),
        Affected::Updated(1)
    );
    assert_eq!(PauseLogic::get(&mut pool, 1).expect("get"), updated);

    let missing = Pause { id: 5, ..updated };
    assert_eq!(
        PauseLogic::update(&mut pool, &missing).expect("update"),
        Affected::NotFound
    );
}

#[test]
fn test_update_pause_start_and_end() {
    let mut pool = store();
    BlockLogic::add(&mut pool, &test_block_create()).expect("add block");

    assert_eq!(
        PauseLogic::update_start(&mut pool, 1, P_START_UPDATED)
            .expect("update")
            .rows(),
        1
    );
    assert_eq!(
        PauseLogic::update_end(&mut pool, 1, P_END_UPDATED)
            .expect("update")
            .rows(),
        1
    );

    let p = PauseLogic::get(&mut pool, 1).expect("get");
    assert_eq!(p.start, P_START_UPDATED);
    assert_eq!(p.end.as_deref(), Some(P_END_UPDATED));

    assert_eq!(
        PauseLogic::update_start(&mut pool, 2, P_START_UPDATED).expect("update"),
        Affected::NotFound
    );
    assert_eq!(
        PauseLogic::update_end(&mut pool, 2, P_END_UPDATED).expect("update"),
        Affected::NotFound
    );
}

#[test]
fn test_delete_pause() {
    let mut pool = store();
    BlockLogic::add(&mut pool, &test_block_create()).expect("add block");

    assert_eq!(
        PauseLogic::delete(&mut pool, 1).expect("delete"),
        Affected::Updated(1)
    );
    assert!(matches!(
        PauseLogic::get(&mut pool, 1),
        Err(AppError::PauseNotFound(1))
    ));
    // the owning block survives
    assert!(BlockLogic::get(&mut pool, 1).expect("get").pauses.is_empty());

    assert_eq!(
        PauseLogic::delete(&mut pool, 1).expect("delete"),
        Affected::NotFound
    );
}

#[test]
fn test_schema_cascade_without_explicit_delete() {
    let mut pool = store();
    BlockLogic::add(&mut pool, &test_block_create()).expect("add block");

    // the foreign key alone removes the pause
    pool.conn
        .execute("DELETE FROM block WHERE id = 1", [])
        .expect("raw delete");
    assert_eq!(count_pauses(&pool), 0);
}
