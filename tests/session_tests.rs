mod common;

use common::*;
use std::sync::{Arc, Barrier};
use std::thread;
use work_hours::core::block::BlockLogic;
use work_hours::core::pause::PauseLogic;
use work_hours::core::session::SessionLogic;
use work_hours::db::current::{set_current_block, set_current_pause};
use work_hours::errors::{AppError, Conflict, ErrorKind};
use work_hours::models::{Current, SessionState};
use work_hours::utils::datetime::is_valid_rfc3339;

fn conflict(err: AppError) -> Conflict {
    match err {
        AppError::Conflict(c) => c,
        other => panic!("expected a conflict, got {other:?}"),
    }
}

#[test]
fn test_initial_current_is_idle() {
    let mut pool = store();

    let current = SessionLogic::current(&mut pool).expect("current");
    assert_eq!(current, Current::default());
    assert_eq!(current.raw_block_id(), -1);
    assert_eq!(current.raw_pause_id(), -1);
    assert_eq!(current.state(), SessionState::Idle);
}

#[test]
fn test_start_block_sets_current() {
    let mut pool = store();

    let b = SessionLogic::start_block(&mut pool, true).expect("start");
    assert!(b.is_open());
    assert!(b.homeoffice);
    assert!(is_valid_rfc3339(&b.start));

    assert_eq!(
        SessionLogic::state(&mut pool).expect("state"),
        SessionState::BlockActive { block_id: b.id }
    );
    assert_eq!(SessionLogic::current_block(&mut pool).expect("current"), b);
}

#[test]
fn test_start_block_twice_conflicts() {
    let mut pool = store();

    let b = SessionLogic::start_block(&mut pool, false).expect("start");
    let err = SessionLogic::start_block(&mut pool, false).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(conflict(err), Conflict::BlockAlreadyActive);
    assert_eq!(
        SessionLogic::current(&mut pool).expect("current").block_id,
        Some(b.id)
    );
    // the failed call created nothing
    assert_eq!(BlockLogic::all(&mut pool).expect("list").len(), 1);
}

#[test]
fn test_end_block_before_start() {
    let mut pool = store();

    let err = SessionLogic::end_block(&mut pool).unwrap_err();
    assert_eq!(conflict(err), Conflict::NoBlockActive);
}

#[test]
fn test_end_block_with_open_pause() {
    let mut pool = store();

    SessionLogic::start_block(&mut pool, false).expect("start");
    SessionLogic::start_pause(&mut pool).expect("pause");

    let err = SessionLogic::end_block(&mut pool).unwrap_err();
    assert_eq!(conflict(err), Conflict::PauseNotEnded);
}

#[test]
fn test_pause_transitions_need_the_right_state() {
    let mut pool = store();

    assert_eq!(
        conflict(SessionLogic::start_pause(&mut pool).unwrap_err()),
        Conflict::NoBlockActive
    );
    assert_eq!(
        conflict(SessionLogic::end_pause(&mut pool).unwrap_err()),
        Conflict::NoPauseActive
    );

    SessionLogic::start_block(&mut pool, false).expect("start");
    assert_eq!(
        conflict(SessionLogic::end_pause(&mut pool).unwrap_err()),
        Conflict::NoPauseActive
    );

    SessionLogic::start_pause(&mut pool).expect("pause");
    assert_eq!(
        conflict(SessionLogic::start_pause(&mut pool).unwrap_err()),
        Conflict::PauseAlreadyActive
    );
}

#[test]
fn test_full_session() {
    let mut pool = store();

    let block = SessionLogic::start_block(&mut pool, false).expect("start block");
    assert_eq!(
        SessionLogic::current(&mut pool).expect("current").block_id,
        Some(block.id)
    );

    let pause = SessionLogic::start_pause(&mut pool).expect("start pause");
    assert_eq!(pause.block_id, block.id);
    assert!(pause.is_open());
    assert_eq!(
        SessionLogic::state(&mut pool).expect("state"),
        SessionState::PauseActive {
            block_id: block.id,
            pause_id: pause.id
        }
    );

    assert_eq!(
        conflict(SessionLogic::end_block(&mut pool).unwrap_err()),
        Conflict::PauseNotEnded
    );

    let ended_pause = SessionLogic::end_pause(&mut pool).expect("end pause");
    assert_eq!(ended_pause.id, pause.id);
    assert!(!ended_pause.is_open());
    assert_eq!(
        SessionLogic::current(&mut pool).expect("current").pause_id,
        None
    );

    let ended_block = SessionLogic::end_block(&mut pool).expect("end block");
    assert_eq!(ended_block.id, block.id);
    assert!(ended_block.is_closed());
    assert_eq!(ended_block.pauses, vec![ended_pause]);
    assert_eq!(
        SessionLogic::current(&mut pool).expect("current"),
        Current::default()
    );

    // a new session can start right away
    let next = SessionLogic::start_block(&mut pool, true).expect("start again");
    assert_ne!(next.id, block.id);
}

#[test]
fn test_current_block_when_idle() {
    let mut pool = store();

    let err = SessionLogic::current_block(&mut pool).unwrap_err();
    assert!(matches!(err, AppError::NoActiveBlock));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_delete_current_block_resets_current() {
    let mut pool = store();

    let block = SessionLogic::start_block(&mut pool, false).expect("start");
    let pause = SessionLogic::start_pause(&mut pool).expect("pause");

    BlockLogic::delete(&mut pool, block.id).expect("delete");

    assert_eq!(
        SessionLogic::current(&mut pool).expect("current"),
        Current::default()
    );
    assert!(matches!(
        PauseLogic::get(&mut pool, pause.id),
        Err(AppError::PauseNotFound(_))
    ));

    SessionLogic::start_block(&mut pool, false).expect("start after delete");
}

#[test]
fn test_delete_other_block_keeps_current() {
    let mut pool = store();

    BlockLogic::add(&mut pool, &test_block_create()).expect("add block");
    let active = SessionLogic::start_block(&mut pool, false).expect("start");

    BlockLogic::delete(&mut pool, 1).expect("delete");

    assert_eq!(
        SessionLogic::current(&mut pool).expect("current").block_id,
        Some(active.id)
    );
}

#[test]
fn test_delete_current_pause_resets_pause_only() {
    let mut pool = store();

    let block = SessionLogic::start_block(&mut pool, false).expect("start");
    let pause = SessionLogic::start_pause(&mut pool).expect("pause");

    PauseLogic::delete(&mut pool, pause.id).expect("delete");

    let current = SessionLogic::current(&mut pool).expect("current");
    assert_eq!(current.block_id, Some(block.id));
    assert_eq!(current.pause_id, None);

    SessionLogic::end_block(&mut pool).expect("block can end now");
}

#[test]
fn test_delete_block_owning_current_pause_releases_it() {
    let mut pool = store();

    let block = SessionLogic::start_block(&mut pool, false).expect("start");
    SessionLogic::start_pause(&mut pool).expect("pause");

    // inconsistent pointers: pause set, block pointer cleared behind our back
    set_current_block(&pool.conn, None).expect("set current block");

    BlockLogic::delete(&mut pool, block.id).expect("delete");
    assert_eq!(
        SessionLogic::current(&mut pool).expect("current"),
        Current::default()
    );
}

#[test]
fn test_end_block_with_dangling_pointer_releases_it() {
    let mut pool = store();

    set_current_block(&pool.conn, Some(77)).expect("set current block");

    let err = SessionLogic::end_block(&mut pool).unwrap_err();
    assert!(matches!(err, AppError::BlockNotFound(77)));
    assert_eq!(
        SessionLogic::current(&mut pool).expect("current").block_id,
        None
    );
}

#[test]
fn test_end_pause_with_dangling_pointer_releases_it() {
    let mut pool = store();

    SessionLogic::start_block(&mut pool, false).expect("start");
    set_current_pause(&pool.conn, Some(13)).expect("set current pause");

    let err = SessionLogic::end_pause(&mut pool).unwrap_err();
    assert!(matches!(err, AppError::PauseNotFound(13)));
    assert_eq!(
        SessionLogic::current(&mut pool).expect("current").pause_id,
        None
    );
}

#[test]
fn test_concurrent_start_block_only_one_wins() {
    let db_path = setup_test_db("concurrent_start");
    drop(file_store(&db_path));

    let barrier = Arc::new(Barrier::new(4));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            let path = db_path.clone();
            thread::spawn(move || {
                let mut pool = file_store(&path);
                barrier.wait();
                SessionLogic::start_block(&mut pool, false)
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("thread panicked"))
        .collect();

    let wins = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(wins, 1);
    for r in results.into_iter().filter(|r| r.is_err()) {
        assert_eq!(conflict(r.unwrap_err()), Conflict::BlockAlreadyActive);
    }

    let mut pool = file_store(&db_path);
    assert_eq!(BlockLogic::all(&mut pool).expect("list").len(), 1);
}
