//! Library-level checks of the reward evaluator against a real SQLite file.

mod common;
use chrono::NaiveDate;
use common::setup_test_db;
use rewardlog::core::{DeleteLogic, LedgerLogic, PianoLogic, ResetLogic, RewardRules, ScoreLogic};
use rewardlog::db;
use rewardlog::db::queries::{load_transactions, load_weekly_awards};
use rewardlog::errors::AppError;
use std::sync::{Arc, Barrier};
use std::thread;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn concurrent_crossings_of_one_week_award_once() {
    let db_path = setup_test_db("eval_concurrent_week");
    db::open(&db_path).expect("init schema");

    const WORKERS: usize = 6;
    let barrier = Arc::new(Barrier::new(WORKERS));

    let handles: Vec<_> = (0..WORKERS)
        .map(|i| {
            let path = db_path.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let mut pool = db::pool::DbPool::new(&path).expect("open");
                let rules = RewardRules::default();
                let date = d("2026-02-02") + chrono::Duration::days((i % 7) as i64);
                barrier.wait();
                PianoLogic::apply(&mut pool, &rules, date, 150).expect("apply")
            })
        })
        .collect();

    let outcomes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(outcomes.iter().filter(|o| o.awarded).count(), 1);

    let mut minutes: Vec<i64> = outcomes.iter().map(|o| o.week_minutes).collect();
    minutes.sort();
    assert_eq!(minutes, vec![150, 300, 450, 600, 750, 900]);

    let mut pool = db::open(&db_path).unwrap();
    assert_eq!(load_weekly_awards(&pool.conn).unwrap().len(), 1);
    assert_eq!(LedgerLogic::balance(&mut pool).unwrap(), 50);
}

#[test]
fn award_links_to_its_transaction() {
    let db_path = setup_test_db("eval_award_link");
    let mut pool = db::open(&db_path).unwrap();
    let rules = RewardRules::default();

    let out = PianoLogic::apply(&mut pool, &rules, d("2026-02-04"), 200).unwrap();
    assert!(out.awarded);
    assert_eq!(out.week_start, d("2026-02-02"));

    let awards = load_weekly_awards(&pool.conn).unwrap();
    let txs = load_transactions(&pool.conn).unwrap();
    assert_eq!(awards[0].transaction_id, txs[0].id);
}

#[test]
fn deleting_the_award_transaction_cascades() {
    let db_path = setup_test_db("eval_award_cascade");
    let mut pool = db::open(&db_path).unwrap();
    let rules = RewardRules::default();

    PianoLogic::apply(&mut pool, &rules, d("2026-02-02"), 150).unwrap();
    let tx_id = load_transactions(&pool.conn).unwrap()[0].id;

    let res = DeleteLogic::apply(&mut pool, tx_id).unwrap();
    assert!(res.success);
    assert_eq!(res.reopened_week, Some(d("2026-02-02")));
    assert!(load_weekly_awards(&pool.conn).unwrap().is_empty());
}

#[test]
fn delete_missing_transaction_is_not_found() {
    let db_path = setup_test_db("eval_delete_missing");
    let mut pool = db::open(&db_path).unwrap();

    let err = DeleteLogic::apply(&mut pool, 42).unwrap_err();
    assert!(matches!(err, AppError::TransactionNotFound(42)));
}

#[test]
fn custom_rules_change_thresholds() {
    let db_path = setup_test_db("eval_custom_rules");
    let mut pool = db::open(&db_path).unwrap();
    let rules = RewardRules {
        piano_weekly_goal_minutes: 60,
        piano_reward: 20,
        test_threshold_percent: 80.0,
        test_reward: 30,
        incident_penalty: 10,
    };

    assert!(PianoLogic::apply(&mut pool, &rules, d("2026-02-02"), 60).unwrap().awarded);
    assert!(
        ScoreLogic::apply(&mut pool, &rules, d("2026-02-03"), "Art", 8.0, 10.0)
            .unwrap()
            .awarded
    );
    assert_eq!(LedgerLogic::balance(&mut pool).unwrap(), 50);
}

#[test]
fn invalid_input_leaves_no_trace() {
    let db_path = setup_test_db("eval_invalid_input");
    let mut pool = db::open(&db_path).unwrap();
    let rules = RewardRules::default();

    assert!(matches!(
        ScoreLogic::apply(&mut pool, &rules, d("2026-02-03"), "Math", -1.0, 10.0),
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        PianoLogic::apply(&mut pool, &rules, d("2026-02-03"), 0),
        Err(AppError::Validation(_))
    ));

    let snap = LedgerLogic::snapshot(&mut pool).unwrap();
    assert!(snap.is_empty());
}

#[test]
fn reset_then_snapshot_is_empty() {
    let db_path = setup_test_db("eval_reset");
    let mut pool = db::open(&db_path).unwrap();
    let rules = RewardRules::default();

    PianoLogic::apply(&mut pool, &rules, d("2026-02-02"), 150).unwrap();
    ScoreLogic::apply(&mut pool, &rules, d("2026-02-03"), "Math", 100.0, 100.0).unwrap();

    ResetLogic::apply(&mut pool).unwrap();

    let snap = LedgerLogic::snapshot(&mut pool).unwrap();
    assert_eq!(snap.balance, 0);
    assert!(snap.is_empty());
}

#[test]
fn non_positive_reward_rules_are_refused_before_writing() {
    let db_path = setup_test_db("eval_negative_reward");
    let mut pool = db::open(&db_path).unwrap();
    let rules = RewardRules {
        piano_reward: -50,
        test_reward: -100,
        ..RewardRules::default()
    };

    assert!(matches!(
        PianoLogic::apply(&mut pool, &rules, d("2026-02-02"), 150),
        Err(AppError::Config(_))
    ));
    assert!(matches!(
        ScoreLogic::apply(&mut pool, &rules, d("2026-02-03"), "Math", 100.0, 100.0),
        Err(AppError::Config(_))
    ));

    let snap = LedgerLogic::snapshot(&mut pool).unwrap();
    assert!(snap.is_empty());
}

#[test]
fn deleting_a_non_award_transaction_keeps_the_award() {
    let db_path = setup_test_db("eval_delete_keeps_award");
    let mut pool = db::open(&db_path).unwrap();
    let rules = RewardRules::default();

    PianoLogic::apply(&mut pool, &rules, d("2026-02-02"), 150).unwrap();
    ScoreLogic::apply(&mut pool, &rules, d("2026-02-03"), "Math", 100.0, 100.0).unwrap();

    let test_tx = load_transactions(&pool.conn)
        .unwrap()
        .into_iter()
        .find(|t| t.amount == 100)
        .unwrap();

    let res = DeleteLogic::apply(&mut pool, test_tx.id).unwrap();
    assert_eq!(res.reopened_week, None);
    assert_eq!(load_weekly_awards(&pool.conn).unwrap().len(), 1);
}

#[test]
fn concurrent_first_opens_apply_each_migration_once() {
    let db_path = setup_test_db("eval_concurrent_migrate");

    const WORKERS: usize = 4;
    let barrier = Arc::new(Barrier::new(WORKERS));

    let handles: Vec<_> = (0..WORKERS)
        .map(|_| {
            let path = db_path.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                db::open(&path).map(|_| ())
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap().expect("open and migrate");
    }

    let pool = db::open(&db_path).unwrap();
    let applied: Vec<String> = {
        let mut stmt = pool
            .conn
            .prepare("SELECT target FROM log WHERE operation = 'migration_applied'")
            .unwrap();
        stmt.query_map([], |r| r.get(0))
            .unwrap()
            .map(|r| r.unwrap())
            .collect()
    };

    let mut unique = applied.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(applied.len(), unique.len(), "a migration was recorded twice");
    assert!(db::migrate::pending_migrations(&pool.conn).unwrap().is_empty());
}
