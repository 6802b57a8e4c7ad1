mod common;
use common::{balance, init_db, run_json, rwl, setup_test_db};
use predicates::str::contains;

#[test]
fn test_piano_goal_met_on_first_session() {
    let db_path = setup_test_db("piano_goal_first");
    init_db(&db_path);

    let out = run_json(&db_path, &["piano", "2026-02-02", "150"]);
    assert_eq!(out["awarded"], true);
    assert_eq!(out["weekMinutes"], 150);

    let show = run_json(&db_path, &["show"]);
    assert_eq!(show["balance"], 50);
    assert_eq!(show["weeklyAwards"].as_array().unwrap().len(), 1);
    assert_eq!(show["weeklyAwards"][0]["weekStart"], "2026-02-02");

    let txs = show["transactions"].as_array().unwrap();
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0]["type"], "piano");
    assert_eq!(txs[0]["amount"], 50);
    assert_eq!(txs[0]["description"], "Weekly piano goal met! (150 min)");
}

#[test]
fn test_piano_second_session_same_week_not_awarded() {
    let db_path = setup_test_db("piano_second_session");
    init_db(&db_path);

    run_json(&db_path, &["piano", "2026-02-02", "150"]);
    let out = run_json(&db_path, &["piano", "2026-02-05", "30"]);

    assert_eq!(out["awarded"], false);
    assert_eq!(out["weekMinutes"], 180);
    assert_eq!(balance(&db_path), 50);
}

#[test]
fn test_piano_accumulates_across_the_week() {
    let db_path = setup_test_db("piano_accumulate");
    init_db(&db_path);

    let first = run_json(&db_path, &["piano", "2026-02-03", "100"]);
    assert_eq!(first["awarded"], false);
    assert_eq!(first["weekMinutes"], 100);

    // Sunday closes the same ISO week
    let second = run_json(&db_path, &["piano", "2026-02-08", "50"]);
    assert_eq!(second["awarded"], true);
    assert_eq!(second["weekMinutes"], 150);
}

#[test]
fn test_piano_next_week_starts_from_zero() {
    let db_path = setup_test_db("piano_next_week");
    init_db(&db_path);

    run_json(&db_path, &["piano", "2026-02-08", "149"]);
    let out = run_json(&db_path, &["piano", "2026-02-09", "10"]);

    assert_eq!(out["awarded"], false);
    assert_eq!(out["weekMinutes"], 10);
    assert_eq!(balance(&db_path), 0);
}

#[test]
fn test_piano_rejects_non_positive_minutes() {
    let db_path = setup_test_db("piano_invalid");
    init_db(&db_path);

    rwl()
        .args(["--db", &db_path, "piano", "2026-02-02", "0"])
        .assert()
        .failure()
        .stderr(contains("Invalid input"));

    rwl()
        .args(["--db", &db_path, "piano", "2026-02-02", "-10"])
        .assert()
        .failure();

    let show = run_json(&db_path, &["show"]);
    assert!(show["pianoSessions"].as_array().unwrap().is_empty());
}

#[test]
fn test_piano_rejects_bad_date() {
    let db_path = setup_test_db("piano_bad_date");
    init_db(&db_path);

    rwl()
        .args(["--db", &db_path, "piano", "2026-02-30", "30"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_week_status_reports_progress() {
    let db_path = setup_test_db("piano_week_status");
    init_db(&db_path);

    run_json(&db_path, &["piano", "2026-02-04", "90"]);
    let week = run_json(&db_path, &["week", "2026-02-07"]);

    assert_eq!(week["weekStart"], "2026-02-02");
    assert_eq!(week["weekEnd"], "2026-02-08");
    assert_eq!(week["minutes"], 90);
    assert_eq!(week["goal"], 150);
    assert_eq!(week["remaining"], 60);
    assert_eq!(week["awarded"], false);
}
