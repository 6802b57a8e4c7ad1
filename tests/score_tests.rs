mod common;
use common::{balance, init_db, run_json, rwl, setup_test_db};
use predicates::str::contains;

#[test]
fn test_score_at_threshold_is_awarded() {
    let db_path = setup_test_db("score_threshold");
    init_db(&db_path);

    let out = run_json(&db_path, &["test", "2026-02-03", "Math", "95", "100"]);
    assert_eq!(out["awarded"], true);
    assert_eq!(out["percentage"].as_f64(), Some(95.0));

    let show = run_json(&db_path, &["show"]);
    assert_eq!(show["balance"], 100);
    assert_eq!(
        show["transactions"][0]["description"],
        "Math test: 95/100 (95%)"
    );
}

#[test]
fn test_score_below_threshold_is_recorded_only() {
    let db_path = setup_test_db("score_below");
    init_db(&db_path);

    let out = run_json(&db_path, &["test", "2026-02-03", "Science", "94", "100"]);
    assert_eq!(out["awarded"], false);
    assert_eq!(out["percentage"].as_f64(), Some(94.0));

    let show = run_json(&db_path, &["show"]);
    assert_eq!(show["balance"], 0);
    assert!(show["transactions"].as_array().unwrap().is_empty());

    let tests = show["tests"].as_array().unwrap();
    assert_eq!(tests.len(), 1);
    assert_eq!(tests[0]["subject"], "Science");
    assert_eq!(tests[0]["awarded"], false);
}

#[test]
fn test_score_with_non_hundred_max() {
    let db_path = setup_test_db("score_fraction");
    init_db(&db_path);

    let out = run_json(&db_path, &["test", "2026-02-03", "History", "19", "20"]);
    assert_eq!(out["awarded"], true);
    assert_eq!(balance(&db_path), 100);
}

#[test]
fn test_score_rejects_zero_max() {
    let db_path = setup_test_db("score_zero_max");
    init_db(&db_path);

    rwl()
        .args(["--db", &db_path, "test", "2026-02-03", "Math", "10", "0"])
        .assert()
        .failure()
        .stderr(contains("Invalid input"));

    let show = run_json(&db_path, &["show"]);
    assert!(show["tests"].as_array().unwrap().is_empty());
}

#[test]
fn test_score_rejects_blank_subject() {
    let db_path = setup_test_db("score_blank_subject");
    init_db(&db_path);

    rwl()
        .args(["--db", &db_path, "test", "2026-02-03", "  ", "10", "10"])
        .assert()
        .failure();
}
