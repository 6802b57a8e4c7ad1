mod common;
use common::{balance, init_db, run_json, setup_test_db};

#[test]
fn test_incident_without_note() {
    let db_path = setup_test_db("incident_plain");
    init_db(&db_path);

    let out = run_json(&db_path, &["incident", "2026-02-04"]);
    assert_eq!(out["success"], true);

    let show = run_json(&db_path, &["show"]);
    assert_eq!(show["balance"], -50);
    assert_eq!(show["transactions"][0]["type"], "incident");
    assert_eq!(show["transactions"][0]["amount"], -50);
    assert_eq!(show["transactions"][0]["description"], "Crying incident");
    assert_eq!(show["incidents"][0]["note"], "");
}

#[test]
fn test_incident_with_note() {
    let db_path = setup_test_db("incident_note");
    init_db(&db_path);

    run_json(
        &db_path,
        &["incident", "2026-02-04", "--note", "  meltdown  "],
    );

    let show = run_json(&db_path, &["show"]);
    assert_eq!(show["transactions"][0]["description"], "Incident: meltdown");
    assert_eq!(show["incidents"][0]["note"], "meltdown");
}

#[test]
fn test_balance_can_go_negative() {
    let db_path = setup_test_db("incident_negative");
    init_db(&db_path);

    run_json(&db_path, &["incident", "2026-02-04"]);
    run_json(&db_path, &["incident", "2026-02-05"]);
    assert_eq!(balance(&db_path), -100);
}
