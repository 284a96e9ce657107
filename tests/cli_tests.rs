use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db, init_db_with_full_day, punch, rpc, setup_test_db, temp_out, test_home};

#[test]
fn test_punch_prints_daily_record() {
    let db_path = setup_test_db("cli_punch");
    init_db(&db_path);

    rpc()
        .args(["--db", &db_path, "punch", "2022-05-17T08:00:00"])
        .assert()
        .success()
        .stdout(contains("2022-05-17"))
        .stdout(contains("08:00:00"));

    rpc()
        .args(["--db", &db_path, "punch", "2022-05-17T12:00:00", "--json"])
        .assert()
        .success()
        .stdout(contains("\"day\": \"2022-05-17\""))
        .stdout(contains("\"12:00:00\""));
}

#[test]
fn test_weekend_punch_fails() {
    let db_path = setup_test_db("cli_weekend");
    init_db(&db_path);

    rpc()
        .args(["--db", &db_path, "punch", "2022-04-16T08:00:00"])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("weekends not permitted as work day"));
}

#[test]
fn test_invalid_timestamp_fails() {
    let db_path = setup_test_db("cli_invalid");
    init_db(&db_path);

    rpc()
        .args(["--db", &db_path, "punch", "2022-04-17"])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("invalid date-time format"));
}

#[test]
fn test_fifth_punch_and_duplicate_fail() {
    let db_path = setup_test_db("cli_fifth");
    init_db_with_full_day(&db_path);

    rpc()
        .args(["--db", &db_path, "punch", "2022-05-17T19:00:00"])
        .assert()
        .failure()
        .stderr(contains("only 4 punches per day allowed"));

    punch(&db_path, "2022-05-18T08:00:00");
    rpc()
        .args(["--db", &db_path, "punch", "2022-05-18T08:00:00"])
        .assert()
        .failure()
        .stderr(contains("punch already registered"));
}

#[test]
fn test_report_json() {
    let db_path = setup_test_db("cli_report_json");
    init_db_with_full_day(&db_path);

    rpc()
        .args(["--db", &db_path, "report", "2022-05", "--json"])
        .assert()
        .success()
        .stdout(contains("\"worked\": \"PT9H\""))
        .stdout(contains("\"excess\": \"PT0S\""))
        .stdout(contains("\"owed\": \"PT167H\""));
}

#[test]
fn test_report_table() {
    let db_path = setup_test_db("cli_report_table");
    init_db_with_full_day(&db_path);

    rpc()
        .args(["--db", &db_path, "report", "2022-05"])
        .assert()
        .success()
        .stdout(contains("Timesheet 2022-05"))
        .stdout(contains("2022-05-17"))
        .stdout(contains("Worked: 09h 00m"))
        .stdout(contains("167h 00m"));
}

#[test]
fn test_report_without_records_fails() {
    let db_path = setup_test_db("cli_report_empty");
    init_db(&db_path);

    rpc()
        .args(["--db", &db_path, "report", "2023-01"])
        .assert()
        .failure()
        .stderr(contains("no records found for the specified month"));
}

#[test]
fn test_report_export_csv() {
    let db_path = setup_test_db("cli_export_csv");
    let out = temp_out("cli_export_csv", "csv");
    init_db_with_full_day(&db_path);

    rpc()
        .args([
            "--db", &db_path, "report", "2022-05", "--export", &out, "--format", "csv", "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("export file");
    assert!(content.starts_with("month,day,punches,entries,worked"));
    assert!(content.contains("2022-05,2022-05-17,4,08:00:00 12:00:00 13:00:00 18:00:00,PT9H"));
}

#[test]
fn test_report_export_json() {
    let db_path = setup_test_db("cli_export_json");
    let out = temp_out("cli_export_json", "json");
    init_db_with_full_day(&db_path);

    rpc()
        .args([
            "--db", &db_path, "report", "2022-05", "--export", &out, "--format", "json",
        ])
        .assert()
        .success();

    let rows: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("export file")).unwrap();
    assert_eq!(rows[0]["day"], "2022-05-17");
    assert_eq!(rows[0]["worked"], "PT9H");
}

#[test]
fn test_list_records_and_moments() {
    let db_path = setup_test_db("cli_list");
    init_db_with_full_day(&db_path);
    punch(&db_path, "2022-05-18T08:00:00");

    rpc()
        .args(["--db", &db_path, "list", "--period", "2022-05"])
        .assert()
        .success()
        .stdout(contains("2022-05-17"))
        .stdout(contains("2022-05-18"))
        .stdout(contains("09h 00m"));

    rpc()
        .args(["--db", &db_path, "list", "--period", "2022-05-18"])
        .assert()
        .success()
        .stdout(contains("2022-05-18"))
        .stdout(contains("2022-05-17").not());

    // Rejected punches stay in the audit trail.
    rpc()
        .args(["--db", &db_path, "punch", "2022-05-21T08:00:00"])
        .assert()
        .failure();

    rpc()
        .args(["--db", &db_path, "list", "--moments"])
        .assert()
        .success()
        .stdout(contains("2022-05-21T08:00:00"));
}

#[test]
fn test_log_and_db_info() {
    let db_path = setup_test_db("cli_log");
    init_db_with_full_day(&db_path);

    rpc()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("punch"));

    rpc()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Daily records"))
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_punch_json_on_fresh_database_is_pure_json() {
    // No `init`: the schema is created on the fly and must not leak into stdout.
    let db_path = setup_test_db("cli_fresh_json");

    let out = rpc()
        .args(["--db", &db_path, "punch", "2022-05-17T08:00:00", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let record: serde_json::Value =
        serde_json::from_slice(&out).expect("stdout is a single JSON document");
    assert_eq!(record["day"], "2022-05-17");
    assert_eq!(record["entries"][0], "08:00:00");
}

#[test]
fn test_report_json_with_export_is_pure_json() {
    let db_path = setup_test_db("cli_fresh_report_json");
    let file = temp_out("cli_fresh_report_json", "csv");
    for ts in [
        "2022-05-17T08:00:00",
        "2022-05-17T12:00:00",
        "2022-05-17T13:00:00",
        "2022-05-17T18:00:00",
    ] {
        punch(&db_path, ts);
    }

    let out = rpc()
        .args([
            "--db", &db_path, "report", "2022-05", "--json", "--export", &file, "--force",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value =
        serde_json::from_slice(&out).expect("stdout is a single JSON document");
    assert_eq!(report["worked"], "PT9H");
    assert!(fs::read_to_string(&file).unwrap().starts_with("month,day"));
}

#[test]
fn test_relative_db_is_shared_by_init_and_punch() {
    let name = "cli_relative_db.sqlite";
    let in_home = test_home().join(name);
    fs::remove_file(&in_home).ok();

    // Run from a directory of its own so a stray file would be visible.
    let cwd = std::env::temp_dir().join("rpunchclock_relative_cwd");
    fs::create_dir_all(&cwd).unwrap();
    fs::remove_file(cwd.join(name)).ok();

    rpc()
        .current_dir(&cwd)
        .args(["--db", name, "--test", "init"])
        .assert()
        .success();

    rpc()
        .current_dir(&cwd)
        .args(["--db", name, "punch", "2022-05-17T08:00:00"])
        .assert()
        .success();

    rpc()
        .current_dir(&cwd)
        .args(["--db", name, "list", "--period", "2022-05"])
        .assert()
        .success()
        .stdout(contains("2022-05-17"))
        .stdout(contains("08:00:00"));

    assert!(in_home.exists());
    assert!(!cwd.join(name).exists());
}
