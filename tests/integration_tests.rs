mod common;
use common::{cli_add, cli_entries, init_db, setup_test_db, wh};
use predicates::prelude::*;

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates");

    wh().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_list_and_stats() {
    let db_path = setup_test_db("add_list_stats");
    init_db(&db_path);

    wh().args([
        "--db", &db_path, "add", "--date", "2025-06-01", "--client", "Acme", "--start", "9:00 AM",
        "--end", "5:30 PM", "--driving",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("8.5h worked"))
    .stdout(predicate::str::contains("10.5h total"));

    cli_add(&db_path, "2025-06-02", "Globex", "22:00", "06:00", false);

    wh().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Work Entries (2)"))
        .stdout(predicate::str::contains("Acme"))
        .stdout(predicate::str::contains("09:00 AM"))
        .stdout(predicate::str::contains("10:00 PM"));

    wh().args(["--db", &db_path, "list", "--date", "2025-06-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Work Entries (1)"))
        .stdout(predicate::str::contains("Globex"))
        .stdout(predicate::str::contains("Acme").not());

    wh().args(["--db", &db_path, "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total entries:"))
        .stdout(predicate::str::contains("16.5h"))
        .stdout(predicate::str::contains("18.5h"))
        .stdout(predicate::str::contains("Driving Required?"));
}

#[test]
fn test_add_rejects_blank_client() {
    let db_path = setup_test_db("add_blank_client");
    init_db(&db_path);

    wh().args([
        "--db", &db_path, "add", "--client", "   ", "--start", "09:00", "--end", "17:00",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Please enter a job/client name"));

    assert!(cli_entries(&db_path).is_empty());
}

#[test]
fn test_add_preview_does_not_save() {
    let db_path = setup_test_db("add_preview");
    init_db(&db_path);

    wh().args([
        "--db", &db_path, "add", "--client", "Acme", "--start", "23:00", "--end", "01:30",
        "--driving", "--preview",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("11:00 PM - 01:30 AM"))
    .stdout(predicate::str::contains("Hours Worked: 2.5h"))
    .stdout(predicate::str::contains("Total Hours:  4.5h"));

    assert!(cli_entries(&db_path).is_empty());
}

#[test]
fn test_edit_recomputes_hours() {
    let db_path = setup_test_db("edit_recompute");
    init_db(&db_path);
    cli_add(&db_path, "2025-06-01", "Acme", "09:00", "17:00", false);

    let id = cli_entries(&db_path)[0].id.clone();

    wh().args([
        "--db", &db_path, "edit", &id[..8], "--end", "18:00", "--driving",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("updated"));

    let entries = cli_entries(&db_path);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, id);
    assert_eq!(entries[0].end_time, "18:00");
    assert_eq!(entries[0].hours_worked, 9.0);
    assert_eq!(entries[0].driving_bonus_hours, 2.0);
    assert_eq!(entries[0].total_hours, 11.0);
}

#[test]
fn test_edit_unknown_id_fails() {
    let db_path = setup_test_db("edit_unknown");
    init_db(&db_path);

    wh().args(["--db", &db_path, "edit", "deadbeef", "--client", "X"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No work entry found"));
}

#[test]
fn test_del_and_clear() {
    let db_path = setup_test_db("del_clear");
    init_db(&db_path);
    cli_add(&db_path, "2025-06-01", "Acme", "09:00", "17:00", false);
    cli_add(&db_path, "2025-06-02", "Globex", "09:00", "17:00", false);
    cli_add(&db_path, "2025-06-03", "Initech", "09:00", "17:00", false);

    let victim = cli_entries(&db_path)
        .into_iter()
        .find(|e| e.job_client_name == "Globex")
        .unwrap();

    // declined at the prompt
    wh().args(["--db", &db_path, "del", &victim.id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled"));
    assert_eq!(cli_entries(&db_path).len(), 3);

    wh().args(["--db", &db_path, "del", &victim.id, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("has been deleted"));

    let left = cli_entries(&db_path);
    assert_eq!(left.len(), 2);
    assert!(left.iter().all(|e| e.id != victim.id));

    wh().args(["--db", &db_path, "clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All data cleared successfully"));
    assert!(cli_entries(&db_path).is_empty());
}

#[test]
fn test_settings_update_and_print() {
    let db_path = setup_test_db("settings_update");
    init_db(&db_path);

    wh().args(["--db", &db_path, "settings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Driving Required?"))
        .stdout(predicate::str::contains("Yes (+2h)"))
        .stdout(predicate::str::contains("12h"));

    wh().args([
        "--db",
        &db_path,
        "settings",
        "--bonus-hours",
        "-1.5",
        "--question",
        "Night shift?",
        "--time-format",
        "24h",
        "--print",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Settings saved successfully!"))
    .stdout(predicate::str::contains("bonus_hours:         -1.5"))
    .stdout(predicate::str::contains("Night shift?"))
    .stdout(predicate::str::contains("24h"));

    cli_add(&db_path, "2025-06-01", "Acme", "20:00", "23:00", true);
    let e = &cli_entries(&db_path)[0];
    assert_eq!(e.driving_bonus_hours, -1.5);
    assert_eq!(e.total_hours, 1.5);

    wh().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("20:00"))
        .stdout(predicate::str::contains("PM").not());
}

#[test]
fn test_settings_rejects_unknown_time_format() {
    let db_path = setup_test_db("settings_bad_format");
    init_db(&db_path);

    wh().args(["--db", &db_path, "settings", "--time-format", "36h"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("use 12h or 24h"));
}

#[test]
fn test_log_print_shows_operations() {
    let db_path = setup_test_db("log_print");
    init_db(&db_path);
    cli_add(&db_path, "2025-06-01", "Acme", "09:00", "17:00", false);

    wh().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Internal log"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("add"));
}

#[test]
fn test_config_print_shows_database_override() {
    let db_path = setup_test_db("config_print");

    wh().args(["--db", &db_path, "config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current configuration"))
        .stdout(predicate::str::contains("database:"))
        .stdout(predicate::str::contains("config_print_workhours.sqlite"));
}

#[test]
fn test_settings_rejects_non_finite_bonus() {
    let db_path = setup_test_db("settings_nan_bonus");
    init_db(&db_path);

    for bad in ["NaN", "inf", "-inf"] {
        wh().args(["--db", &db_path, "settings", "--bonus-hours", bad])
            .assert()
            .failure()
            .stderr(predicate::str::contains("finite"));
    }

    wh().args(["--db", &db_path, "settings", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bonus_hours:         2\n"));

    cli_add(&db_path, "2025-06-01", "Acme", "09:00", "17:00", true);
    let entries = cli_entries(&db_path);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].total_hours, 10.0);
}
