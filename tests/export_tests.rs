mod common;
use common::{TODAY, cli_add, entry, init_db, setup_test_db, temp_out, wh};
use predicates::prelude::*;
use std::fs;
use workhours::export::csv::{CSV_HEADER, entries_to_csv, quote_field};
use workhours::export::json::entries_to_json;
use workhours::models::WorkEntry;

#[test]
fn test_csv_of_no_entries_is_header_only() {
    assert_eq!(entries_to_csv(&[]), format!("{CSV_HEADER}\n"));
}

#[test]
fn test_csv_row_layout() {
    let mut e = entry("2025-06-01", "22:00", "06:30", true, 2.0);
    e.job_client_name = "Acme".into();

    let csv = entries_to_csv(&[e]);
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(
        lines[0],
        "Date,Job/Client,Start Time,End Time,Driving Required,Hours Worked,Bonus Hours,Total Hours"
    );
    assert_eq!(
        lines[1],
        "2025-06-01,\"Acme\",22:00,06:30,Yes,8.50,2.00,10.50"
    );
    assert!(csv.ends_with('\n'));
}

#[test]
fn test_csv_sorts_newest_date_first_keeping_ties_in_order() {
    let mut a = entry("2025-06-01", "09:00", "10:00", false, 2.0);
    a.job_client_name = "first".into();
    let mut b = entry("2025-06-03", "09:00", "10:00", false, 2.0);
    b.job_client_name = "second".into();
    let mut c = entry("2025-06-01", "11:00", "12:00", false, 2.0);
    c.job_client_name = "third".into();

    let csv = entries_to_csv(&[a, b, c]);
    let names: Vec<&str> = csv
        .lines()
        .skip(1)
        .map(|l| l.split(',').nth(1).unwrap())
        .collect();

    assert_eq!(names, ["\"second\"", "\"first\"", "\"third\""]);
}

#[test]
fn test_quote_field_doubles_quotes() {
    assert_eq!(quote_field("plain"), "\"plain\"");
    assert_eq!(quote_field("say \"hi\""), "\"say \"\"hi\"\"\"");
}

#[test]
fn test_csv_is_readable_by_a_csv_parser() {
    let mut e = entry(TODAY, "09:00", "17:00", false, 2.0);
    e.job_client_name = "Acme, \"Biggco\" & Sons".into();

    let csv = entries_to_csv(&[e]);
    let mut reader = csv::Reader::from_reader(csv.as_bytes());

    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.len(), 8);
    assert_eq!(&headers[1], "Job/Client");

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][1], "Acme, \"Biggco\" & Sons");
    assert_eq!(&rows[0][4], "No");
    assert_eq!(&rows[0][5], "8.00");
    assert_eq!(&rows[0][6], "0.00");
}

#[test]
fn test_json_has_stored_field_names() {
    let e = entry(TODAY, "09:00", "17:00", true, 2.0);
    let json = entries_to_json(std::slice::from_ref(&e)).unwrap();

    assert!(json.contains("\"job_client_name\""));
    assert!(json.contains("\"driving_bonus_hours\""));

    let back: Vec<WorkEntry> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, vec![e]);
}

#[test]
fn test_cli_export_csv_to_stdout() {
    let db_path = setup_test_db("export_csv_stdout");
    init_db(&db_path);
    cli_add(&db_path, "2025-06-01", "Acme, Inc", "09:00", "17:00", true);
    cli_add(&db_path, "2025-06-02", "Globex", "9:00 PM", "5:30 AM", false);

    wh().args(["--db", &db_path, "export"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(CSV_HEADER))
        .stdout(predicate::str::contains(
            "2025-06-02,\"Globex\",21:00,05:30,No,8.50,0.00,8.50",
        ))
        .stdout(predicate::str::contains(
            "2025-06-01,\"Acme, Inc\",09:00,17:00,Yes,8.00,2.00,10.00",
        ));
}

#[test]
fn test_cli_export_to_file() {
    let db_path = setup_test_db("export_csv_file");
    init_db(&db_path);
    cli_add(&db_path, "2025-06-01", "Acme", "09:00", "17:00", false);

    let out = temp_out("export_csv_file", "csv");
    wh().args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success()
        .stdout(predicate::str::contains("export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with(CSV_HEADER));
    assert_eq!(content.lines().count(), 2);

    // existing file, no --force, declined at the prompt
    wh().args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure();

    wh().args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();
}

#[test]
fn test_cli_export_json_to_directory() {
    let db_path = setup_test_db("export_json_dir");
    init_db(&db_path);
    cli_add(&db_path, "2025-06-01", "Acme", "09:00", "17:00", false);

    let mut dir = std::env::temp_dir();
    dir.push("workhours_export_json_dir");
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).unwrap();

    wh().args([
        "--db",
        &db_path,
        "export",
        "--format",
        "json",
        "--file",
        &dir.to_string_lossy(),
    ])
    .assert()
    .success();

    let files: Vec<_> = fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("work_hours_"));
    assert!(files[0].ends_with(".json"));
}

#[test]
fn test_cli_export_rejects_relative_path() {
    let db_path = setup_test_db("export_relative");
    init_db(&db_path);

    wh().args(["--db", &db_path, "export", "--file", "out.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("absolute"));
}
