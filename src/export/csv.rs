//! CSV document for spreadsheet import.
//!
//! Layout is fixed: the header below, rows sorted by date (newest first),
//! `Yes`/`No` for the driving flag, hours with two decimals, and the
//! job/client field always quoted since names routinely contain commas.

use crate::models::WorkEntry;

pub const CSV_HEADER: &str =
    "Date,Job/Client,Start Time,End Time,Driving Required,Hours Worked,Bonus Hours,Total Hours";

/// Quote a field, doubling any embedded double quote.
pub fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn entry_to_row(e: &WorkEntry) -> String {
    [
        e.date.clone(),
        quote_field(&e.job_client_name),
        e.start_time.clone(),
        e.end_time.clone(),
        if e.driving_required { "Yes" } else { "No" }.to_string(),
        format!("{:.2}", e.hours_worked),
        format!("{:.2}", e.driving_bonus_hours),
        format!("{:.2}", e.total_hours),
    ]
    .join(",")
}

/// Render the whole entry list. Entries sharing a date keep their list order.
pub fn entries_to_csv(entries: &[WorkEntry]) -> String {
    let mut sorted: Vec<&WorkEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + sorted.len() * 64);
    out.push_str(CSV_HEADER);
    out.push('\n');

    for e in sorted {
        out.push_str(&entry_to_row(e));
        out.push('\n');
    }

    out
}
