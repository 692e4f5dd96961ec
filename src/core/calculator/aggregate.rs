//! Per-entry derived hours and dashboard aggregation.
//!
//! Everything here is a pure function of its arguments: no clock, no I/O.

use super::duration::duration_hours_str;
use crate::models::{DashboardStats, EntryDraft, WorkEntry};

/// The three derived hour figures carried by every entry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DerivedHours {
    pub hours_worked: f64,
    pub driving_bonus_hours: f64,
    pub total_hours: f64,
}

/// Derive the hour figures for a draft, given the current bonus setting.
pub fn build_entry(input: &EntryDraft, bonus_hours: f64) -> DerivedHours {
    let hours_worked = duration_hours_str(&input.start_time, &input.end_time);
    let driving_bonus_hours = if input.driving_required {
        bonus_hours
    } else {
        0.0
    };

    DerivedHours {
        hours_worked,
        driving_bonus_hours,
        total_hours: hours_worked + driving_bonus_hours,
    }
}

/// Re-derive an existing entry's hours in place. Idempotent for a fixed bonus.
pub fn recompute(entry: &mut WorkEntry, bonus_hours: f64) {
    let derived = build_entry(&entry.draft(), bonus_hours);
    entry.apply_derived(derived);
}

/// Fold the entry list into dashboard figures.
///
/// `today` is the caller's local calendar date as `YYYY-MM-DD`; an entry
/// counts as today's only when its `date` is exactly that string.
/// `hours_today` sums `total_hours` (bonus included), unlike
/// `total_hours_worked`.
pub fn compute_stats(entries: &[WorkEntry], today: &str) -> DashboardStats {
    let today_entries: Vec<&WorkEntry> = entries.iter().filter(|e| e.date == today).collect();

    DashboardStats {
        total_entries: entries.len(),
        total_hours_worked: sum_hours(entries.iter(), |e| e.hours_worked),
        total_hours_with_bonus: sum_hours(entries.iter(), |e| e.total_hours),
        entries_today: today_entries.len(),
        hours_today: sum_hours(today_entries.iter().copied(), |e| e.total_hours),
    }
}

// Plain left fold from +0.0 (`Iterator::sum` on floats starts at -0.0).
fn sum_hours<'a, I, F>(entries: I, field: F) -> f64
where
    I: Iterator<Item = &'a WorkEntry>,
    F: Fn(&WorkEntry) -> f64,
{
    entries.fold(0.0, |acc, e| acc + field(e))
}
