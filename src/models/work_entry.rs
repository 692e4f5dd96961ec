use super::time_of_day::TimeOfDay;
use crate::core::calculator::aggregate::DerivedHours;
use serde::{Deserialize, Serialize};

/// One recorded shift, as persisted under the `work_entries` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkEntry {
    pub id: String,
    pub date: String, // YYYY-MM-DD, nominal day of the shift
    pub job_client_name: String,
    pub start_time: String, // HH:MM (24h)
    pub end_time: String,   // HH:MM (24h)
    pub driving_required: bool,
    pub driving_bonus_hours: f64,
    pub hours_worked: f64,
    pub total_hours: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl WorkEntry {
    pub fn start(&self) -> TimeOfDay {
        TimeOfDay::parse_lenient(&self.start_time)
    }

    pub fn end(&self) -> TimeOfDay {
        TimeOfDay::parse_lenient(&self.end_time)
    }

    /// The user-editable part of the entry.
    pub fn draft(&self) -> EntryDraft {
        EntryDraft {
            date: self.date.clone(),
            job_client_name: self.job_client_name.clone(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            driving_required: self.driving_required,
        }
    }

    pub fn apply_derived(&mut self, derived: DerivedHours) {
        self.hours_worked = derived.hours_worked;
        self.driving_bonus_hours = derived.driving_bonus_hours;
        self.total_hours = derived.total_hours;
    }
}

/// Fields supplied by the user when saving a new entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub date: String,
    pub job_client_name: String,
    pub start_time: String,
    pub end_time: String,
    pub driving_required: bool,
}

/// Partial entry update; `None` (or a blank time) keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryPatch {
    pub date: Option<String>,
    pub job_client_name: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub driving_required: Option<bool>,
}

impl EntryPatch {
    pub fn is_empty(&self) -> bool {
        *self == EntryPatch::default()
    }

    /// Overlay the patch on an existing draft.
    pub fn merge_into(&self, base: EntryDraft) -> EntryDraft {
        EntryDraft {
            date: self.date.clone().unwrap_or(base.date),
            job_client_name: self
                .job_client_name
                .clone()
                .unwrap_or(base.job_client_name),
            start_time: non_blank(&self.start_time).unwrap_or(base.start_time),
            end_time: non_blank(&self.end_time).unwrap_or(base.end_time),
            driving_required: self.driving_required.unwrap_or(base.driving_required),
        }
    }
}

// A blank time in a patch keeps the current one.
fn non_blank(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.trim().is_empty()).cloned()
}
