use crate::db::KeyValueStore;
use crate::errors::AppResult;
use crate::models::{EntryDraft, WorkEntry};
use crate::store::{Clock, WorkHoursStore};
use crate::ui::messages::success;
use crate::utils::formatting::{hours_short, hours_signed};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    pub fn apply<K: KeyValueStore, C: Clock>(
        store: &mut WorkHoursStore<K, C>,
        draft: EntryDraft,
    ) -> AppResult<WorkEntry> {
        let entry = store.add_entry(draft)?;

        let bonus = if entry.driving_required {
            format!(" {} bonus", hours_signed(entry.driving_bonus_hours))
        } else {
            String::new()
        };

        success(format!(
            "Work hours entry saved: {} {} {}-{} → {} worked{}, {} total [{}]",
            entry.date,
            entry.job_client_name,
            entry.start_time,
            entry.end_time,
            hours_short(entry.hours_worked),
            bonus,
            hours_short(entry.total_hours),
            short_id(&entry.id),
        ));

        Ok(entry)
    }
}

/// First 8 characters of an id, as shown in listings.
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}
