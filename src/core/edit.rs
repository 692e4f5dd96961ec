use crate::core::add::short_id;
use crate::db::KeyValueStore;
use crate::errors::AppResult;
use crate::models::{EntryPatch, WorkEntry};
use crate::store::{Clock, WorkHoursStore};
use crate::ui::messages::{info, success};
use crate::utils::formatting::hours_short;

/// High-level business logic for the `edit` command.
pub struct EditLogic;

impl EditLogic {
    /// Apply `patch` to the entry matching `id` (full id or unique prefix).
    ///
    /// Derived hours are always recomputed with the current bonus setting,
    /// even if only the name changed.
    pub fn apply<K: KeyValueStore, C: Clock>(
        store: &mut WorkHoursStore<K, C>,
        id: &str,
        patch: &EntryPatch,
    ) -> AppResult<WorkEntry> {
        let full_id = store.resolve_id(id)?;

        if patch.is_empty() {
            info("Nothing to change; hours are recomputed with the current bonus.");
        }

        let entry = store.update_entry(&full_id, patch)?;

        success(format!(
            "Entry [{}] updated: {} {} {}-{} → {} total",
            short_id(&entry.id),
            entry.date,
            entry.job_client_name,
            entry.start_time,
            entry.end_time,
            hours_short(entry.total_hours),
        ));

        Ok(entry)
    }
}
