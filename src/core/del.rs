use crate::core::add::short_id;
use crate::db::KeyValueStore;
use crate::errors::AppResult;
use crate::models::WorkEntry;
use crate::store::{Clock, WorkHoursStore};
use crate::ui::messages::info;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one entry by full id or unique prefix.
    pub fn delete_one<K: KeyValueStore, C: Clock>(
        store: &mut WorkHoursStore<K, C>,
        id: &str,
    ) -> AppResult<WorkEntry> {
        let full_id = store.resolve_id(id)?;
        let removed = store.delete_entry(&full_id)?;

        info(format!(
            "Deleted entry [{}] for {} on {}",
            short_id(&removed.id),
            removed.job_client_name,
            removed.date
        ));
        Ok(removed)
    }

    /// Delete every entry; settings are kept.
    pub fn clear_all<K: KeyValueStore, C: Clock>(
        store: &mut WorkHoursStore<K, C>,
    ) -> AppResult<usize> {
        let count = store.clear_all()?;
        info(format!("Deleted {count} entries"));
        Ok(count)
    }
}
