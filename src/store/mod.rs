//! Stateful container around the pure calculator.
//!
//! Owns the canonical entry list, the settings and the derived dashboard
//! stats. Every mutation builds the new list, persists it, and only then
//! swaps it in and recomputes the stats, so a failed write leaves the
//! in-memory state untouched.

mod clock;
mod listeners;

pub use clock::{Clock, FixedClock, SystemClock};
pub use listeners::{Listener, StoreChange, SubscriptionId};

use crate::core::calculator::aggregate::{build_entry, compute_stats};
use crate::db::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::export::csv::entries_to_csv;
use crate::export::json::entries_to_json;
use crate::models::{
    DashboardStats, EntryDraft, EntryPatch, Settings, SettingsPatch, TimeOfDay, WorkEntry,
};
use crate::ui::messages::warning;
use crate::utils::date::parse_date;
use listeners::Listeners;

pub const ENTRIES_KEY: &str = "work_entries";
pub const SETTINGS_KEY: &str = "app_settings";

/// Key under which an unreadable blob of `key` is kept, e.g.
/// `work_entries.corrupt.2025-06-18T12:00:00+00:00`.
pub fn unreadable_backup_key(key: &str, timestamp: &str) -> String {
    format!("{key}.corrupt.{timestamp}")
}

/// New opaque record id.
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

pub struct WorkHoursStore<K: KeyValueStore, C: Clock = SystemClock> {
    kv: K,
    clock: C,
    entries: Vec<WorkEntry>,
    settings: Settings,
    stats: DashboardStats,
    listeners: Listeners,
    load_warnings: Vec<String>,
    /// Raw blobs that failed to parse, kept aside before their key is overwritten.
    unreadable: Vec<(&'static str, String)>,
}

impl<K: KeyValueStore> WorkHoursStore<K, SystemClock> {
    pub fn open(kv: K) -> AppResult<Self> {
        Self::with_clock(kv, SystemClock)
    }
}

impl<K: KeyValueStore, C: Clock> WorkHoursStore<K, C> {
    pub fn with_clock(kv: K, clock: C) -> AppResult<Self> {
        let mut store = Self {
            kv,
            clock,
            entries: Vec::new(),
            settings: Settings::default(),
            stats: DashboardStats::default(),
            listeners: Listeners::default(),
            load_warnings: Vec::new(),
            unreadable: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    // ---------------------------
    // Read access
    // ---------------------------

    /// Entries, most recently added first.
    pub fn entries(&self) -> &[WorkEntry] {
        &self.entries
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn stats(&self) -> &DashboardStats {
        &self.stats
    }

    pub fn find(&self, id: &str) -> Option<&WorkEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Resolve a full id or a unique id prefix (as shown by `list`).
    pub fn resolve_id(&self, prefix: &str) -> AppResult<String> {
        let prefix = prefix.trim();
        if self.find(prefix).is_some() {
            return Ok(prefix.to_string());
        }

        let mut matches = self.entries.iter().filter(|e| e.id.starts_with(prefix));
        match (matches.next(), matches.next()) {
            (Some(e), None) if !prefix.is_empty() => Ok(e.id.clone()),
            (Some(_), Some(_)) if !prefix.is_empty() => {
                Err(AppError::AmbiguousId(prefix.to_string()))
            }
            _ => Err(AppError::EntryNotFound(prefix.to_string())),
        }
    }

    /// Problems met while reading persisted data; the affected part was reset to defaults.
    pub fn load_warnings(&self) -> &[String] {
        &self.load_warnings
    }

    pub fn kv(&self) -> &K {
        &self.kv
    }

    // ---------------------------
    // Subscribers
    // ---------------------------

    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        self.listeners.add(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(id)
    }

    // ---------------------------
    // Loading
    // ---------------------------

    /// Reload entries and settings from the key-value store.
    pub fn refresh(&mut self) -> AppResult<()> {
        self.load()
    }

    fn load(&mut self) -> AppResult<()> {
        self.load_warnings.clear();
        self.unreadable.clear();

        let entries = match self.kv.get(ENTRIES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<WorkEntry>>(&raw) {
                Ok(list) => list,
                Err(e) => {
                    self.load_warnings.push(format!(
                        "Stored entries could not be parsed ({e}); starting with an empty list."
                    ));
                    self.unreadable.push((ENTRIES_KEY, raw));
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                self.load_warnings
                    .push(format!("Stored entries could not be read ({e})."));
                Vec::new()
            }
        };

        let settings = match self.kv.get(SETTINGS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Settings>(&raw) {
                Ok(s) => s,
                Err(e) => {
                    self.load_warnings.push(format!(
                        "Stored settings could not be parsed ({e}); using defaults."
                    ));
                    self.unreadable.push((SETTINGS_KEY, raw));
                    self.default_settings()
                }
            },
            Ok(None) => {
                // First run: persist the defaults right away.
                let defaults = self.default_settings();
                if let Err(e) = self.persist_settings(&defaults) {
                    self.load_warnings
                        .push(format!("Default settings could not be saved ({e})."));
                }
                defaults
            }
            Err(e) => {
                self.load_warnings.push(format!(
                    "Stored settings could not be read ({e}); using defaults."
                ));
                self.default_settings()
            }
        };

        self.entries = entries;
        self.settings = settings;
        self.commit_stats(StoreChange::Loaded);
        Ok(())
    }

    fn default_settings(&self) -> Settings {
        Settings {
            updated_at: self.clock.timestamp(),
            ..Settings::default()
        }
    }

    // ---------------------------
    // Entry mutations
    // ---------------------------

    /// Save a new entry with hours derived from the current bonus setting.
    pub fn add_entry(&mut self, draft: EntryDraft) -> AppResult<WorkEntry> {
        let draft = normalize_draft(draft)?;
        let derived = build_entry(&draft, self.settings.bonus_hours);
        let now = self.clock.timestamp();

        let mut entry = WorkEntry {
            id: generate_id(),
            date: draft.date,
            job_client_name: draft.job_client_name,
            start_time: draft.start_time,
            end_time: draft.end_time,
            driving_required: draft.driving_required,
            driving_bonus_hours: 0.0,
            hours_worked: 0.0,
            total_hours: 0.0,
            created_at: now.clone(),
            updated_at: now,
        };
        entry.apply_derived(derived);

        let mut updated = Vec::with_capacity(self.entries.len() + 1);
        updated.push(entry.clone());
        updated.extend(self.entries.iter().cloned());

        self.persist_entries(&updated)?;
        self.entries = updated;
        self.audit(
            "add",
            &entry.id,
            &format!(
                "{} {} {}-{} ({:.2}h)",
                entry.date,
                entry.job_client_name,
                entry.start_time,
                entry.end_time,
                entry.total_hours
            ),
        );
        self.commit_stats(StoreChange::EntryAdded(entry.id.clone()));
        Ok(entry)
    }

    /// Merge a patch into an entry and re-derive its hours with the current bonus.
    pub fn update_entry(&mut self, id: &str, patch: &EntryPatch) -> AppResult<WorkEntry> {
        let idx = self.index_of(id)?;
        let current = &self.entries[idx];

        let draft = normalize_draft(patch.merge_into(current.draft()))?;
        let derived = build_entry(&draft, self.settings.bonus_hours);

        let mut entry = WorkEntry {
            date: draft.date,
            job_client_name: draft.job_client_name,
            start_time: draft.start_time,
            end_time: draft.end_time,
            driving_required: draft.driving_required,
            updated_at: self.clock.timestamp(),
            ..current.clone()
        };
        entry.apply_derived(derived);

        let mut updated = self.entries.clone();
        updated[idx] = entry.clone();

        self.persist_entries(&updated)?;
        self.entries = updated;
        self.audit(
            "edit",
            &entry.id,
            &format!("{} {} ({:.2}h)", entry.date, entry.job_client_name, entry.total_hours),
        );
        self.commit_stats(StoreChange::EntryUpdated(entry.id.clone()));
        Ok(entry)
    }

    pub fn delete_entry(&mut self, id: &str) -> AppResult<WorkEntry> {
        let idx = self.index_of(id)?;

        let mut updated = self.entries.clone();
        let removed = updated.remove(idx);

        self.persist_entries(&updated)?;
        self.entries = updated;
        self.audit(
            "del",
            &removed.id,
            &format!("{} {}", removed.date, removed.job_client_name),
        );
        self.commit_stats(StoreChange::EntryDeleted(removed.id.clone()));
        Ok(removed)
    }

    /// Drop every entry. Returns how many were removed.
    pub fn clear_all(&mut self) -> AppResult<usize> {
        let count = self.entries.len();

        self.preserve_unreadable(ENTRIES_KEY)?;
        self.kv.remove(ENTRIES_KEY)?;
        self.entries.clear();
        self.audit("clear", "", &format!("{count} entries removed"));
        self.commit_stats(StoreChange::EntriesCleared);
        Ok(count)
    }

    // ---------------------------
    // Settings
    // ---------------------------

    /// Existing entries keep the bonus they were saved with.
    pub fn update_settings(&mut self, patch: &SettingsPatch) -> AppResult<&Settings> {
        patch.validate()?;

        let mut updated = self.settings.clone();
        updated.apply(patch, self.clock.timestamp());

        self.persist_settings(&updated)?;
        self.settings = updated;
        self.audit(
            "settings",
            "",
            &format!(
                "bonus_hours={} time_format={}",
                self.settings.bonus_hours, self.settings.time_format
            ),
        );
        self.commit_stats(StoreChange::SettingsUpdated);
        Ok(&self.settings)
    }

    // ---------------------------
    // Export
    // ---------------------------

    pub fn export_csv(&self) -> String {
        entries_to_csv(&self.entries)
    }

    pub fn export_json(&self) -> AppResult<String> {
        entries_to_json(&self.entries)
    }

    // ---------------------------
    // Internals
    // ---------------------------

    fn index_of(&self, id: &str) -> AppResult<usize> {
        self.entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| AppError::EntryNotFound(id.to_string()))
    }

    fn persist_entries(&mut self, entries: &[WorkEntry]) -> AppResult<()> {
        let json = serde_json::to_string(entries)?;
        self.preserve_unreadable(ENTRIES_KEY)?;
        self.kv.set(ENTRIES_KEY, &json)
    }

    fn persist_settings(&mut self, settings: &Settings) -> AppResult<()> {
        let json = serde_json::to_string(settings)?;
        self.preserve_unreadable(SETTINGS_KEY)?;
        self.kv.set(SETTINGS_KEY, &json)
    }

    /// Copy a blob that failed to parse under a backup key before `key` is
    /// first overwritten or removed.
    fn preserve_unreadable(&mut self, key: &str) -> AppResult<()> {
        let Some(pos) = self.unreadable.iter().position(|(k, _)| *k == key) else {
            return Ok(());
        };

        let backup_key = unreadable_backup_key(key, &self.clock.timestamp());
        self.kv.set(&backup_key, &self.unreadable[pos].1)?;
        self.unreadable.remove(pos);

        self.audit(
            "backup",
            &backup_key,
            &format!("unreadable {key} kept before overwrite"),
        );
        warning(format!("Unreadable {key} data saved under '{backup_key}'."));
        Ok(())
    }

    fn commit_stats(&mut self, change: StoreChange) {
        let today = self.clock.today().format("%Y-%m-%d").to_string();
        self.stats = compute_stats(&self.entries, &today);
        self.listeners.notify(&change, &self.stats);
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) {
        if let Err(e) = self.kv.audit(operation, target, message) {
            warning(format!("Failed to write internal log: {e}"));
        }
    }
}

/// Validate and canonicalise user input before deriving hours.
///
/// The name must be non-empty after trimming and the date must be a real
/// `YYYY-MM-DD` day. Times are never rejected: they are parsed leniently and
/// re-rendered as zero-padded `HH:MM`.
fn normalize_draft(draft: EntryDraft) -> AppResult<EntryDraft> {
    let name = draft.job_client_name.trim();
    if name.is_empty() {
        return Err(AppError::EmptyClientName);
    }

    let date = draft.date.trim();
    let parsed = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

    Ok(EntryDraft {
        date: parsed.format("%Y-%m-%d").to_string(),
        job_client_name: name.to_string(),
        start_time: TimeOfDay::parse_lenient(&draft.start_time).to_string(),
        end_time: TimeOfDay::parse_lenient(&draft.end_time).to_string(),
        driving_required: draft.driving_required,
    })
}
