pub mod dashboard_stats;
pub mod settings;
pub mod time_of_day;
pub mod work_entry;

pub use dashboard_stats::DashboardStats;
pub use settings::{Settings, SettingsPatch, TimeFormat};
pub use time_of_day::TimeOfDay;
pub use work_entry::{EntryDraft, EntryPatch, WorkEntry};
