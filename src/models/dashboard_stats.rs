use serde::Serialize;

/// Aggregate figures shown on the dashboard. Derived from the entry list,
/// never persisted.
///
/// `hours_today` is bonus-inclusive (sum of `total_hours`) while
/// `total_hours_worked` is bonus-exclusive. The two are not meant to be
/// compared directly.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DashboardStats {
    pub total_entries: usize,
    pub total_hours_worked: f64,
    pub total_hours_with_bonus: f64,
    pub entries_today: usize,
    pub hours_today: f64,
}
