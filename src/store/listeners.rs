use crate::models::DashboardStats;

/// What changed in the store. Carried to every subscriber after the change
/// is persisted and the stats are recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChange {
    Loaded,
    EntryAdded(String),
    EntryUpdated(String),
    EntryDeleted(String),
    EntriesCleared,
    SettingsUpdated,
}

pub type Listener = Box<dyn FnMut(&StoreChange, &DashboardStats)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    items: Vec<(SubscriptionId, Listener)>,
}

impl Listeners {
    pub(crate) fn add(&mut self, listener: Listener) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.items.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.items.len();
        self.items.retain(|(sid, _)| *sid != id);
        self.items.len() != before
    }

    pub(crate) fn notify(&mut self, change: &StoreChange, stats: &DashboardStats) {
        for (_, listener) in self.items.iter_mut() {
            listener(change, stats);
        }
    }
}
