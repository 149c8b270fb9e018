//! The menu store: an insertion-ordered list of dishes.
//!
//! The store is owned by a single UI task and every operation runs to
//! completion synchronously. Successful mutations are announced on a
//! broadcast channel so the UI can show a transient acknowledgment; sending
//! never blocks and it does not matter whether anyone is listening.

use super::aggregate::Aggregates;
use super::entry::{CourseFilter, EntryId, MenuEntry, NewEntry};
use super::error::ValidationError;
use tokio::sync::broadcast;

/// Capacity of the change-notification channel. Slow subscribers lag and
/// skip old notifications rather than holding up the store.
const EVENT_BUFFER: usize = 64;

/// Notification emitted after the store changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A dish was appended
    Added { id: EntryId, total: usize },
    /// A dish was deleted
    Removed { id: EntryId, total: usize },
}

impl StoreEvent {
    /// Number of entries in the store right after the change
    pub fn total(&self) -> usize {
        match self {
            StoreEvent::Added { total, .. } | StoreEvent::Removed { total, .. } => *total,
        }
    }
}

/// In-memory menu for one session
pub struct MenuStore {
    entries: Vec<MenuEntry>,
    events: broadcast::Sender<StoreEvent>,
}

impl MenuStore {
    /// Create an empty store
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_BUFFER);
        Self {
            entries: Vec::new(),
            events,
        }
    }

    /// Subscribe to change notifications
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Validate a candidate and append it to the end of the menu.
    ///
    /// On failure nothing changes and no notification is sent.
    pub fn add(&mut self, candidate: NewEntry) -> Result<MenuEntry, ValidationError> {
        let entry = match candidate.validate() {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Rejected dish ({}): {}", e.code(), e);
                return Err(e);
            }
        };

        self.entries.push(entry.clone());
        tracing::debug!(
            "Added {} '{}' at {:.2} ({} total)",
            entry.course,
            entry.name,
            entry.price,
            self.entries.len()
        );

        self.notify(StoreEvent::Added {
            id: entry.id,
            total: self.entries.len(),
        });

        Ok(entry)
    }

    /// Delete the entry with `id`. Returns false if there was no such entry.
    pub fn remove(&mut self, id: EntryId) -> bool {
        let Some(index) = self.entries.iter().position(|entry| entry.id == id) else {
            tracing::debug!("Remove ignored, no entry with id {}", id);
            return false;
        };

        // Vec::remove shifts the tail, keeping relative order
        let removed = self.entries.remove(index);
        tracing::debug!(
            "Removed '{}' ({} remaining)",
            removed.name,
            self.entries.len()
        );

        self.notify(StoreEvent::Removed {
            id,
            total: self.entries.len(),
        });

        true
    }

    /// All entries in insertion order
    pub fn list(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Entries passing `filter`, in insertion order
    pub fn filtered_list(&self, filter: CourseFilter) -> Vec<&MenuEntry> {
        self.entries
            .iter()
            .filter(|entry| filter.matches(entry.course))
            .collect()
    }

    /// Per-course statistics, recomputed from the current entries
    pub fn aggregates(&self) -> Aggregates {
        Aggregates::from_entries(&self.entries)
    }

    /// Look up an entry by id
    pub fn get(&self, id: EntryId) -> Option<&MenuEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn notify(&self, event: StoreEvent) {
        // Err only means there are no subscribers right now
        let _ = self.events.send(event);
    }
}

impl Default for MenuStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::entry::Course;
    use std::collections::HashSet;
    use tokio::sync::broadcast::error::TryRecvError;

    fn dish(name: &str, course: Course, price: &str) -> NewEntry {
        NewEntry::new(name, "", course, price)
    }

    fn ids(entries: &[&MenuEntry]) -> Vec<EntryId> {
        entries.iter().map(|entry| entry.id).collect()
    }

    /// The three-dish menu used by the aggregate and filter tests
    fn sample_store() -> (MenuStore, [EntryId; 3]) {
        let mut store = MenuStore::new();
        let a = store.add(dish("Steak", Course::Main, "100.00")).unwrap();
        let b = store.add(dish("Salmon", Course::Main, "50.00")).unwrap();
        let c = store.add(dish("Soup", Course::Starter, "20.00")).unwrap();
        (store, [a.id, b.id, c.id])
    }

    #[test]
    fn test_add_appends_rounded_entry() {
        let mut store = MenuStore::new();
        let entry = store
            .add(NewEntry::new(" Soup ", " tomato ", Course::Starter, "12.499"))
            .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0], entry);
        assert_eq!(entry.name, "Soup");
        assert_eq!(entry.description, "tomato");
        assert_eq!(entry.price, 12.5);
    }

    #[test]
    fn test_add_rejections_leave_store_unchanged() {
        let mut store = MenuStore::new();
        store.add(dish("Bread", Course::Starter, "5")).unwrap();
        let before = store.list().to_vec();

        let cases = [
            (dish("", Course::Main, "10"), ValidationError::MissingName),
            (dish("   ", Course::Main, "10"), ValidationError::MissingName),
            (dish("Soup", Course::Main, ""), ValidationError::MissingPrice),
            (dish("Soup", Course::Main, "  "), ValidationError::MissingPrice),
            (dish("Soup", Course::Main, "abc"), ValidationError::InvalidPrice),
            (dish("Soup", Course::Main, "-5"), ValidationError::InvalidPrice),
        ];

        for (candidate, expected) in cases {
            assert_eq!(store.add(candidate), Err(expected));
            assert_eq!(store.list(), before.as_slice());
        }
    }

    #[test]
    fn test_order_preserved_through_remove() {
        let mut store = MenuStore::new();
        let a = store.add(dish("A", Course::Starter, "1")).unwrap();
        let b = store.add(dish("B", Course::Main, "2")).unwrap();
        let c = store.add(dish("C", Course::Dessert, "3")).unwrap();

        let names: Vec<_> = store.list().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);

        assert!(store.remove(b.id));
        let remaining: Vec<_> = store.list().iter().map(|e| e.id).collect();
        assert_eq!(remaining, vec![a.id, c.id]);
    }

    #[test]
    fn test_remove_twice_is_noop() {
        let (mut store, [_, b, _]) = sample_store();

        assert!(store.remove(b));
        let after_first = store.list().to_vec();

        assert!(!store.remove(b));
        assert_eq!(store.list(), after_first.as_slice());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_unknown_id() {
        let (mut store, _) = sample_store();
        assert!(!store.remove(EntryId::generate()));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_aggregates() {
        let (store, _) = sample_store();
        let aggregates = store.aggregates();

        assert_eq!(aggregates.total_count, 3);

        assert_eq!(aggregates.main.count, 2);
        assert_eq!(aggregates.main.sum, 150.0);
        assert_eq!(aggregates.main.average, 75.0);

        assert_eq!(aggregates.starter.count, 1);
        assert_eq!(aggregates.starter.average, 20.0);

        assert_eq!(aggregates.dessert.count, 0);
        assert_eq!(aggregates.dessert.average, 0.0);
        assert!(!aggregates.dessert.average.is_nan());
    }

    #[test]
    fn test_aggregates_follow_removal() {
        let (mut store, [a, _, _]) = sample_store();
        store.remove(a);
        let aggregates = store.aggregates();
        assert_eq!(aggregates.main.count, 1);
        assert_eq!(aggregates.main.average, 50.0);
    }

    #[test]
    fn test_filtered_list() {
        let (store, [a, b, c]) = sample_store();

        let mains = store.filtered_list(CourseFilter::Only(Course::Main));
        assert_eq!(ids(&mains), vec![a, b]);

        assert!(store
            .filtered_list(CourseFilter::Only(Course::Dessert))
            .is_empty());

        let all = store.filtered_list(CourseFilter::All);
        assert_eq!(ids(&all), vec![a, b, c]);
        assert_eq!(all.len(), store.list().len());
    }

    #[test]
    fn test_ids_unique_for_identical_dishes() {
        let mut store = MenuStore::new();
        for _ in 0..50 {
            store.add(dish("Same", Course::Main, "9.99")).unwrap();
        }
        let unique: HashSet<_> = store.list().iter().map(|e| e.id).collect();
        assert_eq!(unique.len(), 50);
    }

    #[test]
    fn test_get_by_id() {
        let (store, [_, b, _]) = sample_store();
        assert_eq!(store.get(b).map(|e| e.name.as_str()), Some("Salmon"));
        assert!(store.get(EntryId::generate()).is_none());
    }

    #[test]
    fn test_successful_add_notifies_once() {
        let mut store = MenuStore::new();
        let mut rx = store.subscribe();

        let entry = store.add(dish("Soup", Course::Starter, "10")).unwrap();
        assert_eq!(
            rx.try_recv(),
            Ok(StoreEvent::Added {
                id: entry.id,
                total: 1
            })
        );
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn test_failed_add_does_not_notify() {
        let mut store = MenuStore::new();
        let mut rx = store.subscribe();

        assert!(store.add(dish("", Course::Starter, "10")).is_err());
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn test_remove_notifies_only_when_removed() {
        let (mut store, [a, _, _]) = sample_store();
        let mut rx = store.subscribe();

        store.remove(a);
        assert_eq!(rx.try_recv().map(|e| e.total()), Ok(2));

        store.remove(a);
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn test_mutation_without_subscribers() {
        let mut store = MenuStore::new();
        assert!(store.add(dish("Soup", Course::Starter, "10")).is_ok());
    }
}
