//! In-memory record store.
//!
//! The store is the single source of truth for user records during a session.
//! Nothing here is persisted; edits live until the plugin is unloaded. Lookups
//! that miss are silent no-ops rather than errors.

use crate::domain::{User, UserId};

/// Filter choices offered by the filter panel, derived from the current records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Distinct cities in store order.
    pub cities: Vec<String>,
    /// Distinct company names in store order.
    pub companies: Vec<String>,
}

impl FilterOptions {
    /// All options flattened, cities first.
    #[must_use]
    pub fn all(&self) -> Vec<&str> {
        self.cities
            .iter()
            .chain(self.companies.iter())
            .map(String::as_str)
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cities.len() + self.companies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ordered collection of user records.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<User>,
}

impl RecordStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Loads the initial batch. Applied only when the store is empty.
    ///
    /// Returns `true` if the records were taken.
    pub fn seed(&mut self, records: Vec<User>) -> bool {
        if !self.records.is_empty() {
            tracing::debug!(
                existing = self.records.len(),
                offered = records.len(),
                "store already populated, ignoring seed"
            );
            return false;
        }

        tracing::debug!(count = records.len(), "seeding record store");
        self.records = records;
        true
    }

    /// Appends one record.
    pub fn add(&mut self, record: User) {
        tracing::debug!(id = record.id, name = %record.name, "record added");
        self.records.push(record);
    }

    /// Replaces every field of the record with the same identifier.
    ///
    /// Returns `false` and leaves the store untouched when the identifier is unknown.
    pub fn update(&mut self, record: User) -> bool {
        let Some(existing) = self.records.iter_mut().find(|r| r.id == record.id) else {
            tracing::debug!(id = record.id, "update ignored, record not found");
            return false;
        };

        tracing::debug!(id = record.id, "record updated");
        *existing = record;
        true
    }

    /// Removes the record with the given identifier.
    ///
    /// Returns the removed record, or `None` when nothing matched.
    pub fn delete(&mut self, id: UserId) -> Option<User> {
        let position = self.records.iter().position(|r| r.id == id)?;
        let removed = self.records.remove(position);
        tracing::debug!(id, name = %removed.name, "record deleted");
        Some(removed)
    }

    #[must_use]
    pub fn get(&self, id: UserId) -> Option<&User> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.records.iter()
    }

    #[must_use]
    pub fn records(&self) -> &[User] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Identifier for a manually created record.
    ///
    /// Uses the current epoch milliseconds, bumped past the largest existing
    /// identifier so two adds within the same millisecond never collide.
    #[must_use]
    pub fn next_id(&self, now_millis: i64) -> UserId {
        let floor = self
            .records
            .iter()
            .map(|r| r.id)
            .max()
            .map_or(i64::MIN, |max| max.saturating_add(1));
        now_millis.max(floor)
    }

    /// Distinct city and company values, in the order records appear.
    #[must_use]
    pub fn filter_options(&self) -> FilterOptions {
        let mut options = FilterOptions::default();
        for record in &self.records {
            push_distinct(&mut options.cities, &record.address.city);
            push_distinct(&mut options.companies, &record.company.name);
        }
        options
    }
}

fn push_distinct(values: &mut Vec<String>, value: &str) {
    if !value.is_empty() && !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: UserId, name: &str, city: &str, company: &str) -> User {
        let mut u = User::empty(id);
        u.name = name.to_string();
        u.address.city = city.to_string();
        u.company.name = company.to_string();
        u
    }

    #[test]
    fn seed_only_applies_to_empty_store() {
        let mut store = RecordStore::new();
        assert!(store.seed(vec![user(1, "A", "X", "Acme")]));
        assert!(!store.seed(vec![user(2, "B", "Y", "Beta")]));
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].id, 1);
    }

    #[test]
    fn update_replaces_fields_but_keeps_position() {
        let mut store = RecordStore::new();
        store.seed(vec![user(1, "A", "X", "Acme"), user(2, "B", "Y", "Beta")]);

        assert!(store.update(user(1, "Alpha", "Z", "Acme")));
        assert_eq!(store.records()[0].name, "Alpha");
        assert_eq!(store.records()[0].address.city, "Z");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn missing_ids_are_silent_no_ops() {
        let mut store = RecordStore::new();
        store.seed(vec![user(1, "A", "X", "Acme")]);

        assert!(!store.update(user(99, "Ghost", "", "")));
        assert!(store.delete(99).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_removes_record() {
        let mut store = RecordStore::new();
        store.seed(vec![user(1, "A", "X", "Acme"), user(2, "B", "Y", "Beta")]);

        let removed = store.delete(1).map(|u| u.name);
        assert_eq!(removed.as_deref(), Some("A"));
        assert!(store.get(1).is_none());
        assert!(store.get(2).is_some());
    }

    #[test]
    fn next_id_stays_above_existing_ids() {
        let mut store = RecordStore::new();
        assert_eq!(store.next_id(1_000), 1_000);

        store.add(user(1_000, "A", "", ""));
        assert_eq!(store.next_id(1_000), 1_001);
        assert_eq!(store.next_id(5_000), 5_000);
    }

    #[test]
    fn filter_options_are_distinct_and_ordered() {
        let mut store = RecordStore::new();
        store.seed(vec![
            user(1, "A", "Paris", "Acme"),
            user(2, "B", "Lyon", "Acme"),
            user(3, "C", "Paris", "Beta"),
        ]);

        let options = store.filter_options();
        assert_eq!(options.cities, vec!["Paris", "Lyon"]);
        assert_eq!(options.companies, vec!["Acme", "Beta"]);
        assert_eq!(options.all(), vec!["Paris", "Lyon", "Acme", "Beta"]);
    }
}
