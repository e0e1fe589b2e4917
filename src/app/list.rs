//! List view-model: search, filter, sort, and pagination over the record store.
//!
//! The working list is always rebuilt from the store in one pass rather than
//! patched incrementally:
//!
//! 1. **Base selection**: records matching the lowercased query in name, email,
//!    or company name (all records when the trimmed query is empty)
//! 2. **Filter**: keep records whose city or company contains any active token,
//!    de-duplicated by identifier
//! 3. **Fallback**: an empty result reverts to the base set only when there is
//!    no query and no active token
//! 4. **Sort**: stable name pass, then stable email pass
//! 5. **Pagination**: total pages recomputed, current page reset to 1 when it
//!    falls outside `1..=total`
//!
//! # Example
//!
//! ```rust
//! use userspot::app::list::{ListViewModel, SortDirective};
//! use userspot::store::RecordStore;
//!
//! let store = RecordStore::new();
//! let mut list = ListViewModel::default();
//! list.set_query("acme", &store);
//! list.cycle_name_sort(&store);
//! assert_eq!(list.sort().name, SortDirective::Ascending);
//! assert!(list.visible_page().is_empty());
//! ```

use crate::domain::error::{Result, UserspotError};
use crate::domain::{User, UserId};
use crate::store::RecordStore;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Number of rows per page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageSize {
    Two,
    #[default]
    Five,
    Ten,
}

impl PageSize {
    pub const ALL: [Self; 3] = [Self::Two, Self::Five, Self::Ten];

    #[must_use]
    pub const fn get(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Five => 5,
            Self::Ten => 10,
        }
    }

    /// Next option in the selector, wrapping from 10 back to 2.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Two => Self::Five,
            Self::Five => Self::Ten,
            Self::Ten => Self::Two,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = UserspotError;

    fn try_from(value: usize) -> Result<Self> {
        match value {
            2 => Ok(Self::Two),
            5 => Ok(Self::Five),
            10 => Ok(Self::Ten),
            other => Err(UserspotError::Config(format!(
                "page size must be 2, 5 or 10, got {other}"
            ))),
        }
    }
}

/// Tri-state sort directive for one column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirective {
    Descending,
    #[default]
    Neutral,
    Ascending,
}

impl SortDirective {
    /// Descending → neutral → ascending → descending.
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::Descending => Self::Neutral,
            Self::Neutral => Self::Ascending,
            Self::Ascending => Self::Descending,
        }
    }

    /// Stable sort of `records` by `key`. Neutral leaves the order untouched.
    pub fn apply(self, records: &mut [User], key: fn(&User) -> &str) {
        match self {
            Self::Descending => records.sort_by(|a, b| collate(key(b), key(a))),
            Self::Ascending => records.sort_by(|a, b| collate(key(a), key(b))),
            Self::Neutral => {}
        }
    }
}

/// Case-insensitive ordering; keys differing only in case fall back to byte order.
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Sort directives for the two sortable columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub name: SortDirective,
    pub email: SortDirective,
}

fn by_name(user: &User) -> &str {
    &user.name
}

fn by_email(user: &User) -> &str {
    &user.email
}

/// Derived list state and the recomputation pipeline.
#[derive(Debug, Clone)]
pub struct ListViewModel {
    working: Vec<User>,
    page: usize,
    total_pages: usize,
    page_size: PageSize,
    query: String,
    filters: Vec<String>,
    sort: SortState,
    filter_panel_open: bool,
}

impl Default for ListViewModel {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl ListViewModel {
    #[must_use]
    pub const fn new(page_size: PageSize) -> Self {
        Self {
            working: Vec::new(),
            page: 1,
            total_pages: 0,
            page_size,
            query: String::new(),
            filters: Vec::new(),
            sort: SortState {
                name: SortDirective::Neutral,
                email: SortDirective::Neutral,
            },
            filter_panel_open: false,
        }
    }

    /// Rebuilds the working list from `store` and re-paginates.
    pub fn recompute(&mut self, store: &RecordStore) {
        let _span = tracing::debug_span!(
            "list_recompute",
            records = store.len(),
            query_len = self.query.len(),
            filters = self.filters.len(),
        )
        .entered();

        let needle = self.query.to_lowercase();
        let has_query = !self.query.trim().is_empty();

        let base: Vec<&User> = if has_query {
            store.iter().filter(|u| u.matches_query(&needle)).collect()
        } else {
            store.iter().collect()
        };

        let narrowed: Vec<&User> = if self.filters.is_empty() {
            base.clone()
        } else {
            let mut seen: HashSet<UserId> = HashSet::new();
            base.iter()
                .copied()
                .filter(|u| self.filters.iter().any(|t| u.matches_token(t)))
                .filter(|u| seen.insert(u.id))
                .collect()
        };

        let selected = if narrowed.is_empty() && !has_query && self.filters.is_empty() {
            base
        } else {
            narrowed
        };

        self.working = selected.into_iter().cloned().collect();
        self.sort.name.apply(&mut self.working, by_name);
        self.sort.email.apply(&mut self.working, by_email);
        self.repaginate();

        tracing::debug!(
            count = self.working.len(),
            page = self.page,
            total_pages = self.total_pages,
            "list recomputed"
        );
    }

    fn repaginate(&mut self) {
        self.total_pages = self.working.len().div_ceil(self.page_size.get());
        if self.page == 0 || self.page > self.total_pages {
            self.page = 1;
        }
    }

    /// Replaces the search query and recomputes.
    pub fn set_query(&mut self, query: impl Into<String>, store: &RecordStore) {
        self.query = query.into();
        self.recompute(store);
    }

    pub fn push_query_char(&mut self, c: char, store: &RecordStore) {
        self.query.push(c);
        self.recompute(store);
    }

    pub fn pop_query_char(&mut self, store: &RecordStore) {
        self.query.pop();
        self.recompute(store);
    }

    /// Adds `token` to the active set, or removes it if already present.
    pub fn toggle_filter(&mut self, token: &str, store: &RecordStore) {
        if let Some(pos) = self.filters.iter().position(|t| t == token) {
            self.filters.remove(pos);
        } else {
            self.filters.push(token.to_string());
        }
        tracing::debug!(token, active = self.filters.len(), "filter toggled");
        self.recompute(store);
    }

    pub fn clear_filters(&mut self, store: &RecordStore) {
        self.filters.clear();
        self.recompute(store);
    }

    pub fn cycle_name_sort(&mut self, store: &RecordStore) {
        self.sort.name = self.sort.name.cycle();
        self.recompute(store);
    }

    pub fn cycle_email_sort(&mut self, store: &RecordStore) {
        self.sort.email = self.sort.email.cycle();
        self.recompute(store);
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.repaginate();
    }

    /// Moves by `delta` pages without clamping.
    ///
    /// Callers check [`can_go_back`](Self::can_go_back) or
    /// [`can_go_forward`](Self::can_go_forward) first.
    pub fn change_page(&mut self, delta: isize) {
        self.page = self.page.saturating_add_signed(delta);
    }

    #[must_use]
    pub const fn can_go_back(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub const fn can_go_forward(&self) -> bool {
        self.page < self.total_pages
    }

    /// Records on the current page.
    #[must_use]
    pub fn visible_page(&self) -> &[User] {
        let size = self.page_size.get();
        let start = self.page.saturating_sub(1).saturating_mul(size).min(self.working.len());
        let end = start.saturating_add(size).min(self.working.len());
        &self.working[start..end]
    }

    pub fn open_filter_panel(&mut self) {
        self.filter_panel_open = true;
    }

    pub fn close_filter_panel(&mut self) {
        self.filter_panel_open = false;
    }

    pub fn toggle_filter_panel(&mut self) {
        self.filter_panel_open = !self.filter_panel_open;
    }

    /// Focus moved outside the plugin; any open panel closes.
    pub fn focus_lost(&mut self) {
        self.close_filter_panel();
    }

    #[must_use]
    pub fn working(&self) -> &[User] {
        &self.working
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    #[must_use]
    pub const fn page_size(&self) -> PageSize {
        self.page_size
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn filters(&self) -> &[String] {
        &self.filters
    }

    #[must_use]
    pub fn is_filter_active(&self, token: &str) -> bool {
        self.filters.iter().any(|t| t == token)
    }

    #[must_use]
    pub const fn sort(&self) -> SortState {
        self.sort
    }

    #[must_use]
    pub const fn filter_panel_open(&self) -> bool {
        self.filter_panel_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_of(names: &[&str]) -> RecordStore {
        let mut store = RecordStore::new();
        let users = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let mut u = User::empty(i64::try_from(i).unwrap_or(0) + 1);
                u.name = (*name).to_string();
                u.email = format!("{}@example.com", name.to_lowercase());
                u
            })
            .collect();
        store.seed(users);
        store
    }

    #[test]
    fn page_size_cycles_and_parses() {
        assert_eq!(PageSize::Ten.next(), PageSize::Two);
        assert_eq!(PageSize::try_from(10).unwrap(), PageSize::Ten);
        assert!(PageSize::try_from(7).is_err());
    }

    #[test]
    fn sort_directive_cycle_has_period_three() {
        let start = SortDirective::Descending;
        assert_eq!(start.cycle(), SortDirective::Neutral);
        assert_eq!(start.cycle().cycle(), SortDirective::Ascending);
        assert_eq!(start.cycle().cycle().cycle(), start);
    }

    #[test]
    fn sort_change_keeps_current_page() {
        let store = store_of(&["a", "b", "c", "d", "e", "f", "g"]);
        let mut list = ListViewModel::new(PageSize::Two);
        list.recompute(&store);
        list.change_page(2);
        assert_eq!(list.page(), 3);

        list.cycle_name_sort(&store);
        assert_eq!(list.page(), 3);
        assert_eq!(list.visible_page()[0].name, "e");
    }

    #[test]
    fn name_sort_ignores_case() {
        let store = store_of(&["Zed", "alice", "Bob", "bob"]);
        let mut list = ListViewModel::default();
        list.recompute(&store);

        list.cycle_name_sort(&store);
        let names: Vec<&str> = list.working().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["alice", "Bob", "bob", "Zed"]);

        list.cycle_name_sort(&store);
        let names: Vec<&str> = list.working().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Zed", "bob", "Bob", "alice"]);
    }

    #[test]
    fn page_size_change_clamps_page() {
        let store = store_of(&["a", "b", "c", "d", "e", "f", "g"]);
        let mut list = ListViewModel::new(PageSize::Two);
        list.recompute(&store);
        list.change_page(3);
        assert_eq!(list.page(), 4);

        list.set_page_size(PageSize::Five);
        assert_eq!(list.total_pages(), 2);
        assert_eq!(list.page(), 1);
    }

    #[test]
    fn navigation_guards_follow_boundaries() {
        let store = store_of(&["a", "b", "c"]);
        let mut list = ListViewModel::new(PageSize::Two);
        list.recompute(&store);

        assert!(!list.can_go_back());
        assert!(list.can_go_forward());
        list.change_page(1);
        assert!(list.can_go_back());
        assert!(!list.can_go_forward());
    }

    #[test]
    fn unclamped_page_yields_empty_slice() {
        let store = store_of(&["a", "b", "c"]);
        let mut list = ListViewModel::new(PageSize::Two);
        list.recompute(&store);
        list.change_page(10);
        assert!(list.visible_page().is_empty());
    }

    #[test]
    fn empty_store_has_zero_pages_and_page_one() {
        let store = RecordStore::new();
        let mut list = ListViewModel::default();
        list.recompute(&store);
        assert_eq!(list.total_pages(), 0);
        assert_eq!(list.page(), 1);
        assert!(list.visible_page().is_empty());
    }

    #[test]
    fn whitespace_query_is_treated_as_empty() {
        let store = store_of(&["Ann", "Bob"]);
        let mut list = ListViewModel::default();
        list.set_query("   ", &store);
        assert_eq!(list.working().len(), 2);
    }

    #[test]
    fn query_matching_uses_untrimmed_text() {
        let store = store_of(&["Ann Lee", "Bob"]);
        let mut list = ListViewModel::default();
        list.set_query("ann ", &store);
        assert_eq!(list.working().len(), 1);
        list.set_query(" bob", &store);
        assert!(list.working().is_empty());
    }

    #[test]
    fn toggling_a_filter_twice_removes_it() {
        let store = store_of(&["Ann"]);
        let mut list = ListViewModel::default();
        list.toggle_filter("Paris", &store);
        assert!(list.is_filter_active("Paris"));
        list.toggle_filter("Paris", &store);
        assert!(list.filters().is_empty());
    }

    #[test]
    fn focus_loss_closes_panel() {
        let mut list = ListViewModel::default();
        list.toggle_filter_panel();
        assert!(list.filter_panel_open());
        list.focus_lost();
        assert!(!list.filter_panel_open());
    }
}
