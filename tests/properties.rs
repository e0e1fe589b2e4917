//! Pipeline invariants over generated directories.

use proptest::prelude::*;
use std::cmp::Ordering;
use userspot::app::list::{collate, ListViewModel, PageSize};
use userspot::store::{NotificationQueue, RecordStore};
use userspot::User;

fn record_strategy() -> impl Strategy<Value = (String, String, String, String)> {
    (
        "[A-Za-z][a-z]{0,7}( [A-Z][a-z]{1,7})?",
        "[a-z]{1,6}@[a-z]{1,5}\\.(com|org|biz)",
        prop_oneof![Just("Gwenborough"), Just("Howemouth"), Just("Roscoeview")],
        prop_oneof![Just("Romaguera-Crona"), Just("Keebler LLC"), Just("Johns Group")],
    )
        .prop_map(|(name, email, city, company)| (name, email, city.to_string(), company.to_string()))
}

fn store_from(rows: &[(String, String, String, String)]) -> RecordStore {
    let users = rows
        .iter()
        .enumerate()
        .map(|(idx, (name, email, city, company))| {
            let mut u = User::empty(i64::try_from(idx).unwrap_or(i64::MAX) + 1);
            u.name.clone_from(name);
            u.email.clone_from(email);
            u.address.city.clone_from(city);
            u.company.name.clone_from(company);
            u
        })
        .collect();
    let mut store = RecordStore::new();
    store.seed(users);
    store
}

fn page_size_strategy() -> impl Strategy<Value = PageSize> {
    prop_oneof![Just(PageSize::Two), Just(PageSize::Five), Just(PageSize::Ten)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn pages_cover_working_list_exactly(
        rows in prop::collection::vec(record_strategy(), 0..30),
        size in page_size_strategy(),
    ) {
        let store = store_from(&rows);
        let mut list = ListViewModel::default();
        list.set_page_size(size);
        list.recompute(&store);

        let expected_pages = rows.len().div_ceil(size.get());
        prop_assert_eq!(list.total_pages(), expected_pages);

        let mut seen = 0;
        for _ in 0..expected_pages {
            let page = list.visible_page();
            prop_assert!(page.len() <= size.get());
            prop_assert!(!page.is_empty());
            seen += page.len();
            list.change_page(1);
        }
        prop_assert_eq!(seen, list.working().len());
    }

    #[test]
    fn working_list_equals_matching_records(
        rows in prop::collection::vec(record_strategy(), 0..20),
        query in "[a-z]{0,3}",
        token in prop_oneof![Just("Gwenborough"), Just("Keebler LLC"), Just("Atlantis")],
    ) {
        let store = store_from(&rows);
        let mut list = ListViewModel::default();
        list.recompute(&store);
        list.set_query(query.as_str(), &store);
        list.toggle_filter(token, &store);

        let needle = query.to_lowercase();
        let has_query = !query.trim().is_empty();
        let expected: Vec<i64> = store
            .iter()
            .filter(|u| !has_query || u.matches_query(&needle))
            .filter(|u| u.matches_token(token))
            .map(|u| u.id)
            .collect();
        let working: Vec<i64> = list.working().iter().map(|u| u.id).collect();
        prop_assert_eq!(working, expected);
    }

    #[test]
    fn ascending_name_sort_is_ordered(rows in prop::collection::vec(record_strategy(), 0..20)) {
        let store = store_from(&rows);
        let mut list = ListViewModel::default();
        list.recompute(&store);
        list.cycle_name_sort(&store);

        let names: Vec<&str> = list.working().iter().map(|u| u.name.as_str()).collect();
        prop_assert!(names.windows(2).all(|w| collate(w[0], w[1]) != Ordering::Greater));
        prop_assert_eq!(names.len(), rows.len());
    }

    #[test]
    fn name_sort_is_stable_and_idempotent(
        picks in prop::collection::vec(0usize..3, 0..20),
        directive_steps in 1usize..3,
    ) {
        let pool = ["Ann", "ann", "Bea"];
        let rows: Vec<(String, String, String, String)> = picks
            .iter()
            .enumerate()
            .map(|(idx, pick)| {
                (
                    pool[*pick].to_string(),
                    format!("u{idx}@example.com"),
                    "Howemouth".to_string(),
                    "Johns Group".to_string(),
                )
            })
            .collect();
        let store = store_from(&rows);
        let mut list = ListViewModel::default();
        list.recompute(&store);
        for _ in 0..directive_steps {
            list.cycle_name_sort(&store);
        }

        let first: Vec<i64> = list.working().iter().map(|u| u.id).collect();
        for pair in list.working().windows(2) {
            if pair[0].name == pair[1].name {
                prop_assert!(pair[0].id < pair[1].id, "equal names keep store order");
            }
        }

        list.recompute(&store);
        let second: Vec<i64> = list.working().iter().map(|u| u.id).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn notification_ids_never_repeat(clock in prop::collection::vec(0i64..5, 1..20)) {
        let mut queue = NotificationQueue::default();
        let mut ids = Vec::new();
        for now in clock {
            ids.push(queue.next_id(now));
        }
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), ids.len());
    }
}
