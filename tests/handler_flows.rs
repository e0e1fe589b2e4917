//! End-to-end flows through `handle_event`, from fetch to edits and mode persistence.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rstest::{fixture, rstest};
use userspot::app::modes::{FetchStatus, InputMode, Screen, SearchFocus};
use userspot::app::FormField;
use userspot::domain::NotificationKind;
use userspot::store::{load_or_default, DisplayMode, MemoryModeStore, ModeStore};
use userspot::ui::{Body, ThemeSet};
use userspot::{handle_event, Action, AppState, Event, User};

fn user(id: i64, name: &str, email: &str, city: &str, company: &str) -> User {
    let mut u = User::empty(id);
    u.name = name.to_string();
    u.email = email.to_string();
    u.address.city = city.to_string();
    u.company.name = company.to_string();
    u
}

fn directory() -> Vec<User> {
    vec![
        user(1, "Leanne Graham", "Sincere@april.biz", "Gwenborough", "Romaguera-Crona"),
        user(2, "Ervin Howell", "Shanna@melissa.tv", "Wisokyburgh", "Deckow-Crist"),
        user(3, "Clementine Bauch", "Nathan@yesenia.net", "McKenziehaven", "Romaguera-Jacobson"),
        user(4, "Patricia Lebsack", "Julianne.OConner@kory.org", "South Elvis", "Robel-Corkery"),
        user(5, "Chelsey Dietrich", "Lucio_Hettinger@annie.ca", "Roscoeview", "Keebler LLC"),
        user(6, "Mrs. Dennis Schulist", "Karley_Dach@jasper.info", "South Christy", "Considine-Lockman"),
        user(7, "Kurtis Weissnat", "Telly.Hoeger@billy.biz", "Howemouth", "Johns Group"),
    ]
}

fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    handle_event(state, &event).unwrap()
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        send(state, Event::Char(c));
    }
}

#[fixture]
fn fresh() -> AppState {
    AppState::new(ThemeSet::default(), DisplayMode::Dark).with_rng(SmallRng::seed_from_u64(7))
}

#[fixture]
fn loaded(mut fresh: AppState) -> AppState {
    send(&mut fresh, Event::ListMounted);
    send(&mut fresh, Event::UsersFetched { users: directory() });
    fresh
}

#[rstest]
fn list_mount_fetches_once(mut fresh: AppState) {
    let (render, actions) = send(&mut fresh, Event::ListMounted);
    assert!(render);
    assert_eq!(
        actions,
        vec![Action::FetchUsers {
            url: "https://jsonplaceholder.typicode.com/users".to_string()
        }]
    );
    assert!(fresh.fetch.is_loading());
    assert_eq!(fresh.compute_viewmodel(24, 80).body, Body::Loading);

    let (_, actions) = send(&mut fresh, Event::ListMounted);
    assert!(actions.is_empty(), "fetch already in flight");

    send(&mut fresh, Event::UsersFetched { users: directory() });
    assert_eq!(fresh.fetch, FetchStatus::Loaded);
    assert_eq!(fresh.records.len(), 7);

    let (_, actions) = send(&mut fresh, Event::ListMounted);
    assert!(actions.is_empty(), "store already populated");
}

#[rstest]
fn denied_permission_never_fetches(mut fresh: AppState) {
    let (render, actions) = send(&mut fresh, Event::PermissionsResult { granted: false });
    assert!(!render);
    assert!(actions.is_empty());
    assert_eq!(fresh.fetch, FetchStatus::Idle);
}

#[rstest]
fn failed_fetch_shows_error_and_notifies(mut fresh: AppState) {
    send(&mut fresh, Event::ListMounted);
    let (_, actions) = send(
        &mut fresh,
        Event::FetchFailed {
            error: "server responded with status 500".to_string(),
        },
    );

    assert!(matches!(actions.as_slice(), [Action::ScheduleNotificationExpiry { .. }]));
    let card = fresh.notifications.latest().unwrap();
    assert_eq!(card.kind, NotificationKind::Error);
    assert_eq!(card.message, "Error: server responded with status 500");
    assert!(matches!(fresh.compute_viewmodel(24, 80).body, Body::Error(_)));
}

#[rstest]
fn failed_fetch_is_not_retried_on_remount(mut fresh: AppState) {
    send(&mut fresh, Event::ListMounted);
    send(
        &mut fresh,
        Event::FetchFailed {
            error: "Fetch error: server responded with status 503".to_string(),
        },
    );

    let (_, actions) = send(&mut fresh, Event::ListMounted);
    assert!(actions.is_empty());
    assert!(matches!(fresh.fetch, FetchStatus::Failed(_)));
}

#[rstest]
fn emptied_store_fetches_again_on_remount(mut loaded: AppState) {
    for _ in 0..7 {
        send(&mut loaded, Event::RequestDelete);
        send(&mut loaded, Event::ConfirmDelete);
    }
    assert!(loaded.records.is_empty());

    let (_, actions) = send(&mut loaded, Event::ListMounted);
    assert!(matches!(actions.as_slice(), [Action::FetchUsers { .. }]));
}

#[rstest]
fn add_user_requires_fields_then_appends(mut loaded: AppState) {
    send(&mut loaded, Event::NewUser);
    assert_eq!(loaded.input_mode, InputMode::Form);

    type_text(&mut loaded, "Zed");
    let (render, actions) = send(&mut loaded, Event::SubmitForm);
    assert!(render);
    assert!(actions.is_empty());
    let form = loaded.form.as_ref().unwrap();
    assert_eq!(form.error_for(FormField::Name), None);
    assert_eq!(form.error_for(FormField::Email), Some("Email is required"));
    assert_eq!(form.errors().len(), 5);

    for (field, text) in [
        (FormField::Username, "zed"),
        (FormField::Email, "zed@example.com"),
        (FormField::Street, "Main St"),
        (FormField::City, "Zion"),
        (FormField::Zipcode, "84767"),
    ] {
        while loaded.form.as_ref().unwrap().focused() != field {
            send(&mut loaded, Event::NextField);
        }
        type_text(&mut loaded, text);
    }

    let (_, actions) = send(&mut loaded, Event::SubmitForm);
    assert!(matches!(actions.as_slice(), [Action::ScheduleNotificationExpiry { .. }]));
    assert_eq!(loaded.input_mode, InputMode::Normal);
    assert!(loaded.form.is_none());
    assert_eq!(loaded.records.len(), 8);
    assert_eq!(loaded.notifications.latest().unwrap().message, "User added.");

    let added = loaded.records.records().last().unwrap();
    assert_eq!(added.name, "Zed");
    assert_eq!(added.address.city, "Zion");
    assert!(added.id > 7);
}

#[rstest]
fn generated_coordinates_fill_read_only_fields(mut loaded: AppState) {
    send(&mut loaded, Event::NewUser);
    let (render, _) = send(&mut loaded, Event::GenerateCoordinates);
    assert!(render);

    let form = loaded.form.as_ref().unwrap();
    let lat: f64 = form.value(FormField::Lat).parse().unwrap();
    let lng: f64 = form.value(FormField::Lng).parse().unwrap();
    assert!((-90.0..=90.0).contains(&lat));
    assert!((-180.0..=180.0).contains(&lng));
}

#[rstest]
fn edit_from_detail_replaces_record(mut loaded: AppState) {
    send(&mut loaded, Event::OpenDetail);
    assert_eq!(loaded.screen, Screen::Detail(1));

    send(&mut loaded, Event::EditUser);
    assert_eq!(loaded.form.as_ref().unwrap().value(FormField::Name), "Leanne Graham");

    for _ in 0.."Graham".len() {
        send(&mut loaded, Event::Backspace);
    }
    type_text(&mut loaded, "Bret");
    send(&mut loaded, Event::SubmitForm);

    assert_eq!(loaded.records.get(1).unwrap().name, "Leanne Bret");
    assert_eq!(loaded.records.len(), 7);
    assert_eq!(loaded.notifications.latest().unwrap().message, "User updated.");
    assert_eq!(loaded.screen, Screen::Detail(1));
}

#[rstest]
fn confirmed_delete_from_detail_returns_to_list(mut loaded: AppState) {
    send(&mut loaded, Event::KeyDown);
    send(&mut loaded, Event::OpenDetail);
    send(&mut loaded, Event::RequestDelete);
    assert_eq!(loaded.input_mode, InputMode::ConfirmDelete(2));

    let confirm = loaded.compute_viewmodel(24, 80).confirm.unwrap();
    assert_eq!(confirm.message, "Delete Ervin Howell data it can't be recovered.");

    send(&mut loaded, Event::ConfirmDelete);
    assert!(loaded.records.get(2).is_none());
    assert!(loaded.list.working().iter().all(|u| u.id != 2));
    assert!(loaded.list.visible_page().iter().all(|u| u.id != 2));
    assert_eq!(loaded.screen, Screen::List);
    assert_eq!(loaded.notifications.latest().unwrap().message, "User deleted.");
}

#[rstest]
fn cancelled_delete_keeps_record(mut loaded: AppState) {
    send(&mut loaded, Event::RequestDelete);
    send(&mut loaded, Event::Escape);
    assert_eq!(loaded.input_mode, InputMode::Normal);
    assert_eq!(loaded.records.len(), 7);
}

#[rstest]
fn page_change_resets_row_cursor(mut loaded: AppState) {
    send(&mut loaded, Event::KeyDown);
    send(&mut loaded, Event::KeyDown);
    assert_eq!(loaded.selected_row, 2);

    let (render, _) = send(&mut loaded, Event::NextPage);
    assert!(render);
    assert_eq!(loaded.list.page(), 2);
    assert_eq!(loaded.selected_row, 0);

    let (render, _) = send(&mut loaded, Event::NextPage);
    assert!(!render, "already on the last page");
    assert_eq!(loaded.list.page(), 2);
}

#[rstest]
fn search_then_browse_results(mut loaded: AppState) {
    send(&mut loaded, Event::SearchMode);
    type_text(&mut loaded, "kurt");
    assert_eq!(loaded.list.working().len(), 1);

    send(&mut loaded, Event::FocusResults);
    assert_eq!(loaded.input_mode, InputMode::Search(SearchFocus::Navigating));

    send(&mut loaded, Event::OpenDetail);
    assert_eq!(loaded.screen, Screen::Detail(7));

    send(&mut loaded, Event::Escape);
    assert_eq!(loaded.screen, Screen::List);
}

#[rstest]
fn exit_search_restores_full_list(mut loaded: AppState) {
    send(&mut loaded, Event::SearchMode);
    type_text(&mut loaded, "acme");
    assert!(loaded.list.working().is_empty());

    send(&mut loaded, Event::Escape);
    assert_eq!(loaded.input_mode, InputMode::Normal);
    assert_eq!(loaded.list.query(), "");
    assert_eq!(loaded.list.working().len(), 7);
}

#[rstest]
fn filter_panel_toggles_token_and_closes_on_focus_loss(mut loaded: AppState) {
    send(&mut loaded, Event::ToggleFilterPanel);
    assert_eq!(loaded.input_mode, InputMode::FilterPanel);

    send(&mut loaded, Event::KeyDown);
    assert_eq!(loaded.filter_option_at_cursor().as_deref(), Some("Wisokyburgh"));

    send(&mut loaded, Event::ToggleFilterOption);
    assert_eq!(loaded.list.working().len(), 1);

    let (render, _) = send(&mut loaded, Event::FocusLost);
    assert!(render);
    assert!(!loaded.list.filter_panel_open());
    assert_eq!(loaded.input_mode, InputMode::Normal);
    assert_eq!(loaded.list.filters(), ["Wisokyburgh".to_string()]);
}

#[rstest]
#[case(Event::Escape)]
#[case(Event::ToggleFilterPanel)]
fn closing_filter_panel_returns_to_list_keys(mut loaded: AppState, #[case] close: Event) {
    send(&mut loaded, Event::ToggleFilterPanel);
    send(&mut loaded, Event::KeyDown);
    assert_eq!(loaded.filter_cursor, 1);

    send(&mut loaded, close);
    assert!(!loaded.list.filter_panel_open());
    assert_eq!(loaded.input_mode, InputMode::Normal);

    send(&mut loaded, Event::KeyDown);
    assert_eq!(loaded.selected_row, 1);
    assert_eq!(loaded.filter_cursor, 1);
}

#[rstest]
fn mode_toggle_persists_through_store(mut loaded: AppState) {
    let mut store = MemoryModeStore::default();

    let (_, actions) = send(&mut loaded, Event::ToggleMode);
    assert_eq!(actions, vec![Action::PersistMode(DisplayMode::Light)]);

    for action in actions {
        if let Action::PersistMode(mode) = action {
            store.save(mode).unwrap();
        }
    }

    assert_eq!(load_or_default(&store), DisplayMode::Light);
    assert_eq!(loaded.theme().name, "userspot-light");
    assert_eq!(loaded.compute_viewmodel(24, 80).header.mode_label, "light");
}

#[rstest]
fn dismissed_card_expires_as_no_op(mut loaded: AppState) {
    send(&mut loaded, Event::RequestDelete);
    send(&mut loaded, Event::ConfirmDelete);
    send(&mut loaded, Event::RequestDelete);
    send(&mut loaded, Event::ConfirmDelete);
    assert_eq!(loaded.notifications.len(), 2);

    let (render, _) = send(&mut loaded, Event::DismissNotification);
    assert!(render);
    assert_eq!(loaded.notifications.len(), 1);

    let (render, _) = send(&mut loaded, Event::NotificationExpired);
    assert!(render, "first card expires");
    assert!(loaded.notifications.is_empty());

    let (render, _) = send(&mut loaded, Event::NotificationExpired);
    assert!(!render, "second card was already dismissed");
    assert_eq!(loaded.notifications.pending_expiries(), 0);
}

#[rstest]
fn close_focus_hides_plugin(mut loaded: AppState) {
    let (render, actions) = send(&mut loaded, Event::CloseFocus);
    assert!(!render);
    assert_eq!(actions, vec![Action::CloseFocus]);
}
