//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the domain and store layers.
//! Data flows one way:
//!
//! ```text
//! Key / WebRequestResult / Timer → Event → handle_event → AppState → Actions
//!                                                            │
//!                                              compute_viewmodel → renderer
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`detail`]: Single-record view-model
//! - [`form`]: Add and edit form with validation
//! - [`handler`]: Event processing and state transitions
//! - [`list`]: Search, filter, sort, and pagination over the record store
//! - [`modes`]: Screen, input mode, and fetch status types
//! - [`state`]: Central state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use userspot::app::{handle_event, AppState, Event};
//! use userspot::store::DisplayMode;
//! use userspot::ui::theme::ThemeSet;
//!
//! let mut state = AppState::new(ThemeSet::default(), DisplayMode::Light);
//! let (_, actions) = handle_event(&mut state, &Event::ToggleMode)?;
//! assert_eq!(state.mode, DisplayMode::Dark);
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), userspot::UserspotError>(())
//! ```

pub mod actions;
pub mod detail;
pub mod form;
pub mod handler;
pub mod list;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use detail::DetailViewModel;
pub use form::{FormField, FormKind, UserForm};
pub use handler::{handle_event, Event};
pub use list::{ListViewModel, PageSize, SortDirective, SortState};
pub use modes::{FetchStatus, InputMode, Screen, SearchFocus};
pub use state::AppState;
