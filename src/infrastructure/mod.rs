//! Infrastructure layer for the sandbox filesystem and the users endpoint.
//!
//! Paths account for the Zellij plugin sandbox, where the host filesystem is
//! mounted under `/host`. The API helpers are pure so the request itself stays
//! in the plugin shim.

pub mod api;
pub mod paths;

pub use api::{decode_users, users_url};
pub use paths::{expand_tilde, get_data_dir, mode_file_path, MODE_FILE};
