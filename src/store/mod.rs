//! Session state stores.
//!
//! Holds the authoritative record collection, the notification queue with its
//! expiry slots, and the persisted display mode.
//!
//! # Modules
//!
//! - `records`: In-memory user records (seed, add, update, delete)
//! - `notifications`: Notification cards and their FIFO expiry queue
//! - `mode`: Light/dark display mode
//! - `backend`: Persistence trait for the display mode
//! - `json`: JSON file and in-memory mode store implementations

pub mod backend;
pub mod json;
pub mod mode;
pub mod notifications;
pub mod records;

pub use backend::{load_or_default, ModeStore};
pub use json::{JsonModeStore, MemoryModeStore};
pub use mode::DisplayMode;
pub use notifications::{ExpiryQueue, NotificationQueue, NOTIFICATION_TTL_SECS};
pub use records::{FilterOptions, RecordStore};
