//! Domain layer for the UserSpot plugin.
//!
//! Core record and notification types plus the crate error, independent of the
//! Zellij API and of how records are stored or rendered.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`user`]: User record model and its matching rules
//! - [`notification`]: Notification cards and their kinds
//!
//! # Examples
//!
//! ```
//! use userspot::domain::{User, Result};
//!
//! fn blank() -> Result<User> {
//!     Ok(User::empty(42))
//! }
//! assert_eq!(blank().unwrap().id, 42);
//! ```

pub mod error;
pub mod notification;
pub mod user;

pub use error::{Result, UserspotError};
pub use notification::{NotificationCard, NotificationKind};
pub use user::{Address, Company, Geo, User, UserId};
