//! Users endpoint URL construction and response decoding.
//!
//! The plugin shim issues the request through Zellij's `web_request` and hands
//! the raw status and body to [`decode_users`]; nothing here performs I/O.

use crate::domain::error::{Result, UserspotError};
use crate::domain::User;

/// Builds the users collection URL from a base URL.
///
/// # Examples
///
/// ```
/// use userspot::infrastructure::users_url;
///
/// assert_eq!(
///     users_url("https://jsonplaceholder.typicode.com/"),
///     "https://jsonplaceholder.typicode.com/users"
/// );
/// ```
#[must_use]
pub fn users_url(base: &str) -> String {
    format!("{}/users", base.trim().trim_end_matches('/'))
}

/// Decodes a users response.
///
/// # Errors
///
/// - [`UserspotError::Fetch`] for a non-2xx status
/// - [`UserspotError::Decode`] if the body is not a JSON array of users
pub fn decode_users(status: u16, body: &[u8]) -> Result<Vec<User>> {
    if !(200..300).contains(&status) {
        return Err(UserspotError::Fetch(format!("server responded with status {status}")));
    }

    let users: Vec<User> = serde_json::from_slice(body)?;
    tracing::debug!(count = users.len(), "decoded users response");
    Ok(users)
}
