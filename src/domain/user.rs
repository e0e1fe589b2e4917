//! User record domain model.
//!
//! The shape mirrors the JSON served by the users endpoint: nested address, geo,
//! and company objects with string fields. Every string field defaults to empty
//! when missing so partially filled payloads still decode.

use serde::{Deserialize, Serialize};

/// Identifier of a user record. Unique within the record store and never changed
/// after creation.
pub type UserId = i64;

/// A single directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub company: Company,
}

/// Postal address with optional coordinates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub suite: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zipcode: String,
    #[serde(default)]
    pub geo: Geo,
}

/// Coordinates kept as decimal strings, exactly as entered or generated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geo {
    #[serde(default)]
    pub lat: String,
    #[serde(default)]
    pub lng: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "catchPhrase")]
    pub catch_phrase: String,
    #[serde(default)]
    pub bs: String,
}

impl User {
    /// Creates a record with the given identifier and every other field empty.
    #[must_use]
    pub fn empty(id: UserId) -> Self {
        Self {
            id,
            name: String::new(),
            username: String::new(),
            email: String::new(),
            address: Address::default(),
            phone: String::new(),
            website: String::new(),
            company: Company::default(),
        }
    }

    /// One-line address used by the list table: `street, city, zipcode`.
    #[must_use]
    pub fn address_line(&self) -> String {
        format!(
            "{}, {}, {}",
            self.address.street, self.address.city, self.address.zipcode
        )
    }

    /// Case-insensitive substring match against name, email, and company name.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn matches_query(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
            || self.company.name.to_lowercase().contains(needle)
    }

    /// Case-insensitive substring match of a filter token against city or company.
    #[must_use]
    pub fn matches_token(&self, token: &str) -> bool {
        let token = token.to_lowercase();
        self.address.city.to_lowercase().contains(&token)
            || self.company.name.to_lowercase().contains(&token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    }"#;

    #[test]
    fn decodes_api_payload() {
        let user: User = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.address.geo.lat, "-37.3159");
        assert_eq!(user.company.catch_phrase, "Multi-layered client-server neural-net");
    }

    #[test]
    fn missing_fields_decode_as_empty() {
        let user: User = serde_json::from_str(r#"{"id": 9, "name": "Solo"}"#).unwrap();
        assert_eq!(user, User { name: "Solo".into(), ..User::empty(9) });
    }

    #[test]
    fn query_matches_company_case_insensitively() {
        let user: User = serde_json::from_str(SAMPLE).unwrap();
        assert!(user.matches_query("romaguera"));
        assert!(user.matches_query("april.biz"));
        assert!(!user.matches_query("gwenborough"));
    }

    #[test]
    fn token_matches_city_or_company() {
        let user: User = serde_json::from_str(SAMPLE).unwrap();
        assert!(user.matches_token("GWEN"));
        assert!(user.matches_token("crona"));
        assert!(!user.matches_token("bret"));
    }

    #[test]
    fn address_line_joins_street_city_zip() {
        let user: User = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(user.address_line(), "Kulas Light, Gwenborough, 92998-3874");
    }
}
