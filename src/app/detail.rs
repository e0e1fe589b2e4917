//! Detail view-model for a single record.

use crate::domain::{User, UserId};
use crate::store::RecordStore;

/// Field label/value pairs shown on the detail screen, in display order.
pub const DETAIL_LABELS: [&str; 12] = [
    "Name",
    "Username",
    "Email",
    "Phone",
    "Website",
    "Street",
    "Suite",
    "City",
    "Zipcode",
    "Geo",
    "Company",
    "Catch phrase",
];

/// Record currently addressed by the detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailViewModel {
    id: UserId,
}

impl DetailViewModel {
    #[must_use]
    pub const fn new(id: UserId) -> Self {
        Self { id }
    }

    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Looks the record up in `store`. A missing record is not an error.
    #[must_use]
    pub fn resolve<'a>(&self, store: &'a RecordStore) -> Option<&'a User> {
        store.get(self.id)
    }

    /// Values for [`DETAIL_LABELS`]. Every value is empty when the record is gone.
    #[must_use]
    pub fn fields(&self, store: &RecordStore) -> Vec<(&'static str, String)> {
        let values = self.resolve(store).map_or_else(
            || vec![String::new(); DETAIL_LABELS.len()],
            |u| {
                let geo = if u.address.geo.lat.is_empty() && u.address.geo.lng.is_empty() {
                    String::new()
                } else {
                    format!("{}, {}", u.address.geo.lat, u.address.geo.lng)
                };
                vec![
                    u.name.clone(),
                    u.username.clone(),
                    u.email.clone(),
                    u.phone.clone(),
                    u.website.clone(),
                    u.address.street.clone(),
                    u.address.suite.clone(),
                    u.address.city.clone(),
                    u.address.zipcode.clone(),
                    geo,
                    u.company.name.clone(),
                    u.company.catch_phrase.clone(),
                ]
            },
        );

        DETAIL_LABELS.into_iter().zip(values).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_existing_record() {
        let mut store = RecordStore::new();
        let mut user = User::empty(7);
        user.name = "Ervin Howell".into();
        user.address.geo.lat = "-43.9509".into();
        user.address.geo.lng = "-34.4618".into();
        store.add(user);

        let detail = DetailViewModel::new(7);
        assert_eq!(detail.resolve(&store).map(|u| u.name.as_str()), Some("Ervin Howell"));

        let fields = detail.fields(&store);
        assert_eq!(fields[0], ("Name", "Ervin Howell".to_string()));
        assert_eq!(fields[9].1, "-43.9509, -34.4618");
    }

    #[test]
    fn missing_record_renders_empty_fields() {
        let store = RecordStore::new();
        let detail = DetailViewModel::new(404);
        assert!(detail.resolve(&store).is_none());
        assert!(detail.fields(&store).iter().all(|(_, v)| v.is_empty()));
    }
}
