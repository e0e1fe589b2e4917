//! Create/edit form model.
//!
//! Holds the text of every editable user field, the focused field, and the
//! per-field validation messages from the last submit attempt. Coordinates are
//! read-only for typing and only change through [`UserForm::generate_coordinates`].

use crate::domain::{Address, Company, Geo, User, UserId};
use rand::Rng;
use std::collections::BTreeMap;

/// Per-field validation messages.
pub type FieldErrors = BTreeMap<FormField, &'static str>;

/// Whether the form creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Create,
    Edit(UserId),
}

/// Editable fields, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Username,
    Email,
    Phone,
    Website,
    Street,
    Suite,
    City,
    Zipcode,
    Lat,
    Lng,
    CompanyName,
    CatchPhrase,
    Bs,
}

impl FormField {
    pub const ALL: [Self; 14] = [
        Self::Name,
        Self::Username,
        Self::Email,
        Self::Phone,
        Self::Website,
        Self::Street,
        Self::Suite,
        Self::City,
        Self::Zipcode,
        Self::Lat,
        Self::Lng,
        Self::CompanyName,
        Self::CatchPhrase,
        Self::Bs,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Website => "Website",
            Self::Street => "Street",
            Self::Suite => "Suite",
            Self::City => "City",
            Self::Zipcode => "Zipcode",
            Self::Lat => "Latitude",
            Self::Lng => "Longitude",
            Self::CompanyName => "Company",
            Self::CatchPhrase => "Catch phrase",
            Self::Bs => "BS",
        }
    }

    /// Message shown when a required field is blank. `None` for optional fields.
    #[must_use]
    pub const fn required_message(self) -> Option<&'static str> {
        match self {
            Self::Name => Some("Name is required"),
            Self::Username => Some("Username is required"),
            Self::Email => Some("Email is required"),
            Self::Street => Some("Street is required"),
            Self::City => Some("City is required"),
            Self::Zipcode => Some("Zipcode is required"),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_required(self) -> bool {
        self.required_message().is_some()
    }

    #[must_use]
    pub const fn is_read_only(self) -> bool {
        matches!(self, Self::Lat | Self::Lng)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Form state for the add and edit screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
    kind: FormKind,
    values: [String; 14],
    focus: usize,
    errors: FieldErrors,
}

impl UserForm {
    /// Empty form for a new record.
    #[must_use]
    pub fn create() -> Self {
        Self {
            kind: FormKind::Create,
            values: Default::default(),
            focus: 0,
            errors: FieldErrors::new(),
        }
    }

    /// Form prefilled from an existing record.
    #[must_use]
    pub fn edit(user: &User) -> Self {
        let mut form = Self {
            kind: FormKind::Edit(user.id),
            ..Self::create()
        };
        let pairs = [
            (FormField::Name, &user.name),
            (FormField::Username, &user.username),
            (FormField::Email, &user.email),
            (FormField::Phone, &user.phone),
            (FormField::Website, &user.website),
            (FormField::Street, &user.address.street),
            (FormField::Suite, &user.address.suite),
            (FormField::City, &user.address.city),
            (FormField::Zipcode, &user.address.zipcode),
            (FormField::Lat, &user.address.geo.lat),
            (FormField::Lng, &user.address.geo.lng),
            (FormField::CompanyName, &user.company.name),
            (FormField::CatchPhrase, &user.company.catch_phrase),
            (FormField::Bs, &user.company.bs),
        ];
        for (field, value) in pairs {
            form.values[field.index()].clone_from(value);
        }
        form
    }

    #[must_use]
    pub const fn kind(&self) -> FormKind {
        self.kind
    }

    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        &self.values[field.index()]
    }

    #[must_use]
    pub const fn focused(&self) -> FormField {
        FormField::ALL[self.focus]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % FormField::ALL.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.checked_sub(1).unwrap_or(FormField::ALL.len() - 1);
    }

    /// Types into the focused field. Ignored on read-only fields.
    pub fn insert_char(&mut self, c: char) {
        let field = self.focused();
        if field.is_read_only() {
            return;
        }
        self.values[field.index()].push(c);
        self.errors.remove(&field);
    }

    pub fn backspace(&mut self) {
        let field = self.focused();
        if field.is_read_only() {
            return;
        }
        self.values[field.index()].pop();
    }

    /// Fills latitude in [-90, 90] and longitude in [-180, 180], six decimals each.
    pub fn generate_coordinates<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let lat: f64 = rng.gen_range(-90.0..=90.0);
        let lng: f64 = rng.gen_range(-180.0..=180.0);
        self.values[FormField::Lat.index()] = format!("{lat:.6}");
        self.values[FormField::Lng.index()] = format!("{lng:.6}");
        tracing::debug!(lat, lng, "coordinates generated");
    }

    /// Checks required fields and records a message for each empty one.
    ///
    /// Presence only: a value of spaces counts as filled.
    ///
    /// Returns `true` when the form can be submitted.
    pub fn validate(&mut self) -> bool {
        self.errors = FormField::ALL
            .into_iter()
            .filter_map(|f| {
                let message = f.required_message()?;
                self.value(f).is_empty().then_some((f, message))
            })
            .collect();
        self.errors.is_empty()
    }

    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub fn error_for(&self, field: FormField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Builds the record this form describes.
    #[must_use]
    pub fn to_user(&self, id: UserId) -> User {
        let v = |f: FormField| self.value(f).to_string();
        User {
            id,
            name: v(FormField::Name),
            username: v(FormField::Username),
            email: v(FormField::Email),
            address: Address {
                street: v(FormField::Street),
                suite: v(FormField::Suite),
                city: v(FormField::City),
                zipcode: v(FormField::Zipcode),
                geo: Geo {
                    lat: v(FormField::Lat),
                    lng: v(FormField::Lng),
                },
            },
            phone: v(FormField::Phone),
            website: v(FormField::Website),
            company: Company {
                name: v(FormField::CompanyName),
                catch_phrase: v(FormField::CatchPhrase),
                bs: v(FormField::Bs),
            },
        }
    }
}
