//! Directory entry data model.
//!
//! A [`UserRecord`] is a plain value: edits never mutate a record in place,
//! they produce a new record through [`UserRecord::with_field`]. The `id` is
//! fixed at construction and is the identity used when a draft is written
//! back into the collection.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Stable identifier of one directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw identifier as returned by the collection endpoint.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Access the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Employer shown on a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Company {
    /// Company display name.
    pub name: String,
}

/// Postal location shown on a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Address {
    /// Suite or apartment line.
    pub suite: String,
    /// City name.
    pub city: String,
}

/// Editable fields of a [`UserRecord`].
///
/// The identifier is deliberately absent: identity never changes across
/// edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    /// Full display name.
    Name,
    /// Handle, also the avatar seed.
    Username,
    /// Contact email.
    Email,
    /// Contact phone.
    Phone,
    /// Personal website.
    Website,
    /// `company.name`.
    CompanyName,
    /// `address.suite`.
    AddressSuite,
    /// `address.city`.
    AddressCity,
}

impl UserField {
    /// Every editable field, in display order.
    pub const ALL: [Self; 8] = [
        Self::Name,
        Self::Username,
        Self::Email,
        Self::Phone,
        Self::Website,
        Self::CompanyName,
        Self::AddressSuite,
        Self::AddressCity,
    ];

    /// Wire name of the field, using dotted paths for nested values.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Username => "username",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Website => "website",
            Self::CompanyName => "company.name",
            Self::AddressSuite => "address.suite",
            Self::AddressCity => "address.city",
        }
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a field name does not match any [`UserField`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown user field '{name}'")]
pub struct UserFieldParseError {
    /// The rejected field name.
    pub name: String,
}

impl FromStr for UserField {
    type Err = UserFieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UserFieldParseError { name: s.to_owned() })
    }
}

/// One entry of the user directory.
///
/// ## Invariants
/// - `id` is set at construction and cannot be changed by field edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    id: UserId,
    name: String,
    username: String,
    email: String,
    phone: String,
    website: String,
    company: Company,
    address: Address,
}

impl UserRecord {
    /// Create a record with the given identity, name and username.
    ///
    /// Remaining fields start empty; fill them with [`Self::with_field`].
    ///
    /// # Examples
    /// ```
    /// use user_directory::domain::{UserField, UserId, UserRecord};
    ///
    /// let record = UserRecord::new(UserId::new(1), "Leanne Graham", "Bret")
    ///     .with_field(UserField::Email, "Sincere@april.biz");
    /// assert_eq!(record.email(), "Sincere@april.biz");
    /// ```
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            username: username.into(),
            email: String::new(),
            phone: String::new(),
            website: String::new(),
            company: Company::default(),
            address: Address::default(),
        }
    }

    /// Return a copy of this record with exactly one field overwritten.
    ///
    /// No validation is applied; empty strings are accepted.
    #[must_use]
    pub fn with_field(mut self, field: UserField, value: impl Into<String>) -> Self {
        *self.field_mut(field) = value.into();
        self
    }

    /// Read a field by name.
    #[must_use]
    pub fn field(&self, field: UserField) -> &str {
        match field {
            UserField::Name => &self.name,
            UserField::Username => &self.username,
            UserField::Email => &self.email,
            UserField::Phone => &self.phone,
            UserField::Website => &self.website,
            UserField::CompanyName => &self.company.name,
            UserField::AddressSuite => &self.address.suite,
            UserField::AddressCity => &self.address.city,
        }
    }

    fn field_mut(&mut self, field: UserField) -> &mut String {
        match field {
            UserField::Name => &mut self.name,
            UserField::Username => &mut self.username,
            UserField::Email => &mut self.email,
            UserField::Phone => &mut self.phone,
            UserField::Website => &mut self.website,
            UserField::CompanyName => &mut self.company.name,
            UserField::AddressSuite => &mut self.address.suite,
            UserField::AddressCity => &mut self.address.city,
        }
    }

    /// Identity of the record.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Full display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Handle used for display and as the avatar seed.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Contact email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Contact phone.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Personal website.
    #[must_use]
    pub fn website(&self) -> &str {
        &self.website
    }

    /// Employer details.
    #[must_use]
    pub const fn company(&self) -> &Company {
        &self.company
    }

    /// Postal location.
    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }
}
