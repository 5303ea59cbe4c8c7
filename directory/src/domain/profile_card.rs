//! Flat projection of one directory card.

use serde::Serialize;

use crate::domain::{UserId, UserRecord, avatar_url};

/// Everything one directory card displays, precomputed from a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCard {
    /// Record identity, used as the card key.
    pub id: UserId,
    /// Full display name.
    pub name: String,
    /// `@username`.
    pub handle: String,
    /// Avatar image URL seeded by the username.
    pub avatar_url: String,
    /// Alternative text for the avatar image.
    pub avatar_alt: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Personal website.
    pub website: String,
    /// Employer name.
    pub company: String,
    /// Suite line of the address.
    pub suite: String,
    /// City line of the address.
    pub city: String,
}

impl From<&UserRecord> for ProfileCard {
    fn from(record: &UserRecord) -> Self {
        let username = record.username();
        Self {
            id: record.id(),
            name: record.name().to_owned(),
            handle: format!("@{username}"),
            avatar_url: avatar_url(username),
            avatar_alt: format!("{username}'s avatar"),
            email: record.email().to_owned(),
            phone: record.phone().to_owned(),
            website: record.website().to_owned(),
            company: record.company().name.clone(),
            suite: record.address().suite.clone(),
            city: record.address().city.clone(),
        }
    }
}
