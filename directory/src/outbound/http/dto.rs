//! DTOs for decoding the user collection payload.
//!
//! The adapter decodes into these transport DTOs first, then maps them into
//! domain records in one pass. Fields the directory does not display are
//! ignored; missing displayed fields fail the decode.

use std::collections::HashSet;

use serde::Deserialize;

use crate::domain::{UserField, UserId, UserRecord};

#[derive(Debug, Deserialize)]
pub(super) struct UserDto {
    pub(super) id: u64,
    pub(super) name: String,
    pub(super) username: String,
    pub(super) email: String,
    pub(super) phone: String,
    pub(super) website: String,
    pub(super) company: CompanyDto,
    pub(super) address: AddressDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct CompanyDto {
    pub(super) name: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct AddressDto {
    pub(super) suite: String,
    pub(super) city: String,
}

/// Map decoded users into domain records, rejecting repeated ids.
pub(super) fn into_domain_records(users: Vec<UserDto>) -> Result<Vec<UserRecord>, String> {
    let mut seen = HashSet::with_capacity(users.len());
    users
        .into_iter()
        .map(|user| {
            if !seen.insert(user.id) {
                return Err(format!("duplicate user id {}", user.id));
            }
            Ok(user.into_domain_record())
        })
        .collect()
}

impl UserDto {
    fn into_domain_record(self) -> UserRecord {
        UserRecord::new(UserId::new(self.id), self.name, self.username)
            .with_field(UserField::Email, self.email)
            .with_field(UserField::Phone, self.phone)
            .with_field(UserField::Website, self.website)
            .with_field(UserField::CompanyName, self.company.name)
            .with_field(UserField::AddressSuite, self.address.suite)
            .with_field(UserField::AddressCity, self.address.city)
    }
}
