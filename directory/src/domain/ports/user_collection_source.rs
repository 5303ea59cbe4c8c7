//! Driven port for fetching the remote user collection.
//!
//! The domain treats the fetch as a single opaque async call. Adapters own
//! transport, status handling, and payload decoding; they report failures
//! through [`UserCollectionSourceError`].

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::UserRecord;

define_port_error! {
    /// Errors surfaced while fetching the user collection.
    pub enum UserCollectionSourceError {
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "user collection transport failed: {message}",
        /// The request exceeded its timeout.
        Timeout { message: String } =>
            "user collection request timed out: {message}",
        /// The endpoint answered with a non-success status.
        Status { status: u16, message: String } =>
            "user collection request returned status {status}: {message}",
        /// The payload did not decode into user records.
        Decode { message: String } =>
            "user collection payload decode failed: {message}",
    }
}

/// Port for loading the full user collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserCollectionSource: Send + Sync {
    /// Fetch every user record, in the order the source returns them.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use user_directory::domain::ports::{
    ///     FixtureUserCollectionSource, UserCollectionSource,
    /// };
    ///
    /// let source = FixtureUserCollectionSource::default();
    /// let records = source.fetch_collection().await?;
    /// assert!(records.is_empty());
    /// # Ok::<(), user_directory::domain::ports::UserCollectionSourceError>(())
    /// ```
    async fn fetch_collection(&self) -> Result<Vec<UserRecord>, UserCollectionSourceError>;
}

/// Fixture implementation returning a fixed collection.
#[derive(Debug, Clone, Default)]
pub struct FixtureUserCollectionSource {
    records: Vec<UserRecord>,
}

impl FixtureUserCollectionSource {
    /// Serve `records` on every fetch.
    #[must_use]
    pub const fn new(records: Vec<UserRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl UserCollectionSource for FixtureUserCollectionSource {
    async fn fetch_collection(&self) -> Result<Vec<UserRecord>, UserCollectionSourceError> {
        Ok(self.records.clone())
    }
}
