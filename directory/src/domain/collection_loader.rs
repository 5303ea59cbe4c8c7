//! Fetch lifecycle for the user collection.
//!
//! [`CollectionLoader`] drives `Idle → Loading → Loaded | Failed` against a
//! [`UserCollectionSource`] and is the sole owner of the loaded records.
//! State lives behind a mutex that is never held across the fetch; each
//! attempt is numbered so a result that arrives after [`CollectionLoader::reset`]
//! is dropped instead of applied.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::ports::UserCollectionSource;
use crate::domain::{UserId, UserRecord};

/// Load status of the user collection.
///
/// Exactly one variant holds at a time. `Failed` carries no records: a failed
/// attempt discards whatever was loaded before.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CollectionState {
    /// No fetch attempted yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The collection, in source order.
    Loaded(Vec<UserRecord>),
    /// The last fetch failed.
    Failed,
}

impl CollectionState {
    /// Loaded records, if any.
    #[must_use]
    pub fn records(&self) -> Option<&[UserRecord]> {
        match self {
            Self::Loaded(records) => Some(records),
            Self::Idle | Self::Loading | Self::Failed => None,
        }
    }

    /// Whether a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// What a call to [`CollectionLoader::start`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A fetch was already in flight; nothing was issued.
    AlreadyLoading,
    /// The collection was loaded.
    Loaded {
        /// Number of records now held.
        count: usize,
    },
    /// The fetch failed and the loader is now `Failed`.
    Failed,
    /// The loader was reset or restarted while this fetch was in flight, so
    /// its result was dropped.
    Discarded,
}

/// Why [`CollectionLoader::replace_record`] left the collection untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplaceError {
    /// The loader holds no collection.
    #[error("no collection is loaded")]
    NotLoaded,
    /// No loaded record carries this id.
    #[error("no record with id {id} in the collection")]
    TargetMissing {
        /// The id that was not found.
        id: UserId,
    },
}

#[derive(Debug, Default)]
struct LoaderInner {
    state: CollectionState,
    attempt: u64,
}

/// Owner of the fetch lifecycle and the loaded collection.
pub struct CollectionLoader {
    source: Arc<dyn UserCollectionSource>,
    inner: Mutex<LoaderInner>,
}

impl CollectionLoader {
    /// Build an idle loader over `source`.
    #[must_use]
    pub fn new(source: Arc<dyn UserCollectionSource>) -> Self {
        Self {
            source,
            inner: Mutex::new(LoaderInner::default()),
        }
    }

    /// Fetch the collection and apply the result.
    ///
    /// Valid from `Idle`, `Failed` (retry) and `Loaded` (refresh). Calling it
    /// while `Loading` returns [`FetchOutcome::AlreadyLoading`] without
    /// issuing a second request. Failures are not retried.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use user_directory::domain::ports::FixtureUserCollectionSource;
    /// use user_directory::domain::{CollectionLoader, CollectionState, FetchOutcome};
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// let loader = CollectionLoader::new(Arc::new(FixtureUserCollectionSource::default()));
    /// assert_eq!(loader.start().await, FetchOutcome::Loaded { count: 0 });
    /// assert_eq!(loader.current_state(), CollectionState::Loaded(Vec::new()));
    /// # });
    /// ```
    pub async fn start(&self) -> FetchOutcome {
        let attempt = {
            let mut inner = self.lock();
            if inner.state.is_loading() {
                debug!(attempt = inner.attempt, "collection fetch already in flight");
                return FetchOutcome::AlreadyLoading;
            }
            inner.attempt = inner.attempt.wrapping_add(1);
            inner.state = CollectionState::Loading;
            inner.attempt
        };
        debug!(attempt, "collection fetch started");

        let result = self.source.fetch_collection().await;

        let mut inner = self.lock();
        if inner.attempt != attempt || !inner.state.is_loading() {
            debug!(attempt, "discarding collection fetch result for a stale attempt");
            return FetchOutcome::Discarded;
        }
        match result {
            Ok(records) => {
                let count = records.len();
                debug!(attempt, count, "collection loaded");
                inner.state = CollectionState::Loaded(records);
                FetchOutcome::Loaded { count }
            }
            Err(error) => {
                warn!(attempt, %error, "collection fetch failed");
                inner.state = CollectionState::Failed;
                FetchOutcome::Failed
            }
        }
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn current_state(&self) -> CollectionState {
        self.lock().state.clone()
    }

    /// Loaded records, or an empty vector outside `Loaded`.
    #[must_use]
    pub fn records(&self) -> Vec<UserRecord> {
        self.lock()
            .state
            .records()
            .map(<[UserRecord]>::to_vec)
            .unwrap_or_default()
    }

    /// Look up one loaded record by identity.
    #[must_use]
    pub fn record(&self, id: UserId) -> Option<UserRecord> {
        self.lock()
            .state
            .records()
            .and_then(|records| records.iter().find(|record| record.id() == id))
            .cloned()
    }

    /// Replace the loaded record sharing `updated`'s id, keeping its position.
    ///
    /// Every other record keeps its value and position.
    ///
    /// # Errors
    ///
    /// Returns [`ReplaceError::NotLoaded`] outside `Loaded` and
    /// [`ReplaceError::TargetMissing`] when no record has that id. The
    /// collection is unchanged in both cases.
    pub fn replace_record(&self, updated: UserRecord) -> Result<(), ReplaceError> {
        let mut inner = self.lock();
        let CollectionState::Loaded(records) = &mut inner.state else {
            return Err(ReplaceError::NotLoaded);
        };
        let id = updated.id();
        let Some(slot) = records.iter_mut().find(|record| record.id() == id) else {
            return Err(ReplaceError::TargetMissing { id });
        };
        *slot = updated;
        debug!(%id, "collection record replaced");
        Ok(())
    }

    /// Return to `Idle` and drop the result of any fetch still in flight.
    pub fn reset(&self) {
        let mut inner = self.lock();
        inner.attempt = inner.attempt.wrapping_add(1);
        inner.state = CollectionState::Idle;
    }

    fn lock(&self) -> MutexGuard<'_, LoaderInner> {
        // The guarded value is plain data and stays consistent across panics.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
