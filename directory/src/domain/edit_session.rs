//! Single-draft profile editing.
//!
//! An [`EditSession`] holds at most one draft copy of a record. Field edits
//! touch only the draft; [`EditSession::commit`] is the one place a draft
//! reaches the [`CollectionLoader`].

use tracing::debug;

use crate::domain::{CollectionLoader, ReplaceError, UserField, UserId, UserRecord};

/// Whether a draft is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    /// No edit in progress.
    NoDraft,
    /// A draft is open.
    Drafting,
}

/// Result of [`EditSession::commit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The draft replaced the record with this id.
    Applied {
        /// Identity of the replaced record.
        id: UserId,
    },
    /// There was no draft to commit.
    NoDraft,
    /// The loader refused the write; the draft was discarded anyway.
    Dropped(ReplaceError),
}

/// Holder of the one in-flight draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSession {
    draft: Option<UserRecord>,
}

impl EditSession {
    /// Create a session with no draft.
    #[must_use]
    pub const fn new() -> Self {
        Self { draft: None }
    }

    /// Open a draft copy of `record`, discarding any draft already open.
    pub fn open(&mut self, record: &UserRecord) {
        if let Some(previous) = self.draft.replace(record.clone()) {
            debug!(discarded = %previous.id(), opened = %record.id(), "replaced open draft");
        }
    }

    /// Open a draft of the loaded record with `id`.
    ///
    /// Returns `false`, leaving the session as it was, when the loader holds
    /// no such record.
    pub fn open_by_id(&mut self, loader: &CollectionLoader, id: UserId) -> bool {
        match loader.record(id) {
            Some(record) => {
                self.open(&record);
                true
            }
            None => false,
        }
    }

    /// Overwrite one field of the draft.
    ///
    /// Returns `false` when no draft is open.
    pub fn set_field(&mut self, field: UserField, value: impl Into<String>) -> bool {
        match self.draft.take() {
            Some(draft) => {
                self.draft = Some(draft.with_field(field, value));
                true
            }
            None => false,
        }
    }

    /// Discard the draft without touching the collection.
    pub fn cancel(&mut self) {
        if let Some(draft) = self.draft.take() {
            debug!(id = %draft.id(), "draft cancelled");
        }
    }

    /// Write the draft into `loader` and close it.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use user_directory::domain::ports::FixtureUserCollectionSource;
    /// use user_directory::domain::{
    ///     CollectionLoader, CommitOutcome, EditSession, EditState, UserField, UserId, UserRecord,
    /// };
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// let alice = UserRecord::new(UserId::new(1), "Alice", "alice");
    /// let loader = CollectionLoader::new(Arc::new(FixtureUserCollectionSource::new(vec![alice])));
    /// loader.start().await;
    ///
    /// let mut session = EditSession::new();
    /// session.open_by_id(&loader, UserId::new(1));
    /// session.set_field(UserField::Name, "Alicia");
    ///
    /// assert_eq!(session.commit(&loader), CommitOutcome::Applied { id: UserId::new(1) });
    /// assert_eq!(session.state(), EditState::NoDraft);
    /// assert_eq!(loader.records()[0].name(), "Alicia");
    /// # });
    /// ```
    pub fn commit(&mut self, loader: &CollectionLoader) -> CommitOutcome {
        let Some(draft) = self.draft.take() else {
            return CommitOutcome::NoDraft;
        };
        let id = draft.id();
        match loader.replace_record(draft) {
            Ok(()) => CommitOutcome::Applied { id },
            Err(error) => {
                debug!(%id, %error, "draft commit dropped");
                CommitOutcome::Dropped(error)
            }
        }
    }

    /// Current session state.
    #[must_use]
    pub const fn state(&self) -> EditState {
        match self.draft {
            Some(_) => EditState::Drafting,
            None => EditState::NoDraft,
        }
    }

    /// The open draft, if any.
    #[must_use]
    pub const fn draft(&self) -> Option<&UserRecord> {
        self.draft.as_ref()
    }
}
