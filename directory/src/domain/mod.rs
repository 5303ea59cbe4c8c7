//! Domain model and view state for the user directory.
//!
//! Purpose: own the fetch lifecycle of the remote collection and the
//! single-draft edit model. Transport details stay behind
//! [`ports::UserCollectionSource`].
//!
//! Public surface:
//! - `UserRecord`, `UserId`, `UserField`: directory entry values.
//! - `CollectionLoader`, `CollectionState`: fetch lifecycle and loaded records.
//! - `EditSession`: one draft at a time, committed through `replace_record`.
//! - `avatar_url`, `ProfileCard`: derived display data.

pub mod ports;

mod avatar;
mod collection_loader;
mod edit_session;
mod profile_card;
mod user_record;

pub use self::avatar::avatar_url;
pub use self::collection_loader::{CollectionLoader, CollectionState, FetchOutcome, ReplaceError};
pub use self::edit_session::{CommitOutcome, EditSession, EditState};
pub use self::profile_card::ProfileCard;
pub use self::user_record::{
    Address, Company, UserField, UserFieldParseError, UserId, UserRecord,
};
