//! Driven ports used by the directory domain.
//!
//! Adapters in `crate::outbound` implement these traits; the domain depends
//! only on the trait objects.

mod macros;
mod user_collection_source;

pub(crate) use macros::define_port_error;
pub use user_collection_source::{
    FixtureUserCollectionSource, UserCollectionSource, UserCollectionSourceError,
};

#[cfg(test)]
pub use user_collection_source::MockUserCollectionSource;
