//! HTTP adapter for the user collection port.
//!
//! This module provides a thin reqwest implementation of
//! `UserCollectionSource`.

mod dto;
mod http_source;

pub use http_source::{HttpSourceIdentity, HttpUserCollectionSource};
