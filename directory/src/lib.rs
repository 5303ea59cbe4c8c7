//! View state for a remotely loaded user directory.
//!
//! The crate loads a collection of user profiles from an HTTP endpoint and
//! lets a viewer edit one profile at a time in memory. Edits are never sent
//! back to the server.

pub mod config;
pub mod domain;
pub mod outbound;
