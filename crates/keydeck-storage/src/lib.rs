//! KeyDeck local persistence - the fallback storage backend.
//!
//! This crate persists the whole key collection as a single serialized
//! blob under one fixed key in an embedded redb database. It is the
//! degraded-mode backend: the facade in keydeck-core prefers the remote
//! collection and falls back here when it is unavailable or failing.

pub mod local;
pub mod paths;

pub use local::{LocalStore, generate_id};
