//! KeyDeck core - the remote backend and the persistence facade.
//!
//! The facade (`Vault`) is the single entry point consumers use. It
//! prefers the remote collection, falls back to the local store when the
//! remote side is unavailable or failing, and never merges the two.

pub mod remote;
pub mod vault;

pub use remote::{RemoteConfig, RemoteStore, shared_remote};
pub use vault::Vault;

pub use keydeck_storage::{LocalStore, paths};
pub use keydeck_traits::{ApiKey, ApiKeyInput, ApiKeyPatch, Category, KeyStore, SearchFilter};
