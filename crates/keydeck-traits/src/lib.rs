//! Shared trait definitions and record types for KeyDeck.
//!
//! These types define the shape of a stored API key and the capability
//! interface every backend implements. Implementations live in
//! keydeck-storage (local) and keydeck-core (remote).

pub mod record;
pub mod store;

pub use record::{ApiKey, ApiKeyInput, ApiKeyPatch, Category, NewApiKey, SearchFilter};
pub use store::KeyStore;
