//! The backend capability interface.
//!
//! Both persistence backends (the remote collection and the local blob
//! store) implement this trait; the facade in keydeck-core sequences them
//! in priority order. Not-found is signaled with `None`/`false`, never an
//! error; an error means the backend itself failed.

use anyhow::Result;
use async_trait::async_trait;

use crate::record::{ApiKey, ApiKeyPatch, NewApiKey, SearchFilter};

#[async_trait]
pub trait KeyStore: Send + Sync {
    /// Materialize the entire collection.
    async fn list_all(&self) -> Result<Vec<ApiKey>>;

    /// Look up a single record by id.
    async fn get(&self, id: &str) -> Result<Option<ApiKey>>;

    /// Persist a new record; the backend assigns the id.
    async fn insert(&self, record: NewApiKey) -> Result<ApiKey>;

    /// Shallow-merge a partial update into the record with the given id.
    /// Returns the merged record, or `None` if the id is unknown.
    async fn update(&self, id: &str, patch: ApiKeyPatch) -> Result<Option<ApiKey>>;

    /// Delete by id. `false` means the backend is sure nothing matched.
    async fn delete(&self, id: &str) -> Result<bool>;

    /// Full fetch plus client-side filtering with the shared predicate.
    async fn search(&self, filter: &SearchFilter) -> Result<Vec<ApiKey>>;
}
