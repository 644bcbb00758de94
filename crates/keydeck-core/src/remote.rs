//! Remote key storage - a thin client over a managed realtime-database
//! REST collection.
//!
//! Documents are keyed by record id and never carry the id inside the
//! body. Every list or search call materializes the whole collection; no
//! pagination, no caching, no server-side filtering.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::sync::OnceLock;
use tracing::{debug, warn};

use keydeck_traits::{ApiKey, ApiKeyPatch, KeyStore, NewApiKey, SearchFilter};

const COLLECTION: &str = "api-keys";

const DATABASE_URL_ENV: &str = "KEYDECK_DATABASE_URL";
const API_KEY_ENV: &str = "KEYDECK_API_KEY";
const PROJECT_ID_ENV: &str = "KEYDECK_PROJECT_ID";

/// Connection settings for the remote collection.
///
/// The database URL and API key are both required; a missing value means
/// the remote backend is unavailable, not an error.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub database_url: String,
    pub api_key: String,
    pub project_id: Option<String>,
}

impl RemoteConfig {
    pub fn new(database_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            api_key: api_key.into(),
            project_id: None,
        }
    }

    /// Read the configuration from the KEYDECK_* environment variables.
    pub fn from_env() -> Option<Self> {
        let database_url = non_empty_env(DATABASE_URL_ENV)?;
        let api_key = non_empty_env(API_KEY_ENV)?;
        Some(Self {
            database_url,
            api_key,
            project_id: non_empty_env(PROJECT_ID_ENV),
        })
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Remote storage backend over the collection's REST surface.
#[derive(Debug, Clone)]
pub struct RemoteStore {
    config: RemoteConfig,
    client: Client,
}

impl RemoteStore {
    pub fn new(config: RemoteConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Build a store from the environment, if fully configured.
    pub fn from_env() -> Option<Self> {
        RemoteConfig::from_env().map(Self::new)
    }

    fn base_url(&self) -> &str {
        self.config.database_url.trim_end_matches('/')
    }

    fn collection_url(&self) -> String {
        format!("{}/{}.json", self.base_url(), COLLECTION)
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/{}/{}.json", self.base_url(), COLLECTION, id)
    }

    fn auth(&self) -> [(&'static str, &str); 1] {
        [("auth", self.config.api_key.as_str())]
    }

    async fn fetch(&self, url: String) -> Result<Value> {
        let response = self
            .client
            .get(url)
            .query(&self.auth())
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

/// Turn a stored document back into a record by restoring its id.
fn record_from_document(id: &str, document: Value) -> Result<ApiKey> {
    let Value::Object(mut fields) = document else {
        return Err(anyhow!("remote document {id} is not an object"));
    };
    fields.insert("id".to_string(), Value::String(id.to_string()));
    Ok(serde_json::from_value(Value::Object(fields))?)
}

#[derive(Debug, Deserialize)]
struct PushResponse {
    /// The backend-assigned id of the inserted document.
    name: String,
}

#[async_trait]
impl KeyStore for RemoteStore {
    async fn list_all(&self) -> Result<Vec<ApiKey>> {
        let payload = self.fetch(self.collection_url()).await?;
        match payload {
            Value::Null => Ok(Vec::new()),
            Value::Object(entries) => entries
                .into_iter()
                .map(|(id, document)| record_from_document(&id, document))
                .collect(),
            other => Err(anyhow!("unexpected collection payload: {other}")),
        }
    }

    async fn get(&self, id: &str) -> Result<Option<ApiKey>> {
        let payload = self.fetch(self.record_url(id)).await?;
        if payload.is_null() {
            return Ok(None);
        }
        Ok(Some(record_from_document(id, payload)?))
    }

    async fn insert(&self, record: NewApiKey) -> Result<ApiKey> {
        let response = self
            .client
            .post(self.collection_url())
            .query(&self.auth())
            .json(&record)
            .send()
            .await?
            .error_for_status()?;

        let PushResponse { name } = response.json().await?;
        debug!(id = %name, "Inserted record into the remote collection");
        Ok(record.with_id(name))
    }

    async fn update(&self, id: &str, patch: ApiKeyPatch) -> Result<Option<ApiKey>> {
        self.client
            .patch(self.record_url(id))
            .query(&self.auth())
            .json(&patch)
            .send()
            .await?
            .error_for_status()?;

        // The PATCH endpoint reports success without a body; re-read to
        // return the merged record.
        self.get(id).await
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        self.client
            .delete(self.record_url(id))
            .query(&self.auth())
            .send()
            .await?
            .error_for_status()?;
        Ok(true)
    }

    async fn search(&self, filter: &SearchFilter) -> Result<Vec<ApiKey>> {
        // Full fetch, then the same client-side predicate the local store
        // uses. Server-side filtering is deliberately not attempted.
        let records = self.list_all().await?;
        Ok(records
            .into_iter()
            .filter(|record| filter.matches(record))
            .collect())
    }
}

static SHARED_REMOTE: OnceLock<Option<RemoteStore>> = OnceLock::new();

/// The process-wide remote handle.
///
/// Availability is probed lazily on first use (configuration presence, no
/// network round-trip) and cached for the rest of the session; a session
/// that starts without a usable configuration stays local-only.
pub fn shared_remote() -> Option<RemoteStore> {
    SHARED_REMOTE
        .get_or_init(|| {
            let store = RemoteStore::from_env();
            if store.is_none() {
                warn!("Remote backend not configured, using local storage only");
            }
            store
        })
        .clone()
}
