//! The persistence facade.
//!
//! `Vault` hides the choice between the remote collection and the local
//! store: remote first, local on unavailability or failure, no merging
//! and no reconciliation between the two. No operation raises past this
//! boundary; total failure of both backends degrades to empty, `None` or
//! `false` returns.

use std::path::Path;

use anyhow::Result;
use tracing::{error, warn};

use keydeck_storage::LocalStore;
use keydeck_traits::{ApiKey, ApiKeyInput, ApiKeyPatch, KeyStore, SearchFilter};

use crate::remote::{RemoteStore, shared_remote};

pub struct Vault {
    remote: Option<RemoteStore>,
    local: LocalStore,
}

impl Vault {
    /// Open the facade over the database file at `db_path`, wiring in the
    /// process-wide remote handle if one is configured.
    pub fn open(db_path: &Path) -> Result<Self> {
        Ok(Self {
            remote: shared_remote(),
            local: LocalStore::open(db_path)?,
        })
    }

    /// Build a facade from explicit backends.
    pub fn with_backends(remote: Option<RemoteStore>, local: LocalStore) -> Self {
        Self { remote, local }
    }

    /// Materialize the full collection.
    ///
    /// An empty remote collection falls through to the local store, which
    /// seeds the demonstration records on its first-ever read.
    pub async fn list_all(&self) -> Vec<ApiKey> {
        if let Some(remote) = &self.remote {
            match remote.list_all().await {
                Ok(records) if !records.is_empty() => return records,
                Ok(_) => {}
                Err(err) => warn!(error = %err, "Remote list failed, using local storage"),
            }
        }

        match self.local.list_all().await {
            Ok(records) => records,
            Err(err) => {
                error!(error = %err, "Local list failed");
                Vec::new()
            }
        }
    }

    /// Look up a record by id; a remote miss also scans the local store.
    pub async fn get(&self, id: &str) -> Option<ApiKey> {
        if let Some(remote) = &self.remote {
            match remote.get(id).await {
                Ok(Some(record)) => return Some(record),
                Ok(None) => {}
                Err(err) => warn!(error = %err, "Remote get failed, using local storage"),
            }
        }

        match self.local.get(id).await {
            Ok(record) => record,
            Err(err) => {
                error!(error = %err, "Local get failed");
                None
            }
        }
    }

    /// Create a record. The facade stamps `created_at`; the persisting
    /// backend assigns the id. Returns `None` only when both paths fail.
    pub async fn add(&self, input: ApiKeyInput) -> Option<ApiKey> {
        let record = input.into_record(chrono::Utc::now().to_rfc3339());

        if let Some(remote) = &self.remote {
            match remote.insert(record.clone()).await {
                Ok(added) => return Some(added),
                Err(err) => warn!(error = %err, "Remote insert failed, using local storage"),
            }
        }

        match self.local.insert(record).await {
            Ok(added) => Some(added),
            Err(err) => {
                error!(error = %err, "Local insert failed");
                None
            }
        }
    }

    /// Partially update a record. Returns the merged record, or `None`
    /// when the id is absent from the path that served the call.
    pub async fn update(&self, id: &str, patch: ApiKeyPatch) -> Option<ApiKey> {
        if let Some(remote) = &self.remote {
            match remote.update(id, patch.clone()).await {
                Ok(Some(record)) => return Some(record),
                Ok(None) => {}
                Err(err) => warn!(error = %err, "Remote update failed, using local storage"),
            }
        }

        match self.local.update(id, patch).await {
            Ok(record) => record,
            Err(err) => {
                error!(error = %err, "Local update failed");
                None
            }
        }
    }

    /// Delete a record. `false` means nothing matched (or both paths
    /// failed outright).
    pub async fn delete(&self, id: &str) -> bool {
        if let Some(remote) = &self.remote {
            match remote.delete(id).await {
                Ok(true) => return true,
                Ok(false) => {}
                Err(err) => warn!(error = %err, "Remote delete failed, using local storage"),
            }
        }

        match self.local.delete(id).await {
            Ok(deleted) => deleted,
            Err(err) => {
                error!(error = %err, "Local delete failed");
                false
            }
        }
    }

    /// Filter the collection with the shared predicate; the remote path
    /// fetches everything and filters client-side, exactly like the local
    /// path does.
    pub async fn search(&self, filter: &SearchFilter) -> Vec<ApiKey> {
        if let Some(remote) = &self.remote {
            match remote.search(filter).await {
                Ok(records) => return records,
                Err(err) => warn!(error = %err, "Remote search failed, using local storage"),
            }
        }

        match self.local.search(filter).await {
            Ok(records) => records,
            Err(err) => {
                error!(error = %err, "Local search failed");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::RemoteConfig;
    use keydeck_traits::Category;
    use std::collections::HashSet;
    use tempfile::tempdir;

    fn local_vault() -> (Vault, tempfile::TempDir) {
        let temp_dir = tempdir().unwrap();
        let local = LocalStore::open(&temp_dir.path().join("vault.db")).unwrap();
        (Vault::with_backends(None, local), temp_dir)
    }

    /// A remote backend that is configured but fails every call.
    fn unreachable_vault() -> (Vault, tempfile::TempDir) {
        let temp_dir = tempdir().unwrap();
        let local = LocalStore::open(&temp_dir.path().join("vault.db")).unwrap();
        let remote = RemoteStore::new(RemoteConfig::new("http://127.0.0.1:9", "k"));
        (Vault::with_backends(Some(remote), local), temp_dir)
    }

    fn input(name: &str, category: Option<Category>) -> ApiKeyInput {
        ApiKeyInput {
            name: name.to_string(),
            key: format!("sk-{name}"),
            category,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_first_list_seeds_exactly_three_records() {
        let (vault, _temp_dir) = local_vault();

        let records = vault.list_all().await;
        assert_eq!(records.len(), 3);

        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["OpenAI API", "Stripe API", "Cloudinary API"]);

        // Idempotent without intervening writes, and no re-seeding.
        assert_eq!(vault.list_all().await, records);
    }

    #[tokio::test]
    async fn test_add_then_get_round_trips() {
        let (vault, _temp_dir) = local_vault();

        let added = vault.add(input("Test", Some(Category::Other))).await.unwrap();
        assert!(!added.id.is_empty());
        assert!(!added.created_at.is_empty());

        let fetched = vault.get(&added.id).await;
        assert_eq!(fetched, Some(added));
    }

    #[tokio::test]
    async fn test_update_changes_one_field_and_nothing_else() {
        let (vault, _temp_dir) = local_vault();

        let added = vault.add(input("Test", Some(Category::Other))).await.unwrap();
        let patch = ApiKeyPatch {
            description: Some("rotated monthly".to_string()),
            ..Default::default()
        };

        let updated = vault.update(&added.id, patch).await.unwrap();
        assert_eq!(updated.description, Some("rotated monthly".to_string()));
        assert_eq!(updated.name, added.name);
        assert_eq!(updated.key, added.key);
        assert_eq!(updated.created_at, added.created_at);

        assert_eq!(vault.get(&added.id).await, Some(updated));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_absent() {
        let (vault, _temp_dir) = local_vault();
        assert!(vault.update("missing", ApiKeyPatch::default()).await.is_none());
    }

    #[tokio::test]
    async fn test_delete_then_get_is_absent() {
        let (vault, _temp_dir) = local_vault();

        let added = vault.add(input("Test", None)).await.unwrap();
        assert!(vault.delete(&added.id).await);
        assert!(vault.get(&added.id).await.is_none());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_leaves_collection_intact() {
        let (vault, _temp_dir) = local_vault();

        let before = vault.list_all().await;
        assert!(!vault.delete("missing").await);
        assert_eq!(vault.list_all().await, before);
    }

    #[tokio::test]
    async fn test_empty_search_equals_list_all() {
        let (vault, _temp_dir) = local_vault();

        let listed: HashSet<_> = vault.list_all().await.into_iter().map(|r| r.id).collect();
        let searched: HashSet<_> = vault
            .search(&SearchFilter::default())
            .await
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(listed, searched);
    }

    #[tokio::test]
    async fn test_search_applies_both_predicates() {
        let (vault, _temp_dir) = local_vault();
        vault.list_all().await;

        let results = vault
            .search(&SearchFilter::new("api", Some("ai".to_string())))
            .await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "OpenAI API");

        let text_only = vault.search(&SearchFilter::new("stripe", None)).await;
        assert_eq!(text_only.len(), 1);
        assert_eq!(text_only[0].name, "Stripe API");

        let none = vault
            .search(&SearchFilter::new("stripe", Some("ai".to_string())))
            .await;
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_failing_remote_falls_back_to_local_storage() {
        let (vault, _temp_dir) = unreachable_vault();

        // Every operation must be served by the local store, seeds included.
        let records = vault.list_all().await;
        assert_eq!(records.len(), 3);

        let added = vault.add(input("Offline", Some(Category::Other))).await.unwrap();
        assert_eq!(vault.get(&added.id).await, Some(added.clone()));

        let patch = ApiKeyPatch {
            name: Some("Offline Renamed".to_string()),
            ..Default::default()
        };
        let updated = vault.update(&added.id, patch).await.unwrap();
        assert_eq!(updated.name, "Offline Renamed");

        let results = vault.search(&SearchFilter::new("stripe", None)).await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Stripe API");

        assert!(vault.delete(&added.id).await);
        assert!(vault.get(&added.id).await.is_none());
    }

    #[tokio::test]
    async fn test_created_at_is_stamped_by_the_facade() {
        let (vault, _temp_dir) = local_vault();

        let added = vault.add(input("Test", None)).await.unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(&added.created_at).is_ok());
    }
}
