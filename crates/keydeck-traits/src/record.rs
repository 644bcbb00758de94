//! The API key record and its supporting request types.
//!
//! Records are serialized in camelCase to keep the stored blob and the
//! remote document format identical (`expiresAt`, `createdAt`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Fixed category taxonomy for stored keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ai,
    Payment,
    Storage,
    Analytics,
    Communication,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Ai,
        Category::Payment,
        Category::Storage,
        Category::Analytics,
        Category::Communication,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Ai => "ai",
            Category::Payment => "payment",
            Category::Storage => "storage",
            Category::Analytics => "analytics",
            Category::Communication => "communication",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "ai" => Ok(Category::Ai),
            "payment" => Ok(Category::Payment),
            "storage" => Ok(Category::Storage),
            "analytics" => Ok(Category::Analytics),
            "communication" => Ok(Category::Communication),
            "other" => Ok(Category::Other),
            other => Err(format!(
                "unknown category: {other}. Use: ai, payment, storage, analytics, communication, other"
            )),
        }
    }
}

/// One stored credential entry.
///
/// `id` is assigned by the backend that persisted the record; `created_at`
/// is stamped once at creation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    pub id: String,
    pub name: String,
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: String,
}

/// The form payload for creating a record: everything the caller supplies.
///
/// `id` and `created_at` are deliberately absent; the facade stamps the
/// timestamp and the persisting backend assigns the id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyInput {
    pub name: String,
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ApiKeyInput {
    /// Attach the creation timestamp, producing the insert payload.
    pub fn into_record(self, created_at: String) -> NewApiKey {
        NewApiKey {
            name: self.name,
            key: self.key,
            url: self.url,
            expires_at: self.expires_at,
            category: self.category,
            description: self.description,
            created_at,
        }
    }
}

/// A record ready to persist, missing only its backend-assigned id.
///
/// This is also the remote document body: documents never carry their own
/// id, the collection key does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApiKey {
    pub name: String,
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: String,
}

impl NewApiKey {
    pub fn with_id(self, id: String) -> ApiKey {
        ApiKey {
            id,
            name: self.name,
            key: self.key,
            url: self.url,
            expires_at: self.expires_at,
            category: self.category,
            description: self.description,
            created_at: self.created_at,
        }
    }
}

fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Partial field replacement for an existing record.
///
/// `id` and `created_at` are not patchable. `expires_at` is a double
/// `Option`: the outer level distinguishes "leave as is" from "set",
/// the inner level allows clearing the expiry with an explicit null.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub expires_at: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ApiKeyPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.key.is_none()
            && self.url.is_none()
            && self.expires_at.is_none()
            && self.category.is_none()
            && self.description.is_none()
    }

    /// Shallow-merge the supplied fields into an existing record.
    pub fn apply(&self, record: &mut ApiKey) {
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        if let Some(key) = &self.key {
            record.key = key.clone();
        }
        if let Some(url) = &self.url {
            record.url = Some(url.clone());
        }
        if let Some(expires_at) = &self.expires_at {
            record.expires_at = expires_at.clone();
        }
        if let Some(category) = self.category {
            record.category = Some(category);
        }
        if let Some(description) = &self.description {
            record.description = Some(description.clone());
        }
    }
}

/// Search parameters plus the single predicate both backends share.
///
/// The category is a plain string so the UI sentinel "all" keeps its
/// pass-through meaning; an empty or absent value matches everything.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    pub query: String,
    pub category: Option<String>,
}

impl SearchFilter {
    pub fn new(query: impl Into<String>, category: Option<String>) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }

    /// Case-insensitive containment over name, description and url, ANDed
    /// with the category match.
    pub fn matches(&self, record: &ApiKey) -> bool {
        let query = self.query.to_lowercase();
        let matches_query = query.is_empty()
            || record.name.to_lowercase().contains(&query)
            || record
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&query))
            || record
                .url
                .as_deref()
                .is_some_and(|u| u.to_lowercase().contains(&query));

        let matches_category = match self.category.as_deref() {
            None | Some("") | Some("all") => true,
            Some(category) => record
                .category
                .is_some_and(|c| c.as_str() == category),
        };

        matches_query && matches_category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, category: Option<Category>) -> ApiKey {
        ApiKey {
            id: "1".to_string(),
            name: name.to_string(),
            key: "sk-test".to_string(),
            url: Some("https://api.example.com".to_string()),
            expires_at: None,
            category,
            description: Some("test credential".to_string()),
            created_at: "2023-01-15".to_string(),
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = SearchFilter::default();
        assert!(filter.matches(&record("OpenAI API", Some(Category::Ai))));
        assert!(filter.matches(&record("anything", None)));
    }

    #[test]
    fn test_query_is_case_insensitive_over_name_description_url() {
        let rec = record("OpenAI API", Some(Category::Ai));
        assert!(SearchFilter::new("openai", None).matches(&rec));
        assert!(SearchFilter::new("CREDENTIAL", None).matches(&rec));
        assert!(SearchFilter::new("example.com", None).matches(&rec));
        assert!(!SearchFilter::new("stripe", None).matches(&rec));
    }

    #[test]
    fn test_category_and_query_are_anded() {
        let openai = record("OpenAI API", Some(Category::Ai));
        let stripe = record("Stripe API", Some(Category::Payment));

        let filter = SearchFilter::new("api", Some("ai".to_string()));
        assert!(filter.matches(&openai));
        assert!(!filter.matches(&stripe));
    }

    #[test]
    fn test_all_sentinel_matches_any_category() {
        let filter = SearchFilter::new("", Some("all".to_string()));
        assert!(filter.matches(&record("OpenAI API", Some(Category::Ai))));
        assert!(filter.matches(&record("plain", None)));
    }

    #[test]
    fn test_record_without_category_only_matches_pass_through() {
        let rec = record("Internal", None);
        assert!(SearchFilter::new("", None).matches(&rec));
        assert!(!SearchFilter::new("", Some("ai".to_string())).matches(&rec));
    }

    #[test]
    fn test_patch_apply_merges_and_preserves_created_at() {
        let mut rec = record("OpenAI API", Some(Category::Ai));
        let patch = ApiKeyPatch {
            name: Some("Renamed".to_string()),
            expires_at: Some(Some("2026-01-01".to_string())),
            ..Default::default()
        };
        patch.apply(&mut rec);

        assert_eq!(rec.name, "Renamed");
        assert_eq!(rec.expires_at, Some("2026-01-01".to_string()));
        assert_eq!(rec.key, "sk-test");
        assert_eq!(rec.created_at, "2023-01-15");
    }

    #[test]
    fn test_patch_can_clear_expiry() {
        let mut rec = record("OpenAI API", Some(Category::Ai));
        rec.expires_at = Some("2024-12-31".to_string());

        let patch = ApiKeyPatch {
            expires_at: Some(None),
            ..Default::default()
        };
        patch.apply(&mut rec);
        assert_eq!(rec.expires_at, None);
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let rec = record("OpenAI API", Some(Category::Ai));
        let value = serde_json::to_value(&rec).unwrap();

        assert_eq!(value["createdAt"], "2023-01-15");
        assert_eq!(value["category"], "ai");
        assert!(value.get("expiresAt").is_some());
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_patch_serializes_only_supplied_fields() {
        let patch = ApiKeyPatch {
            key: Some("sk-new".to_string()),
            expires_at: Some(None),
            ..Default::default()
        };
        let value = serde_json::to_value(&patch).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 2);
        assert_eq!(object["key"], "sk-new");
        assert!(object["expiresAt"].is_null());
    }

    #[test]
    fn test_category_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        assert!("gaming".parse::<Category>().is_err());
    }
}
