// GitHub API response types.
// Defines structs for deserializing GitHub REST API responses.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public repository as returned by the user repository listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub topics: Vec<String>,
    pub language: Option<String>,
    pub updated_at: DateTime<Utc>,
    pub fork: bool,
    pub stargazers_count: u64,
    pub languages_url: String,
}

/// Per-repository language breakdown: language name to byte count.
/// The response carries no reliable key order.
pub type Languages = HashMap<String, u64>;

/// Rate limit information from response headers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_deserializes_with_missing_topics() {
        let json = r#"{
            "id": 42,
            "name": "smart_home_hub",
            "description": null,
            "html_url": "https://github.com/someone/smart_home_hub",
            "language": "C++",
            "updated_at": "2026-01-15T10:30:00Z",
            "fork": false,
            "stargazers_count": 3,
            "languages_url": "https://api.github.com/repos/someone/smart_home_hub/languages"
        }"#;

        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.id, 42);
        assert!(repo.topics.is_empty());
        assert_eq!(repo.language.as_deref(), Some("C++"));
        assert!(!repo.fork);
    }

    #[test]
    fn languages_deserialize_as_byte_counts() {
        let json = r#"{"Rust": 1024, "Shell": 64}"#;
        let languages: Languages = serde_json::from_str(json).unwrap();
        assert_eq!(languages.get("Rust"), Some(&1024));
        assert_eq!(languages.len(), 2);
    }
}
