// Runtime configuration.
// The account is fixed; the environment can override it and optionally
// supply a bearer token for the higher API rate ceiling.

use std::env;

/// Account whose repositories the projects section features.
const DEFAULT_GITHUB_USER: &str = "Arjunuk1";

#[derive(Debug, Clone)]
pub struct Config {
    pub username: String,
    pub token: Option<String>,
}

impl Config {
    /// Read configuration from the environment. A missing or empty
    /// `GITHUB_TOKEN` silently means unauthenticated requests.
    pub fn from_env() -> Self {
        let username = env::var("FOLIO_GITHUB_USER")
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_GITHUB_USER.to_string());

        let token = env::var("GITHUB_TOKEN")
            .ok()
            .filter(|value| !value.is_empty());

        Self { username, token }
    }
}
