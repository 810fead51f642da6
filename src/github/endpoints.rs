// GitHub API endpoint functions.
// Provides typed methods for fetching data from the GitHub REST API.

use crate::error::Result;

use super::client::GitHubClient;
use super::types::{Languages, Repository};

/// Listing page size. One page at this size covers the accounts this app is
/// pointed at; there is no pagination beyond it.
const REPOS_PER_PAGE: u32 = 100;

impl GitHubClient {
    /// Get a user's public repositories, most recently updated first.
    pub async fn get_user_repos(&self, username: &str) -> Result<Vec<Repository>> {
        let per_page = REPOS_PER_PAGE.to_string();
        let params = [("per_page", per_page.as_str()), ("sort", "updated")];
        let response = self
            .get_with_params(&format!("/users/{}/repos", username), &params)
            .await?;
        let repos: Vec<Repository> = response.json().await?;
        Ok(repos)
    }

    /// Get the language breakdown for a repository, from the URL the listing
    /// response supplied for it.
    pub async fn get_languages(&self, languages_url: &str) -> Result<Languages> {
        let response = self.get_url(languages_url, &[]).await?;
        let languages: Languages = response.json().await?;
        Ok(languages)
    }
}
