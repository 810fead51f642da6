// Project feed resolution.
// Orchestrates cache lookup, the repository listing fetch, filtering,
// per-repository language enrichment, and the cache write-back.

use chrono::Utc;
use futures::future::join_all;
use serde::{Deserialize, Serialize};

use crate::cache::CacheSlot;
use crate::error::{FolioError, Result};
use crate::github::{GitHubClient, Repository};

use super::project::ProjectRecord;

/// Cache slot holding the serialized project list.
const CACHE_KEY: &str = "github_projects";

/// Cached results older than this are discarded. One hour.
const CACHE_TTL_MS: i64 = 3_600_000;

/// At most this many projects are featured.
const MAX_FEATURED: usize = 6;

/// Serialized cache payload: the full record list plus its capture time.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheEntry {
    projects: Vec<ProjectRecord>,
    /// Capture time in epoch milliseconds.
    timestamp: i64,
}

impl CacheEntry {
    fn is_fresh(&self, now_ms: i64) -> bool {
        now_ms - self.timestamp < CACHE_TTL_MS
    }
}

/// Result of a successful resolution.
#[derive(Debug)]
pub struct FeedOutcome {
    pub projects: Vec<ProjectRecord>,
    /// True when the list came from the cache without a network call.
    pub from_cache: bool,
    /// Swallowed failures for the activity log (enrichment, cache IO).
    pub warnings: Vec<String>,
}

/// Resolves the featured project list for a fixed account, preferring a
/// fresh cache over the network.
pub struct ProjectFeed {
    client: GitHubClient,
    cache: Box<dyn CacheSlot>,
    username: String,
}

impl ProjectFeed {
    pub fn new(client: GitHubClient, cache: Box<dyn CacheSlot>, username: impl Into<String>) -> Self {
        Self {
            client,
            cache,
            username: username.into(),
        }
    }

    /// Rate limit counters observed on the most recent request.
    pub fn rate_limit(&self) -> crate::github::RateLimit {
        self.client.rate_limit()
    }

    /// Resolve the project list.
    ///
    /// Network and empty-result failures abort with a user-facing error;
    /// everything else (stale or unreadable cache, a single repository's
    /// enrichment failure, a cache write failure) is absorbed and reported
    /// through `FeedOutcome::warnings`.
    pub async fn resolve(&mut self) -> Result<FeedOutcome> {
        let mut warnings = Vec::new();

        if let Some(projects) = self.lookup_cached(Utc::now().timestamp_millis(), &mut warnings) {
            return Ok(FeedOutcome {
                projects,
                from_cache: true,
                warnings,
            });
        }

        let repos = self.client.get_user_repos(&self.username).await?;

        let featured = select_featured(repos);
        if featured.is_empty() {
            return Err(FolioError::NoRepositories);
        }

        // One concurrent batch, one future per featured repository. A
        // failed breakdown falls through to the per-repository fallback
        // chain without touching its siblings.
        let breakdowns = join_all(
            featured
                .iter()
                .map(|repo| self.client.get_languages(&repo.languages_url)),
        )
        .await;

        let projects: Vec<ProjectRecord> = featured
            .iter()
            .zip(breakdowns)
            .enumerate()
            .map(|(index, (repo, breakdown))| {
                let languages = match breakdown {
                    Ok(languages) => Some(languages),
                    Err(err) => {
                        warnings.push(format!("Failed to fetch languages for {}: {}", repo.name, err));
                        None
                    }
                };
                ProjectRecord::from_repository(repo, index, languages.as_ref())
            })
            .collect();

        self.persist(&projects, &mut warnings);

        Ok(FeedOutcome {
            projects,
            from_cache: false,
            warnings,
        })
    }

    /// Read the cache slot. Stale or unreadable values are removed and
    /// treated as a miss.
    fn lookup_cached(&mut self, now_ms: i64, warnings: &mut Vec<String>) -> Option<Vec<ProjectRecord>> {
        let raw = self.cache.get(CACHE_KEY)?;

        let entry: CacheEntry = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(err) => {
                warnings.push(format!("Discarding unreadable project cache: {}", err));
                self.cache.remove(CACHE_KEY);
                return None;
            }
        };

        if !entry.is_fresh(now_ms) {
            self.cache.remove(CACHE_KEY);
            return None;
        }

        Some(entry.projects)
    }

    /// Write the record list back to the slot. Failures never affect the
    /// returned result.
    fn persist(&mut self, projects: &[ProjectRecord], warnings: &mut Vec<String>) {
        let entry = CacheEntry {
            projects: projects.to_vec(),
            timestamp: Utc::now().timestamp_millis(),
        };

        let result = serde_json::to_string(&entry)
            .map_err(FolioError::from)
            .and_then(|json| self.cache.set(CACHE_KEY, &json));

        if let Err(err) = result {
            warnings.push(format!("Failed to persist project cache: {}", err));
        }
    }
}

/// Drop forks, order by last update descending, keep the first six.
pub fn select_featured(repos: Vec<Repository>) -> Vec<Repository> {
    let mut featured: Vec<Repository> = repos.into_iter().filter(|repo| !repo.fork).collect();
    featured.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    featured.truncate(MAX_FEATURED);
    featured
}
