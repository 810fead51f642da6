// GitHub API HTTP client.
// Handles authentication, rate limit tracking, and response classification.

use std::sync::Mutex;

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{FolioError, Result};

use super::types::RateLimit;

const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// GitHub API client with optional authentication and rate limit tracking.
///
/// Requests take `&self` so the enrichment batch can issue several fetches
/// through one client concurrently; the rate limit counters sit behind a
/// mutex for the same reason.
pub struct GitHubClient {
    client: Client,
    authenticated: bool,
    rate_limit: Mutex<RateLimit>,
}

impl GitHubClient {
    /// Create a new client. A `None` token falls back to unauthenticated
    /// requests with the lower rate ceiling.
    pub fn new(token: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("folio-tui"));

        if let Some(token) = token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|_| FolioError::Unauthorized)?,
            );
        }

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(FolioError::Api)?;

        Ok(Self {
            client,
            authenticated: token.is_some(),
            rate_limit: Mutex::new(RateLimit::default()),
        })
    }

    /// Whether requests carry a bearer token.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Get the most recently observed rate limit information.
    pub fn rate_limit(&self) -> RateLimit {
        *self.rate_limit.lock().expect("rate limit lock poisoned")
    }

    /// Make a GET request to an API endpoint path.
    pub async fn get(&self, endpoint: &str) -> Result<Response> {
        self.get_url(&format!("{}{}", GITHUB_API_BASE, endpoint), &[])
            .await
    }

    /// Make a GET request to an API endpoint path with query parameters.
    pub async fn get_with_params(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<Response> {
        self.get_url(&format!("{}{}", GITHUB_API_BASE, endpoint), params)
            .await
    }

    /// Make a GET request to an absolute URL supplied by the API itself
    /// (e.g. a repository's `languages_url`).
    pub async fn get_url(&self, url: &str, params: &[(&str, &str)]) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(FolioError::Api)?;

        self.update_rate_limit(&response);
        self.check_response(response)
    }

    /// Update rate limit counters from response headers.
    fn update_rate_limit(&self, response: &Response) {
        let mut rate = self.rate_limit.lock().expect("rate limit lock poisoned");

        if let Some(limit) = header_u64(response, "x-ratelimit-limit") {
            rate.limit = limit;
        }
        if let Some(remaining) = header_u64(response, "x-ratelimit-remaining") {
            rate.remaining = remaining;
        }
        if let Some(reset) = header_u64(response, "x-ratelimit-reset") {
            rate.reset = reset;
        }
    }

    /// Check response status and convert failures.
    fn check_response(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let now = chrono::Utc::now().timestamp().max(0) as u64;
        Err(classify_failure(
            status,
            &self.rate_limit(),
            self.authenticated,
            now,
        ))
    }
}

fn header_u64(response: &Response, name: &str) -> Option<u64> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}

/// Map a non-success status to the error shown to the user.
///
/// A 403 only counts as rate limiting when the remaining quota is zero;
/// other 403s fall through to the generic status message. The reset time is
/// reported in whole minutes, rounded up.
fn classify_failure(
    status: StatusCode,
    rate: &RateLimit,
    authenticated: bool,
    now_epoch: u64,
) -> FolioError {
    match status {
        StatusCode::UNAUTHORIZED => FolioError::Unauthorized,
        StatusCode::NOT_FOUND => FolioError::UserNotFound,
        StatusCode::FORBIDDEN if rate.remaining == 0 => {
            let reset_minutes = rate
                .reset
                .checked_sub(now_epoch)
                .filter(|secs| *secs > 0)
                .map(|secs| secs.div_ceil(60));
            FolioError::RateLimited {
                authenticated,
                reset_minutes,
            }
        }
        status => FolioError::Http(status.as_u16()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_with_exhausted_quota_is_rate_limited() {
        let rate = RateLimit {
            limit: 60,
            remaining: 0,
            reset: 1_000_300,
        };

        let err = classify_failure(StatusCode::FORBIDDEN, &rate, false, 1_000_000);
        match err {
            FolioError::RateLimited {
                authenticated,
                reset_minutes,
            } => {
                assert!(!authenticated);
                assert_eq!(reset_minutes, Some(5));
            }
            other => panic!("expected RateLimited, got {:?}", other),
        }
    }

    #[test]
    fn forbidden_with_quota_left_is_generic() {
        let rate = RateLimit {
            limit: 60,
            remaining: 12,
            reset: 0,
        };

        let err = classify_failure(StatusCode::FORBIDDEN, &rate, false, 1_000_000);
        assert!(matches!(err, FolioError::Http(403)));
    }

    #[test]
    fn rate_limited_without_future_reset_has_no_minutes() {
        let rate = RateLimit {
            limit: 60,
            remaining: 0,
            reset: 999_000,
        };

        let err = classify_failure(StatusCode::FORBIDDEN, &rate, true, 1_000_000);
        match err {
            FolioError::RateLimited { reset_minutes, .. } => assert_eq!(reset_minutes, None),
            other => panic!("expected RateLimited, got {:?}", other),
        }
    }

    #[test]
    fn unauthorized_and_not_found_map_to_their_variants() {
        let rate = RateLimit::default();
        assert!(matches!(
            classify_failure(StatusCode::UNAUTHORIZED, &rate, true, 0),
            FolioError::Unauthorized
        ));
        assert!(matches!(
            classify_failure(StatusCode::NOT_FOUND, &rate, false, 0),
            FolioError::UserNotFound
        ));
    }

    #[test]
    fn other_statuses_carry_their_code() {
        let rate = RateLimit::default();
        assert!(matches!(
            classify_failure(StatusCode::INTERNAL_SERVER_ERROR, &rate, false, 0),
            FolioError::Http(500)
        ));
    }

    #[test]
    fn reset_minutes_round_up_partial_minutes() {
        let rate = RateLimit {
            limit: 60,
            remaining: 0,
            reset: 1_000_090,
        };

        let err = classify_failure(StatusCode::FORBIDDEN, &rate, false, 1_000_000);
        match err {
            FolioError::RateLimited { reset_minutes, .. } => assert_eq!(reset_minutes, Some(2)),
            other => panic!("expected RateLimited, got {:?}", other),
        }
    }
}
