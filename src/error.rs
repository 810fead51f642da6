// Error types for folio.
// Display strings double as the user-facing messages shown in the projects
// section, so they are worded for the reader, not the developer.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("GitHub API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("GitHub token was rejected. Please check your GITHUB_TOKEN.")]
    Unauthorized,

    #[error("GitHub user not found. Please check the username.")]
    UserNotFound,

    #[error("{}", rate_limit_message(.authenticated, .reset_minutes))]
    RateLimited {
        authenticated: bool,
        reset_minutes: Option<u64>,
    },

    #[error("Failed to fetch repositories (Status: {0})")]
    Http(u16),

    #[error("No repositories found on your GitHub account.")]
    NoRepositories,

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FolioError>;

fn rate_limit_message(authenticated: &bool, reset_minutes: &Option<u64>) -> String {
    let mut message = if *authenticated {
        String::from("GitHub API rate limit reached (authenticated).")
    } else {
        String::from("GitHub API rate limit reached (unauthenticated).")
    };

    if let Some(minutes) = reset_minutes {
        message.push_str(&format!(" Resets in {} minute(s).", minutes));
    }

    if !*authenticated {
        message.push_str(" Set GITHUB_TOKEN for a higher limit.");
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limited_unauthenticated_names_reset_and_token() {
        let err = FolioError::RateLimited {
            authenticated: false,
            reset_minutes: Some(5),
        };

        let message = err.to_string();
        assert!(message.contains("Resets in 5 minute"));
        assert!(message.contains("GITHUB_TOKEN"));
        assert!(message.contains("unauthenticated"));
    }

    #[test]
    fn rate_limited_authenticated_omits_token_hint() {
        let err = FolioError::RateLimited {
            authenticated: true,
            reset_minutes: Some(12),
        };

        let message = err.to_string();
        assert!(message.contains("Resets in 12 minute"));
        assert!(!message.contains("GITHUB_TOKEN"));
    }

    #[test]
    fn rate_limited_without_reset_time() {
        let err = FolioError::RateLimited {
            authenticated: false,
            reset_minutes: None,
        };

        let message = err.to_string();
        assert!(!message.contains("Resets in"));
        assert!(message.contains("GITHUB_TOKEN"));
    }

    #[test]
    fn http_failure_includes_status_code() {
        assert!(FolioError::Http(500).to_string().contains("500"));
    }
}
