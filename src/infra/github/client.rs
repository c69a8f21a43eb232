//! GitHub API client implementation using octocrab.

use std::process::Command;
use std::sync::OnceLock;

use anyhow::Context;
use octocrab::service::middleware::retry::RetryConfig;
use serde::Deserialize;

use super::error::{GitHubError, Result};

/// Environment variables checked for a token before falling back to `gh auth token`.
const TOKEN_ENV_VARS: [&str; 2] = ["GH_TOKEN", "GITHUB_TOKEN"];

/// Internal wrapper for GitHub GraphQL API responses.
///
/// Used internally by `graphql` method to handle the `data` wrapper and errors.
#[derive(Debug, Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQLError>>,
}

/// GraphQL error returned by GitHub API.
#[derive(Debug, Deserialize)]
struct GraphQLError {
    message: String,
}

/// Production implementation using octocrab.
///
/// Requests are sent exactly once: comments and state changes are not
/// idempotent, so octocrab's automatic retries are turned off.
pub struct OctocrabClient {
    pub(crate) client: octocrab::Octocrab,
}

/// Global singleton instance of OctocrabClient, initialized lazily.
///
/// Stores the `Result` of initialization so a failed token lookup is
/// reported the same way on every call.
static OCTOCRAB_CLIENT: OnceLock<std::result::Result<OctocrabClient, String>> = OnceLock::new();

impl OctocrabClient {
    /// Create a new OctocrabClient instance.
    /// Prefer using `OctocrabClient::get()` to reuse the singleton instance.
    fn new() -> Result<Self> {
        let token = resolve_token()?;
        let client = octocrab::Octocrab::builder()
            .personal_token(token)
            .add_retry_config(RetryConfig::None)
            .build()
            .context("Failed to build octocrab client")?;
        Ok(Self { client })
    }

    /// Create a client pointed at a different API root (e.g. a mock server).
    #[cfg(test)]
    pub fn with_base_url(base_url: &str, token: &str) -> Result<Self> {
        let client = octocrab::Octocrab::builder()
            .base_uri(base_url)
            .context("Invalid base URL")?
            .personal_token(token.to_string())
            .add_retry_config(RetryConfig::None)
            .build()
            .context("Failed to build octocrab client")?;
        Ok(Self { client })
    }

    /// Get the singleton instance of OctocrabClient.
    /// Initializes the client on first call.
    pub fn get() -> Result<&'static Self> {
        OCTOCRAB_CLIENT
            .get_or_init(|| Self::new().map_err(|e| e.to_string()))
            .as_ref()
            .map_err(|e| GitHubError::TokenError(e.clone()).into())
    }

    /// Execute a GraphQL query and deserialize the response.
    ///
    /// Automatically handles the `data` wrapper and `errors` field from GitHub
    /// GraphQL responses. Returns the unwrapped data on success, or an error
    /// if the response contains GraphQL errors.
    pub async fn graphql<T: serde::de::DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T> {
        let body = serde_json::json!({
            "query": query,
            "variables": variables,
        });
        let response: GraphQLResponse<T> = self
            .client
            .graphql(&body)
            .await
            .map_err(GitHubError::from)?;

        if let Some(errors) = response.errors.filter(|e| !e.is_empty()) {
            let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
            return Err(GitHubError::GraphQLError(messages.join(", ")).into());
        }

        response
            .data
            .ok_or_else(|| GitHubError::GraphQLError("No data in response".to_string()).into())
    }
}

/// Find a token the same way the GitHub CLI does: environment first,
/// then the credentials stored by `gh auth login`.
fn resolve_token() -> Result<String> {
    if let Some(token) = token_from_env() {
        return Ok(token);
    }
    get_gh_token()
}

fn token_from_env() -> Option<String> {
    TOKEN_ENV_VARS.iter().find_map(|key| {
        std::env::var(key)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    })
}

/// Get GitHub token from `gh auth token` command.
/// This reuses the authentication from GitHub CLI.
fn get_gh_token() -> Result<String> {
    let output = Command::new("gh")
        .args(["auth", "token"])
        .output()
        .context("Failed to run gh auth token")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GitHubError::TokenError(format!("gh auth token failed: {stderr}")).into());
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        return Err(
            GitHubError::TokenError("gh auth token returned empty token".to_string()).into(),
        );
    }

    Ok(token)
}
