//! GitHub API error types.

use thiserror::Error;

pub type Result<T> = anyhow::Result<T>;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("Failed to get GitHub token: {0}")]
    TokenError(String),

    #[error("{}", describe_octocrab_error(.0))]
    ApiError(#[from] octocrab::Error),

    #[error("GraphQL error: {0}")]
    GraphQLError(String),
}

/// Render an octocrab error, surfacing the message and status GitHub sent back.
fn describe_octocrab_error(err: &octocrab::Error) -> String {
    let octocrab::Error::GitHub { source, .. } = err else {
        return format!("GitHub API error: {err}");
    };

    let details = source
        .errors
        .as_deref()
        .map(summarize_field_errors)
        .unwrap_or_default();
    format!(
        "GitHub API error: {} (HTTP {}){details}",
        source.message,
        source.status_code.as_u16()
    )
}

/// Summarize the `errors` array of a REST error body as " [field is code, ...]".
fn summarize_field_errors(errors: &[serde_json::Value]) -> String {
    let parts: Vec<String> = errors
        .iter()
        .filter_map(|e| {
            let field = e.get("field").and_then(|v| v.as_str());
            let code = e.get("code").and_then(|v| v.as_str());
            match (field, code) {
                (Some(f), Some(c)) => Some(format!("{f} is {c}")),
                (Some(only), None) | (None, Some(only)) => Some(only.to_string()),
                (None, None) => None,
            }
        })
        .collect();

    if parts.is_empty() {
        String::new()
    } else {
        format!(" [{}]", parts.join(", "))
    }
}
