//! GitHub remote detection.

use git2::Repository;
use regex::Regex;
use std::sync::LazyLock;

use super::error::{RepoError, Result};
use super::repo::RepoId;

#[expect(clippy::unwrap_used, reason = "static pattern")]
static GITHUB_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:github\.com[:/])([^/]+)/([^/]+?)(?:\.git)?/?$").unwrap());

/// Remote names checked first, in this order, before any other remote.
const PREFERRED_REMOTES: [&str; 3] = ["upstream", "github", "origin"];

/// Parse owner and repo from a GitHub URL.
/// Supports both SSH (git@github.com:owner/repo.git) and HTTPS formats.
pub fn parse_github_url(url: &str) -> Option<RepoId> {
    let captures = GITHUB_URL_RE.captures(url)?;
    Some(RepoId::new(&captures[1], &captures[2]))
}

/// Find the GitHub repository among the repository's remotes.
pub fn github_repo_from_remotes(repo: &Repository) -> Result<RepoId> {
    let remotes = repo.remotes().map_err(RepoError::from)?;
    let mut names: Vec<&str> = remotes.iter().flatten().collect();
    names.sort_by_key(|name| {
        PREFERRED_REMOTES
            .iter()
            .position(|p| p == name)
            .unwrap_or(PREFERRED_REMOTES.len())
    });

    for name in names {
        let Ok(remote) = repo.find_remote(name) else {
            continue;
        };
        if let Some(found) = remote.url().and_then(parse_github_url) {
            tracing::debug!(remote = name, repo = %found, "inferred repository from git remote");
            return Ok(found);
        }
    }

    Err(RepoError::NoGitHubRemote.into())
}
