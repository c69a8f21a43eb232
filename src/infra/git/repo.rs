//! Repository identification and resolution.

use std::fmt;

use git2::Repository;

use super::error::{RepoError, Result};
use super::github::github_repo_from_remotes;

/// Environment variable the host CLI uses to pin the current repository.
const GH_REPO: &str = "GH_REPO";

/// An `OWNER/NAME` pair identifying a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Open a git repository from the current directory or any parent.
pub fn open_repo() -> Result<Repository> {
    Repository::open_from_env().map_err(|_| RepoError::NotInRepo.into())
}

/// Open a git repository from a specific path.
#[cfg(test)]
pub fn open_repo_at(path: &std::path::Path) -> Result<Repository> {
    use git2::RepositoryOpenFlags;
    use std::path::Path;

    Repository::open_ext(
        path,
        RepositoryOpenFlags::empty(),
        std::iter::empty::<&Path>(),
    )
    .map_err(|_| RepoError::NotInRepo.into())
}

/// Parse "OWNER/NAME" into a [`RepoId`].
///
/// Exactly one slash with non-empty, whitespace-free parts is accepted.
pub fn parse_repo(repo: &str) -> Result<RepoId> {
    let invalid = || RepoError::Parse(repo.to_string());

    let (owner, name) = repo.split_once('/').ok_or_else(invalid)?;
    let valid_part = |part: &str| !part.is_empty() && !part.contains(['/', ' ', '\t', '\n']);
    if !valid_part(owner) || !valid_part(name) {
        return Err(invalid().into());
    }

    Ok(RepoId::new(owner, name))
}

/// Resolve the repository to operate on.
///
/// A non-empty override wins; otherwise the repository is inferred from
/// `GH_REPO` or the git remotes of the current directory.
pub fn resolve_repo(repo_override: Option<&str>) -> Result<RepoId> {
    match repo_override.filter(|r| !r.is_empty()) {
        Some(repo) => parse_repo(repo),
        None => ambient_repo(),
    }
}

/// Infer the repository from the execution environment.
fn ambient_repo() -> Result<RepoId> {
    if let Some(repo) = std::env::var(GH_REPO).ok().filter(|v| !v.is_empty()) {
        tracing::debug!(%repo, "using repository from {GH_REPO}");
        return parse_repo(&repo);
    }

    let repo = open_repo()?;
    github_repo_from_remotes(&repo)
}
