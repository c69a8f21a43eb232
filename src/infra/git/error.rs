//! Repository resolution error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepoError {
    #[error("expected the \"OWNER/REPO\" format, got {0:?}")]
    Parse(String),

    #[error("could not determine current repository: not in a git repository. Use -R to specify")]
    NotInRepo,

    #[error(
        "could not determine current repository: no git remote points to github.com. Use -R to specify"
    )]
    NoGitHubRemote,

    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}

pub type Result<T> = anyhow::Result<T>;
