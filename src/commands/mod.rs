pub mod spam;
pub mod yell;

use std::io::{self, Write};

use crate::cli::Commands;
use crate::infra::git::{RepoId, resolve_repo};
use crate::shared::config::{Config, SUPPORTIVE_MESSAGE};

impl Commands {
    /// Run the pre-command step, then dispatch.
    pub async fn run(&self, config: &Config, repo_override: Option<&str>) -> anyhow::Result<()> {
        let repo = prepare(config, repo_override, &mut io::stdout())?;

        match self {
            Self::Spam(args) => spam::run(args, &repo).await,
            Self::Yell(args) => yell::run(args, &repo).await,
        }
    }
}

/// Print the banner if configured, then resolve the repository once.
///
/// The banner is written before resolution, so it appears even when
/// resolution fails.
pub fn prepare<W: Write>(
    config: &Config,
    repo_override: Option<&str>,
    out: &mut W,
) -> anyhow::Result<RepoId> {
    if config.is_supportive() {
        writeln!(out, "{SUPPORTIVE_MESSAGE}")?;
    }

    let repo = resolve_repo(repo_override)?;
    tracing::debug!(%repo, "resolved repository");
    Ok(repo)
}
