//! `gh lol spam`: comment on a random open issue or pull request, then close it.

use std::io::{self, Write};

use anyhow::Context;
use clap::Args;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::infra::git::RepoId;
use crate::infra::github::{IssueClient, IssueSummary, OctocrabClient};
use crate::shared::prompt::{InputRequest, Prompter, TerminalPrompter, resolve_input};

#[derive(Args, Clone, PartialEq, Eq, Debug)]
pub struct SpamArgs {
    /// Comment body (prompted for when omitted)
    pub message: Option<String>,
}

#[derive(Error, Debug)]
pub enum SpamError {
    #[error("no issues to choose from in {repo}")]
    NoIssues { repo: RepoId },
}

const MESSAGE_INPUT: InputRequest<'static> = InputRequest {
    name: "message",
    message: "Comment",
    default: None,
    trim: false,
};

pub async fn run(args: &SpamArgs, repo: &RepoId) -> anyhow::Result<()> {
    let message = resolve_message(args, &TerminalPrompter)?;
    let client = OctocrabClient::get()?;
    let mut rng = StdRng::from_entropy();
    spam_random_issue(client, repo, &message, &mut rng, &mut io::stdout()).await
}

/// Take the message from the positional argument, or ask for it.
pub fn resolve_message(args: &SpamArgs, prompter: &dyn Prompter) -> anyhow::Result<String> {
    Ok(resolve_input(args.message.clone(), &MESSAGE_INPUT, prompter)?)
}

/// Pick one issue uniformly at random.
pub fn select_issue<'a, R: Rng + ?Sized>(
    issues: &'a [IssueSummary],
    rng: &mut R,
) -> Option<&'a IssueSummary> {
    issues.choose(rng)
}

/// Fetch open issues, comment on a random one and close it.
///
/// Steps run in order and stop at the first failure; a comment that was
/// already posted stays posted if closing fails.
pub async fn spam_random_issue<C, R, W>(
    client: &C,
    repo: &RepoId,
    message: &str,
    rng: &mut R,
    out: &mut W,
) -> anyhow::Result<()>
where
    C: IssueClient + ?Sized,
    R: Rng + ?Sized,
    W: Write,
{
    let issues = client
        .list_open_issues(repo)
        .await
        .context("failed to get API")?;
    tracing::debug!(count = issues.len(), %repo, "fetched open issues");

    let choice = select_issue(&issues, rng)
        .ok_or_else(|| SpamError::NoIssues { repo: repo.clone() })?
        .number;
    tracing::info!(issue = choice, "selected issue");

    client
        .create_comment(repo, choice, message)
        .await
        .context("failed to post API")?;
    tracing::debug!(issue = choice, "comment posted");

    client
        .close_issue(repo, choice)
        .await
        .context("failed to patch API")?;
    tracing::debug!(issue = choice, "issue closed");

    writeln!(out, "Closed #{choice} with '{message}'")?;
    Ok(())
}
