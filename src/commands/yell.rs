//! `gh lol yell`: print open issues, loudly.

use std::io::{self, IsTerminal, Write};

use anyhow::Context;
use clap::Args;
use crossterm::style::Color;

use crate::infra::git::RepoId;
use crate::infra::github::{IssueClient, IssueSummary, OctocrabClient};
use crate::shared::prompt::{InputError, InputRequest, Prompter, TerminalPrompter, resolve_input};
use crate::shared::table::{TablePrinter, terminal_width};

#[derive(Args, Clone, PartialEq, Eq, Debug)]
pub struct YellArgs {
    /// How loud to be
    #[arg(short, long, allow_negative_numbers = true)]
    pub loud: Option<i64>,
}

const LOUD_INPUT: InputRequest<'static> = InputRequest {
    name: "--loud",
    message: "How loud?",
    default: Some("1"),
    trim: true,
};

/// Number of `!` appended to each title. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loudness(usize);

impl Loudness {
    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for Loudness {
    type Error = InputError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .filter(|&n| n >= 1)
            .map(Self)
            .ok_or_else(|| {
                InputError::Validation(format!(
                    "expected a loudness of at least 1, got '{value}'"
                ))
            })
    }
}

/// Where the listing goes and how it should look.
pub struct Output<W: Write> {
    pub out: W,
    pub is_tty: bool,
    pub width: usize,
}

pub async fn run(args: &YellArgs, repo: &RepoId) -> anyhow::Result<()> {
    let loudness = resolve_loudness(args, &TerminalPrompter)?;
    let client = OctocrabClient::get()?;
    let stdout = io::stdout();
    let output = Output {
        is_tty: stdout.is_terminal(),
        width: terminal_width(),
        out: stdout,
    };
    yell(client, repo, loudness, output).await
}

/// Take `--loud` from the flag, or ask for it, and validate it.
pub fn resolve_loudness(args: &YellArgs, prompter: &dyn Prompter) -> anyhow::Result<Loudness> {
    let loud = resolve_input(args.loud, &LOUD_INPUT, prompter)?;
    Ok(Loudness::try_from(loud)?)
}

/// Uppercase the title and append one `!` per level of loudness.
pub fn render_title(title: &str, loudness: Loudness) -> String {
    format!("{}{}", title.to_uppercase(), "!".repeat(loudness.get()))
}

/// Query open issues and print them twice: a plain listing, then a table.
pub async fn yell<C, W>(
    client: &C,
    repo: &RepoId,
    loudness: Loudness,
    mut output: Output<W>,
) -> anyhow::Result<()>
where
    C: IssueClient + ?Sized,
    W: Write,
{
    let issues = client
        .query_open_issues(repo)
        .await
        .context("failed to call API")?;
    tracing::debug!(count = issues.len(), %repo, "fetched open issues");

    for issue in &issues {
        writeln!(output.out, "{} {}", issue.number, issue.title)?;
    }

    write_table(&issues, loudness, output)?;
    Ok(())
}

fn write_table<W: Write>(
    issues: &[IssueSummary],
    loudness: Loudness,
    output: Output<W>,
) -> io::Result<()> {
    let mut tp = TablePrinter::new(output.out, output.is_tty, output.width);
    for issue in issues {
        tp.add_colored_field(format!("#{}", issue.number), Color::Cyan);
        tp.add_field(render_title(&issue.title, loudness));
        tp.end_row();
    }
    tp.render()
}
