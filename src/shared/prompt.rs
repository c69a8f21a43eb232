//! Resolving required command inputs from flags or an interactive prompt.

use std::io::{self, BufRead, IsTerminal, Write};
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("{what} required when not running interactively")]
    InteractiveRequired { what: String },

    #[error("{0}")]
    Validation(String),

    #[error("failed to read answer: {0}")]
    Io(#[from] io::Error),
}

/// Source of interactive answers.
pub trait Prompter {
    /// Whether a human is attached to the output stream and can be asked.
    fn is_interactive(&self) -> bool;

    /// Show `message` and block until a line is read. An empty answer yields `default`.
    fn ask(&self, message: &str, default: Option<&str>) -> io::Result<String>;
}

/// Prompts on stdout and reads answers from stdin.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn is_interactive(&self) -> bool {
        io::stdout().is_terminal()
    }

    fn ask(&self, message: &str, default: Option<&str>) -> io::Result<String> {
        let mut stdout = io::stdout().lock();
        write_question(&mut stdout, message, default)?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(answer_or_default(&line, default))
    }
}

/// A single required input: what the flag is called and how to ask for it.
pub struct InputRequest<'a> {
    /// Used in the error when prompting is impossible, e.g. "--loud".
    pub name: &'a str,
    pub message: &'a str,
    pub default: Option<&'a str>,
    /// Strip surrounding whitespace from the answer before converting it.
    pub trim: bool,
}

/// Return `supplied` if the flag was given, otherwise ask for the value.
///
/// Fails with [`InputError::InteractiveRequired`] instead of blocking when
/// nobody can answer.
pub fn resolve_input<T>(
    supplied: Option<T>,
    request: &InputRequest<'_>,
    prompter: &dyn Prompter,
) -> Result<T, InputError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    if let Some(value) = supplied {
        return Ok(value);
    }

    if !prompter.is_interactive() {
        return Err(InputError::InteractiveRequired {
            what: request.name.to_string(),
        });
    }

    let answer = prompter.ask(request.message, request.default)?;
    let answer = if request.trim {
        answer.trim()
    } else {
        answer.as_str()
    };
    answer
        .parse()
        .map_err(|e| InputError::Validation(format!("invalid {}: {e}", request.name)))
}

fn write_question<W: Write>(out: &mut W, message: &str, default: Option<&str>) -> io::Result<()> {
    match default {
        Some(default) => write!(out, "? {message} ({default}) "),
        None => write!(out, "? {message} "),
    }
}

fn answer_or_default(line: &str, default: Option<&str>) -> String {
    let answer = line.trim_end_matches(['\r', '\n']);
    match default {
        Some(default) if answer.trim().is_empty() => default.to_string(),
        _ => answer.to_string(),
    }
}
