use clap::{Parser, Subcommand};

use crate::commands::spam::SpamArgs;
use crate::commands::yell::YellArgs;

#[derive(Parser)]
#[command(
    name = "gh-lol",
    bin_name = "gh lol",
    version,
    about = "gh lol",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Repository to use in OWNER/REPO format
    #[arg(short = 'R', long, global = true, value_name = "OWNER/REPO")]
    pub repo: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, PartialEq, Eq, Debug)]
pub enum Commands {
    /// Comment on a random issue or pr in a repository
    Spam(SpamArgs),

    /// Print a list of issues loudly
    Yell(YellArgs),
}
