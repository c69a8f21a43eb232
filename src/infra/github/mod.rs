//! GitHub API client module using octocrab.
//!
//! Provides OctocrabClient for the REST and GraphQL calls the commands make,
//! authenticated the same way the GitHub CLI is.

mod client;
pub(crate) mod error;
mod issue;
#[cfg(test)]
pub mod mock;

pub use client::OctocrabClient;
pub use error::GitHubError;
pub use issue::{IssueClient, IssueSummary};
