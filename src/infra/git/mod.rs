//! Repository resolution using git2 (libgit2).
//!
//! Determines which GitHub repository a command targets, either from an
//! explicit `OWNER/REPO` override or from the current directory's remotes.

mod error;
mod github;
mod repo;
#[cfg(test)]
pub mod test_utils;

pub use error::RepoError;
pub use repo::{RepoId, resolve_repo};
