//! Test utilities for creating temporary git repositories.

use git2::Repository;
use std::path::PathBuf;
use tempfile::TempDir;

use super::repo::open_repo_at;

/// A temporary git repository for testing.
pub struct TempRepo {
    pub dir: TempDir,
}

impl TempRepo {
    /// Create a new temporary git repository with a GitHub-style origin remote.
    pub fn new(owner: &str, repo_name: &str) -> Self {
        let temp = Self::without_remote();
        let repo = temp.open();
        let url = format!("https://github.com/{owner}/{repo_name}.git");
        repo.remote("origin", &url).expect("set origin");
        temp
    }

    /// Create a temporary git repository with no remotes configured.
    pub fn without_remote() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        Repository::init(dir.path()).expect("init repo");
        Self { dir }
    }

    /// Get the path to the repository.
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Open the repository.
    pub fn open(&self) -> Repository {
        open_repo_at(self.dir.path()).expect("open temp repo")
    }
}
