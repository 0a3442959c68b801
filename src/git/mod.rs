//! Git repository access for pipeline setup
//!
//! Handles:
//! - Reading the origin remote for app-name derivation
//! - Registering one remote per tier
//! - Pushing main and committing the generated CI config

mod operations;

pub use operations::GitCli;

use std::path::Path;

use anyhow::Result;

/// Version-control operations needed by the setup workflow.
///
/// Implemented by [`GitCli`] against the real `git` binary; tests substitute
/// recording fakes. Every operation takes the repository path explicitly.
pub trait Vcs {
    /// URL of the named fetch remote.
    fn remote_url(&self, repo: &Path, name: &str) -> Result<String>;

    /// Register a named remote pointing at `url`.
    fn add_remote(&self, repo: &Path, name: &str, url: &str) -> Result<()>;

    /// Push `branch` to `remote`.
    fn push(&self, repo: &Path, remote: &str, branch: &str) -> Result<()>;

    /// Stage a single path.
    fn add(&self, repo: &Path, path: &str) -> Result<()>;

    /// Commit staged changes with `message`.
    fn commit(&self, repo: &Path, message: &str) -> Result<()>;

    /// Whether `repo` is inside a git work tree.
    fn is_repo(&self, repo: &Path) -> bool;
}
