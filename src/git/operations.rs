//! Low-level git operations

use std::path::Path;
use std::process::{Command, Output};

use anyhow::{bail, Context, Result};

use super::Vcs;

/// [`Vcs`] implementation that shells out to the `git` binary.
pub struct GitCli;

fn git(repo: &Path, args: &[&str]) -> Result<Output> {
    Command::new("git")
        .args(args)
        .current_dir(repo)
        .output()
        .with_context(|| format!("failed to run git {}", args.join(" ")))
}

impl Vcs for GitCli {
    fn remote_url(&self, repo: &Path, name: &str) -> Result<String> {
        let output = git(repo, &["remote", "get-url", name])?;

        if !output.status.success() {
            bail!("remote '{}' not found", name);
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn add_remote(&self, repo: &Path, name: &str, url: &str) -> Result<()> {
        let output = git(repo, &["remote", "add", name, url])?;

        if !output.status.success() {
            bail!(
                "failed to add remote '{}': {}",
                name,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(())
    }

    fn push(&self, repo: &Path, remote: &str, branch: &str) -> Result<()> {
        let output = git(repo, &["push", remote, branch])?;

        if !output.status.success() {
            bail!(
                "failed to push {} to {}: {}",
                branch,
                remote,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(())
    }

    fn add(&self, repo: &Path, path: &str) -> Result<()> {
        let output = git(repo, &["add", path])?;

        if !output.status.success() {
            bail!(
                "failed to stage {}: {}",
                path,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(())
    }

    fn commit(&self, repo: &Path, message: &str) -> Result<()> {
        let output = git(repo, &["commit", "-m", message])?;

        if !output.status.success() {
            bail!(
                "failed to commit: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(())
    }

    fn is_repo(&self, repo: &Path) -> bool {
        git(repo, &["rev-parse", "--git-dir"])
            .map(|output| output.status.success())
            .unwrap_or(false)
    }
}
