//! Derives the platform app base name from the repository's origin remote.

use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::git::Vcs;

/// Derive the application base name for `repo`.
///
/// Takes the final path segment of the `origin` remote URL, strips a
/// trailing `.git`, and prepends `prefix` when one is configured. Pure
/// function of local repository state; no network access.
pub fn base_name(git: &dyn Vcs, repo: &Path, prefix: Option<&str>) -> Result<String> {
    let url = git
        .remote_url(repo, "origin")
        .context("repository has no 'origin' remote to derive an app name from")?;

    let name = name_from_url(&url);
    if name.is_empty() {
        bail!("could not derive an app name from origin URL '{url}'");
    }

    Ok(match prefix {
        Some(prefix) => format!("{prefix}{name}"),
        None => name,
    })
}

/// Final path segment of a remote URL, `.git` suffix removed.
///
/// Handles ssh (`git@host:org/name.git`), https and plain-path remotes.
fn name_from_url(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);
    let after_scope = trimmed.rsplit(':').next().unwrap_or(trimmed);
    after_scope.rsplit('/').next().unwrap_or("").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubVcs {
        origin: Option<&'static str>,
    }

    impl StubVcs {
        fn with_origin(url: &'static str) -> Self {
            Self { origin: Some(url) }
        }
    }

    impl Vcs for StubVcs {
        fn remote_url(&self, _repo: &Path, name: &str) -> Result<String> {
            match self.origin {
                Some(url) if name == "origin" => Ok(url.to_string()),
                _ => bail!("remote '{name}' not found"),
            }
        }

        fn add_remote(&self, _repo: &Path, _name: &str, _url: &str) -> Result<()> {
            unreachable!("naming never mutates the repository")
        }

        fn push(&self, _repo: &Path, _remote: &str, _branch: &str) -> Result<()> {
            unreachable!("naming never mutates the repository")
        }

        fn add(&self, _repo: &Path, _path: &str) -> Result<()> {
            unreachable!("naming never mutates the repository")
        }

        fn commit(&self, _repo: &Path, _message: &str) -> Result<()> {
            unreachable!("naming never mutates the repository")
        }

        fn is_repo(&self, _repo: &Path) -> bool {
            true
        }
    }

    #[test]
    fn test_base_name_ssh() {
        let git = StubVcs::with_origin("git@github.com:acme/myapp.git");
        let name = base_name(&git, Path::new("."), None).unwrap();
        assert_eq!(name, "myapp");
    }

    #[test]
    fn test_base_name_https() {
        let git = StubVcs::with_origin("https://github.com/acme/myapp.git");
        let name = base_name(&git, Path::new("."), None).unwrap();
        assert_eq!(name, "myapp");
    }

    #[test]
    fn test_base_name_without_git_suffix() {
        let git = StubVcs::with_origin("https://github.com/acme/myapp");
        let name = base_name(&git, Path::new("."), None).unwrap();
        assert_eq!(name, "myapp");
    }

    #[test]
    fn test_base_name_plain_path() {
        let git = StubVcs::with_origin("/srv/repos/myapp.git");
        let name = base_name(&git, Path::new("."), None).unwrap();
        assert_eq!(name, "myapp");
    }

    #[test]
    fn test_base_name_trailing_slash() {
        let git = StubVcs::with_origin("https://github.com/acme/myapp/");
        let name = base_name(&git, Path::new("."), None).unwrap();
        assert_eq!(name, "myapp");
    }

    #[test]
    fn test_prefix_prepended() {
        let git = StubVcs::with_origin("git@github.com:acme/myapp.git");
        let name = base_name(&git, Path::new("."), Some("co-")).unwrap();
        assert_eq!(name, "co-myapp");
    }

    #[test]
    fn test_missing_origin_is_an_error() {
        let git = StubVcs { origin: None };
        let err = base_name(&git, Path::new("."), None).unwrap_err();
        assert!(err.to_string().contains("origin"));
    }

    #[test]
    fn test_empty_url_is_an_error() {
        let git = StubVcs::with_origin("");
        assert!(base_name(&git, Path::new("."), None).is_err());
    }
}
