//! CircleCI configuration generation.
//!
//! The whole document lives in one literal template so tests can pin the
//! exact commands emitted for a given pair of apps.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::git::Vcs;
use crate::platform;

pub const FILE_NAME: &str = "circle.yml";
pub const COMMIT_MESSAGE: &str = "Add circle.yml for continuous deployment";

/// Template model for the generated document: the app that receives CI
/// builds and the app promoted right after it.
#[derive(Debug)]
pub struct CircleConfig {
    pub deploy_app: String,
    pub promote_app: String,
}

impl CircleConfig {
    /// Render the full `circle.yml` document.
    ///
    /// On merge to main, CI force-pushes the build commit to the deploy
    /// app's git endpoint, then promotes it up the pipeline one stage at a
    /// time.
    pub fn render(&self) -> String {
        format!(
            "\
machine:
  pre:
    - heroku plugins:install heroku-pipelines
    - heroku plugins:install heroku-repo

test:
  override:
    - make test

deployment:
  production:
    branch: main
    commands:
      - git push -f {deploy_url} $CIRCLE_SHA1:refs/heads/main
      - heroku pipelines:promote -a {deploy_app}
      - heroku pipelines:promote -a {promote_app}
",
            deploy_url = platform::git_url(&self.deploy_app),
            deploy_app = self.deploy_app,
            promote_app = self.promote_app,
        )
    }
}

/// Write the document into `repo`, overwriting any existing file, then
/// stage and commit it. Pushing the commit is the caller's job.
pub fn install(git: &dyn Vcs, repo: &Path, config: &CircleConfig) -> Result<()> {
    let path = repo.join(FILE_NAME);
    fs::write(&path, config.render())
        .with_context(|| format!("writing {}", path.display()))?;

    git.add(repo, FILE_NAME)?;
    git.commit(repo, COMMIT_MESSAGE)
}
