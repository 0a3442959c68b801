//! Promotion pipeline wiring between tier apps.

use std::path::Path;

use anyhow::Result;

use crate::runner;

/// Link `upstream` and `downstream` as consecutive pipeline stages.
///
/// Uses the `heroku-pipelines` CLI plugin. Both apps must already exist;
/// the platform rejects unknown names and the step runner aborts the run.
pub fn link(repo: &Path, upstream: &str, downstream: &str) -> Result<()> {
    runner::step_cmd(
        &format!("Linking {upstream} -> {downstream}"),
        repo,
        "heroku",
        &["pipelines:add", "-a", upstream, downstream],
    )
}
