//! The setup workflow: provision every tier, wire the promotion pipeline,
//! install the CI config, push main.
//!
//! Steps run strictly in order and the first failure aborts the run. There
//! is no rollback; apps and remotes created before a failure stay in place.

use std::path::Path;

use anyhow::{bail, Context, Result};
use colored::*;
use which::which;

use crate::ci::{self, CircleConfig};
use crate::config::Config;
use crate::git::Vcs;
use crate::naming;
use crate::pipeline;
use crate::platform::{self, PlatformClient};
use crate::runner;
use crate::tier::Tier;

const MAIN_BRANCH: &str = "main";

/// Run the whole bootstrap against `repo`.
pub fn run(repo: &Path, config: &Config, git: &dyn Vcs, api: &dyn PlatformClient) -> Result<()> {
    preflight(git, repo)?;

    let base = naming::base_name(git, repo, config.name_prefix.as_deref())?;
    println!("🚀 Provisioning pipeline for {}\n", base.bright_green().bold());

    for tier in Tier::ALL {
        provision_tier(git, api, repo, &base, tier, config)?;
    }

    let [dev, stage, prod] = Tier::ALL.map(|tier| tier.app_name(&base));
    pipeline::link(repo, &dev, &stage)?;
    pipeline::link(repo, &stage, &prod)?;

    runner::step("Installing circle.yml", || {
        let circle = CircleConfig {
            deploy_app: dev.clone(),
            promote_app: stage.clone(),
        };
        ci::install(git, repo, &circle)
    })?;

    runner::step(&format!("Pushing {MAIN_BRANCH} to origin"), || {
        git.push(repo, "origin", MAIN_BRANCH)
    })?;

    println!(
        "\n✨ {}",
        format!("Pipeline ready: {dev} -> {stage} -> {prod}")
            .bright_green()
            .bold()
    );
    Ok(())
}

/// Create the tier app, wire the local remote, grant collaborators, push
/// main. Side effects are cumulative; nothing is rolled back on failure.
pub fn provision_tier(
    git: &dyn Vcs,
    api: &dyn PlatformClient,
    repo: &Path,
    base: &str,
    tier: Tier,
    config: &Config,
) -> Result<()> {
    let app = tier.app_name(base);

    runner::step(&format!("Creating {tier} app {app}"), || {
        api.create_app(&app)
    })?;

    runner::step(&format!("Registering remote '{}'", tier.remote()), || {
        git.add_remote(repo, tier.remote(), &platform::git_url(&app))
    })?;

    add_collaborators(api, &app, config)?;

    runner::step(&format!("Pushing {MAIN_BRANCH} to {}", tier.remote()), || {
        git.push(repo, tier.remote(), MAIN_BRANCH)
    })?;

    Ok(())
}

/// Grant every configured collaborator access to `app`, in list order.
///
/// Earlier grants stick even when a later one fails. In best-effort mode a
/// failed grant is reported and the run continues; in strict mode it aborts.
pub fn add_collaborators(api: &dyn PlatformClient, app: &str, config: &Config) -> Result<()> {
    for user in &config.collaborators {
        match api.add_collaborator(app, user) {
            Ok(()) => println!("    added collaborator {user}"),
            Err(err) if config.strict_collaborators => {
                return Err(err).with_context(|| format!("adding collaborator {user} to {app}"));
            }
            Err(err) => {
                println!(
                    "{} could not add {user} to {app}: {err:#}",
                    "warning:".yellow().bold()
                );
            }
        }
    }
    Ok(())
}

/// Fail fast before mutating anything: the required tools must be on PATH
/// and the target must be a git work tree.
fn preflight(git: &dyn Vcs, repo: &Path) -> Result<()> {
    for tool in ["git", "heroku"] {
        which(tool)
            .map(|_| ())
            .with_context(|| format!("'{tool}' not found on PATH; install it and retry"))?;
    }

    if !git.is_repo(repo) {
        bail!("{} is not a git repository", repo.display());
    }

    Ok(())
}
