use std::path::Path;

use anyhow::Result;

use gantry::config::Config;
use gantry::git::GitCli;
use gantry::platform::HerokuClient;
use gantry::provision;

pub fn execute(path: &Path, config: &Config) -> Result<()> {
    let git = GitCli;
    let api = HerokuClient::new(&config.api_key)?;

    provision::run(path, config, &git, &api)
}
