use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;

mod commands;

use gantry::Config;

#[derive(Parser)]
#[command(name = "gantry", version = env!("CARGO_PKG_VERSION"), about = "Bootstrap a dev/stage/prod promotion pipeline on Heroku", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Provision the tier apps, wire the pipeline, and commit circle.yml
    Setup {
        /// Path to the application repository
        path: PathBuf,
    },
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version print to stdout and exit 0; everything else is
        // usage on stderr with exit 1.
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            eprint!("{err}");
            process::exit(1);
        }
    };

    if let Err(err) = run(cli) {
        eprintln!("{} {err:#}", "error:".bright_red().bold());
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Setup { path } => commands::setup::execute(&path, &config),
    }
}
