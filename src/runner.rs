//! Step execution and status reporting.
//!
//! Every externally-visible setup step runs through here: the step label is
//! printed, the step runs, and the first failure aborts the whole run by
//! propagating up to `main`. Earlier side effects are left in place.

use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};
use colored::*;

/// Announce `label`, run the step, and convert a failure into an error that
/// names the step.
pub fn step<T>(label: &str, run: impl FnOnce() -> Result<T>) -> Result<T> {
    println!("{} {}", "==>".bright_cyan(), label.bold());
    run().with_context(|| format!("step failed: {label}"))
}

/// Run an external command inside `repo` as a step, echoing the argv line.
///
/// A non-zero exit becomes an error carrying the command's stderr.
pub fn step_cmd(label: &str, repo: &Path, program: &str, args: &[&str]) -> Result<()> {
    step(label, || {
        println!("    {} {}", program.dimmed(), args.join(" ").dimmed());

        let output = Command::new(program)
            .args(args)
            .current_dir(repo)
            .output()
            .with_context(|| format!("failed to run {program}"))?;

        if !output.status.success() {
            bail!(
                "`{program} {}` exited with {}: {}",
                args.join(" "),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(())
    })
}
