//! Process configuration for pipeline setup.
//!
//! Loaded once at entry from `~/.gantry/config.toml` plus environment
//! overrides, validated, then passed by reference into every component.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Required Heroku bearer credential.
pub const API_KEY_VAR: &str = "GANTRY_API_KEY";
/// Optional prefix prepended to the derived app base name.
pub const NAME_PREFIX_VAR: &str = "GANTRY_NAME_PREFIX";
/// Optional comma-separated collaborator emails.
pub const COLLABORATORS_VAR: &str = "GANTRY_COLLABORATORS";
/// Make a failed collaborator grant abort the run ("1"/"true"/"yes").
pub const STRICT_COLLABORATORS_VAR: &str = "GANTRY_STRICT_COLLABORATORS";
/// Override the config file location.
pub const CONFIG_PATH_VAR: &str = "GANTRY_CONFIG";

/// Resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Heroku API key used as the bearer credential.
    pub api_key: String,
    /// Prefix prepended to the derived app base name.
    pub name_prefix: Option<String>,
    /// Collaborator emails granted access to every tier, in order.
    pub collaborators: Vec<String>,
    /// Whether a failed collaborator grant aborts the run.
    pub strict_collaborators: bool,
}

/// On-disk shape of `~/.gantry/config.toml`. Every field is optional; the
/// environment can supply or override any of them.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    api_key: Option<String>,
    name_prefix: Option<String>,
    collaborators: Option<Vec<String>>,
    strict_collaborators: Option<bool>,
}

impl Config {
    /// Load configuration from the user config file and the environment.
    pub fn load() -> Result<Self> {
        let path = config_path();
        let file: FileConfig = match fs::read_to_string(&path) {
            Ok(raw) => toml::from_str(&raw)
                .with_context(|| format!("parsing config {}", path.display()))?,
            Err(_) => FileConfig::default(),
        };
        Self::resolve(file, |key| env::var(key).ok())
    }

    /// Merge file values with environment overrides (environment wins) and
    /// validate the result.
    fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = env(API_KEY_VAR).or(file.api_key);
        let Some(api_key) = api_key.filter(|key| !key.trim().is_empty()) else {
            bail!(
                "no API key configured; set {API_KEY_VAR} or api_key in {}",
                config_path().display()
            );
        };

        let name_prefix = env(NAME_PREFIX_VAR)
            .or(file.name_prefix)
            .filter(|prefix| !prefix.is_empty());

        let collaborators = match env(COLLABORATORS_VAR) {
            Some(raw) => split_list(&raw),
            None => file.collaborators.unwrap_or_default(),
        };

        let strict_collaborators = match env(STRICT_COLLABORATORS_VAR) {
            Some(raw) => matches!(raw.trim(), "1" | "true" | "yes"),
            None => file.strict_collaborators.unwrap_or(false),
        };

        Ok(Config {
            api_key,
            name_prefix,
            collaborators,
            strict_collaborators,
        })
    }
}

/// Comma-separated list, entries trimmed, empties dropped.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

fn config_path() -> PathBuf {
    if let Ok(custom) = env::var(CONFIG_PATH_VAR) {
        return PathBuf::from(shellexpand::tilde(&custom).into_owned());
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".gantry")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_key: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_file_only() {
        let file: FileConfig = toml::from_str(
            r#"
            api_key = "secret"
            name_prefix = "co-"
            collaborators = ["a@example.com", "b@example.com"]
            "#,
        )
        .unwrap();

        let config = Config::resolve(file, no_env).unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.name_prefix.as_deref(), Some("co-"));
        assert_eq!(config.collaborators, ["a@example.com", "b@example.com"]);
        assert!(!config.strict_collaborators);
    }

    #[test]
    fn test_env_overrides_file() {
        let file: FileConfig = toml::from_str(r#"api_key = "from-file""#).unwrap();

        let config = Config::resolve(file, |key| match key {
            API_KEY_VAR => Some("from-env".to_string()),
            COLLABORATORS_VAR => Some("x@example.com, y@example.com,".to_string()),
            STRICT_COLLABORATORS_VAR => Some("true".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.api_key, "from-env");
        assert_eq!(config.collaborators, ["x@example.com", "y@example.com"]);
        assert!(config.strict_collaborators);
    }

    #[test]
    fn test_missing_api_key_is_an_error() {
        let err = Config::resolve(FileConfig::default(), no_env).unwrap_err();
        assert!(err.to_string().contains(API_KEY_VAR));
    }

    #[test]
    fn test_blank_api_key_is_an_error() {
        let file: FileConfig = toml::from_str(r#"api_key = """#).unwrap();
        assert!(Config::resolve(file, no_env).is_err());
    }

    #[test]
    fn test_defaults_are_empty() {
        let file: FileConfig = toml::from_str(r#"api_key = "secret""#).unwrap();
        let config = Config::resolve(file, no_env).unwrap();
        assert!(config.name_prefix.is_none());
        assert!(config.collaborators.is_empty());
        assert!(!config.strict_collaborators);
    }
}
