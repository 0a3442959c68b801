use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use super::PlatformClient;

const DEFAULT_BASE_URL: &str = "https://api.heroku.com";
const ACCEPT: &str = "application/vnd.heroku+json; version=3";

/// Client for the Heroku platform API.
///
/// Requests are synchronous with a 30s timeout. Responses are not parsed;
/// a non-success status becomes an error carrying the response body.
pub struct HerokuClient {
    base_url: String,
    api_key: String,
    client: reqwest::blocking::Client,
}

#[derive(Debug, Serialize)]
struct CreateAppRequest<'a> {
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct AddCollaboratorRequest<'a> {
    user: &'a str,
}

impl HerokuClient {
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the client at a different API host. Tests use this to target a
    /// local stub server.
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("failed to create HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
        })
    }

    fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .header("Accept", ACCEPT)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .with_context(|| format!("POST {url} failed"))?;

        check_status(response)
    }

    fn delete(&self, path: &str) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .delete(&url)
            .header("Accept", ACCEPT)
            .header("Content-Type", "application/json")
            .bearer_auth(&self.api_key)
            .send()
            .with_context(|| format!("DELETE {url} failed"))?;

        check_status(response)
    }
}

impl PlatformClient for HerokuClient {
    fn create_app(&self, name: &str) -> Result<()> {
        self.post("/apps", &CreateAppRequest { name })
            .with_context(|| format!("failed to create app '{name}'"))
    }

    fn add_collaborator(&self, app: &str, user: &str) -> Result<()> {
        self.post(
            &format!("/apps/{app}/collaborators"),
            &AddCollaboratorRequest { user },
        )
        .with_context(|| format!("failed to add collaborator '{user}' to '{app}'"))
    }

    fn delete_app(&self, name: &str) -> Result<()> {
        self.delete(&format!("/apps/{name}"))
            .with_context(|| format!("failed to delete app '{name}'"))
    }
}

fn check_status(response: reqwest::blocking::Response) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    let body = response.text().unwrap_or_default();
    bail!("API returned {status}: {}", body.trim())
}
