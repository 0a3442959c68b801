//! Heroku platform access.
//!
//! A trait-based port over the app-management API so the provisioning flow
//! can run against a fake in tests. The real client lives in [`heroku`].

mod heroku;

pub use heroku::HerokuClient;

use anyhow::Result;

/// App-management operations on the hosted platform.
pub trait PlatformClient {
    /// Create an app named `name`. Names are unique platform-wide; a
    /// collision surfaces as the platform's own error.
    fn create_app(&self, name: &str) -> Result<()>;

    /// Grant `user` access to `app`.
    fn add_collaborator(&self, app: &str, user: &str) -> Result<()>;

    /// Delete `app`. The single teardown helper; not reachable from the CLI.
    fn delete_app(&self, name: &str) -> Result<()>;
}

/// Git endpoint the platform serves for `app`.
pub fn git_url(app: &str) -> String {
    format!("https://git.heroku.com/{app}.git")
}
