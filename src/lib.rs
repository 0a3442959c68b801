pub mod ci;
pub mod config;
pub mod git;
pub mod naming;
pub mod pipeline;
pub mod platform;
pub mod provision;
pub mod runner;
pub mod tier;

// Re-export commonly used types
pub use config::Config;
pub use git::{GitCli, Vcs};
pub use platform::{HerokuClient, PlatformClient};
pub use tier::Tier;
