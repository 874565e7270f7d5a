//! Command-line and environment configuration for `profile-lookup`.

use std::time::Duration;

use clap::Parser;
use profile_core::GITHUB_API_BASE_URL;

/// Look up a GitHub user's avatar, name, and bio.
#[derive(Parser, Debug, Clone)]
#[command(name = "profile-lookup", version)]
pub struct Config {
    /// Username to look up once. Without it, usernames are read from stdin,
    /// one per line.
    pub username: Option<String>,

    /// Base URL of the user-lookup API.
    #[arg(long, env = "PROFILE_API_BASE_URL", default_value = GITHUB_API_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds.
    #[arg(long, env = "PROFILE_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
