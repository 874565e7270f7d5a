//! `profile-lookup`: look up GitHub users from the terminal.
//!
//! Usage:
//!   profile-lookup [USERNAME] [--base-url <url>] [--timeout-secs <n>]
//!
//! With a username, performs one lookup and exits non-zero if it fails.
//! Without one, reads usernames from stdin and prints the screen after every
//! change. Logs go to stderr; stdout carries only the rendered screen.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use profile_core::ProfileClient;
use profile_shell::{cli, Config, ReqwestTransport, Session};
use tokio::io::BufReader;
use tokio::sync::Mutex;
use tracing::debug;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::parse();
    let client = ProfileClient::new(&config.base_url);
    debug!(?config, base_url = client.base_url(), "starting");

    let transport = ReqwestTransport::new(config.timeout()).context("build HTTP client")?;
    let session = Session::new(client, Arc::new(transport));

    match config.username.as_deref() {
        Some(username) => cli::lookup_once(&session, username, &mut std::io::stdout()).await,
        None => {
            cli::interactive(
                session,
                BufReader::new(tokio::io::stdin()),
                Arc::new(Mutex::new(std::io::stdout())),
                tokio::signal::ctrl_c(),
            )
            .await
        }
    }
}
