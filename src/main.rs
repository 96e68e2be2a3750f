//! Sales Dashboard CLI - role-aware, multi-tenant leads and call logs.

mod access;
mod cli;
mod commands;
mod config;
mod data;
mod render;
mod session;
mod types;
mod views;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr so tables and JSON on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.execute().await
}
