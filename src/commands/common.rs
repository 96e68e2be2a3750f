//! Shared plumbing for view commands: option resolution and output.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use crate::config::Config;
use crate::data;
use crate::render;
use crate::session::Session;
use crate::types::{Role, Tenant};
use crate::views::Screen;

/// Options accepted by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Organization to sign in to: org-a, org-b or the full name (default from config)
    #[arg(long, short = 't', global = true, env = "SDASH_TENANT")]
    pub tenant: Option<Tenant>,

    /// Role to sign in as: admin, agent (default from config)
    #[arg(long, short = 'r', global = true, env = "SDASH_ROLE")]
    pub role: Option<Role>,

    /// Records file (.toml or .json) to use instead of the sample data
    #[arg(long, global = true, env = "SDASH_DATA")]
    pub data: Option<PathBuf>,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalArgs {
    /// Load config and records, and sign in with the resolved tenant and role.
    pub async fn open_session(&self) -> Result<Session> {
        let config = Config::load()?;
        let mut session = self.open_signed_out(&config).await?;

        let tenant = self.tenant.unwrap_or(config.default_tenant);
        let role = self.role.unwrap_or(config.default_role);
        session.login(tenant, role);
        Ok(session)
    }

    /// Load config and records without signing in.
    pub async fn open_signed_out(&self, config: &Config) -> Result<Session> {
        let data_file = self.data.as_deref().or(config.data_file.as_deref());
        debug!(data_file = ?data_file, "loading records");

        let records = data::load_records(data_file)
            .await
            .context("Failed to load records")?;
        Ok(Session::new(records, config.display_name.clone()))
    }

    pub fn emit(&self, screen: &Screen) -> Result<()> {
        if self.json {
            let json = serde_json::to_string_pretty(screen).context("Failed to serialize view")?;
            println!("{}", json);
        } else {
            print!("{}", render::screen(screen));
        }
        Ok(())
    }
}
