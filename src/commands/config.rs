//! Config command - manage CLI defaults.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::Config;
use crate::types::{Role, Tenant};

#[derive(Args)]
pub struct ConfigCmd {
    #[command(subcommand)]
    pub command: ConfigSubCmd,
}

#[derive(Subcommand)]
pub enum ConfigSubCmd {
    /// Set the default organization
    SetTenant(SetTenantCmd),

    /// Set the default role
    SetRole(SetRoleCmd),

    /// Set the display name of the signed-in user
    SetName(SetNameCmd),

    /// Set the records file to load (omit the path to go back to sample data)
    SetData(SetDataCmd),

    /// Show current configuration
    Show,
}

#[derive(Args)]
pub struct SetTenantCmd {
    pub tenant: Tenant,
}

#[derive(Args)]
pub struct SetRoleCmd {
    pub role: Role,
}

#[derive(Args)]
pub struct SetNameCmd {
    pub name: String,
}

#[derive(Args)]
pub struct SetDataCmd {
    /// Path to a .toml or .json records file
    pub path: Option<PathBuf>,
}

impl ConfigCmd {
    pub async fn run(&self) -> Result<()> {
        match &self.command {
            ConfigSubCmd::SetTenant(cmd) => {
                let mut config = Config::load()?;
                config.default_tenant = cmd.tenant;
                config.save()?;
                println!("Default organization set to: {}", cmd.tenant);
            }
            ConfigSubCmd::SetRole(cmd) => {
                let mut config = Config::load()?;
                config.default_role = cmd.role;
                config.save()?;
                println!("Default role set to: {}", cmd.role);
            }
            ConfigSubCmd::SetName(cmd) => {
                let mut config = Config::load()?;
                config.display_name = cmd.name.clone();
                config.save()?;
                println!("Display name set to: {}", cmd.name);
            }
            ConfigSubCmd::SetData(cmd) => {
                let mut config = Config::load()?;
                config.data_file = cmd.path.clone();
                config.save()?;
                match &cmd.path {
                    Some(path) => println!("Records file set to: {}", path.display()),
                    None => println!("Using built-in sample records."),
                }
            }
            ConfigSubCmd::Show => {
                let config = Config::load()?;
                println!("Config: {}", Config::config_path()?.display());
                println!();
                println!("display_name:    {}", config.display_name);
                println!("default_tenant:  {}", config.default_tenant);
                println!("default_role:    {}", config.default_role);
                println!(
                    "data_file:       {}",
                    config
                        .data_file
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "(sample data)".to_string())
                );
            }
        }
        Ok(())
    }
}
