//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{
    CallsCmd, ConfigCmd, GlobalArgs, LeadsCmd, OverviewCmd, SetStatusCmd, SettingsCmd, ShellCmd,
};

#[derive(Parser)]
#[command(name = "sdash")]
#[command(about = "Sales Dashboard - leads and call logs per organization")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub globals: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show headline figures and quick actions
    Overview(OverviewCmd),

    /// List the organization's leads
    Leads(LeadsCmd),

    /// Show call history and outcome counts
    Calls(CallsCmd),

    /// Show organization settings (admin only)
    Settings(SettingsCmd),

    /// Change a lead's status (admin only)
    SetStatus(SetStatusCmd),

    /// Interactive dashboard session
    Shell(ShellCmd),

    /// Manage configuration (default organization, role, records file)
    Config(ConfigCmd),
}

impl Cli {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let globals = &self.globals;
        match &self.command {
            Command::Overview(cmd) => cmd.run(globals).await,
            Command::Leads(cmd) => cmd.run(globals).await,
            Command::Calls(cmd) => cmd.run(globals).await,
            Command::Settings(cmd) => cmd.run(globals).await,
            Command::SetStatus(cmd) => cmd.run(globals).await,
            Command::Shell(cmd) => cmd.run(globals).await,
            Command::Config(cmd) => cmd.run().await,
        }
    }
}
