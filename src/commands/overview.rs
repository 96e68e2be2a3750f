//! Overview command - headline figures for the organization.

use anyhow::Result;
use clap::Args;

use super::GlobalArgs;
use crate::views::Screen;

#[derive(Args)]
pub struct OverviewCmd;

impl OverviewCmd {
    pub async fn run(&self, globals: &GlobalArgs) -> Result<()> {
        let session = globals.open_session().await?;
        globals.emit(&Screen::Overview(session.overview()?))
    }
}
