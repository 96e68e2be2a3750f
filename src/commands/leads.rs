//! Leads command - list the organization's leads.

use anyhow::Result;
use clap::Args;

use super::GlobalArgs;
use crate::types::StatusFilter;
use crate::views::Screen;

#[derive(Args)]
pub struct LeadsCmd {
    /// Filter by status (all, new, contacted, converted)
    #[arg(long, short = 's', default_value = "all")]
    pub status: StatusFilter,
}

impl LeadsCmd {
    pub async fn run(&self, globals: &GlobalArgs) -> Result<()> {
        let mut session = globals.open_session().await?;
        session.set_filter(self.status);
        globals.emit(&Screen::Leads(session.leads_view()?))
    }
}
