//! Set-status command - change one lead's status.
//!
//! Edits apply to the in-memory records of this invocation only.

use anyhow::Result;
use clap::Args;

use super::GlobalArgs;
use crate::access::ADMIN_REQUIRED;
use crate::session::StatusEdit;
use crate::types::LeadStatus;
use crate::views::Screen;

#[derive(Args)]
pub struct SetStatusCmd {
    /// Lead id
    pub lead_id: String,

    /// New status: new, contacted, converted
    pub status: LeadStatus,
}

impl SetStatusCmd {
    pub async fn run(&self, globals: &GlobalArgs) -> Result<()> {
        let mut session = globals.open_session().await?;

        match session.change_lead_status(&self.lead_id, self.status)? {
            StatusEdit::Applied => {
                eprintln!("Lead {} set to {}.", self.lead_id, self.status);
            }
            StatusEdit::ReadOnly => {
                eprintln!("View-only access: {} to edit lead statuses.", ADMIN_REQUIRED);
            }
            StatusEdit::UnknownLead => {
                eprintln!("No lead with id '{}' in this organization.", self.lead_id);
            }
        }

        globals.emit(&Screen::Leads(session.leads_view()?))
    }
}
