//! Calls command - call history and outcome counts.

use anyhow::Result;
use clap::Args;

use super::GlobalArgs;
use crate::views::Screen;

#[derive(Args)]
pub struct CallsCmd;

impl CallsCmd {
    pub async fn run(&self, globals: &GlobalArgs) -> Result<()> {
        let session = globals.open_session().await?;
        globals.emit(&Screen::CallLogs(session.call_logs_view()?))
    }
}
