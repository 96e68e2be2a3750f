//! Settings command - admin-only settings; everyone else gets the overview.

use anyhow::Result;
use clap::Args;

use super::GlobalArgs;

#[derive(Args)]
pub struct SettingsCmd;

impl SettingsCmd {
    pub async fn run(&self, globals: &GlobalArgs) -> Result<()> {
        let session = globals.open_session().await?;
        globals.emit(&session.settings_view()?)
    }
}
