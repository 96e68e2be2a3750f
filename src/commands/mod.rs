//! CLI command implementations.

mod calls;
mod common;
mod config;
mod leads;
mod overview;
mod set_status;
mod settings;
mod shell;

pub use calls::CallsCmd;
pub use common::GlobalArgs;
pub use config::ConfigCmd;
pub use leads::LeadsCmd;
pub use overview::OverviewCmd;
pub use set_status::SetStatusCmd;
pub use settings::SettingsCmd;
pub use shell::ShellCmd;
