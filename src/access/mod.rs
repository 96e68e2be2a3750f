//! Scoped record access.
//!
//! Pure functions from (records, tenant, optional secondary filter) to the
//! subset a user may see and the figures derived from it. Nothing here
//! fails: unknown ids, empty inputs and unauthorized edits all come back as
//! empty results or unchanged collections.

mod call_logs;
mod gating;
mod leads;
mod overview;

pub use call_logs::{call_log_stats, scoped_call_logs, CallLogStats};
pub use gating::{can_edit_lead_status, nav_entries, resolve_view, NavEntry, View, ADMIN_REQUIRED};
pub use leads::{scoped_leads, set_lead_status};
pub use overview::{overview_stats, OverviewStats};
