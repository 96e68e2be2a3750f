//! Role gating.
//!
//! Read access is never role-restricted; every role sees every lead and call
//! of its tenant. Roles only decide which controls are interactive and
//! whether the settings view can be opened.

use serde::Serialize;

use crate::types::{normalize, Role};

/// A dashboard view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Overview,
    Leads,
    CallLogs,
    Settings,
}

impl View {
    pub const ALL: [View; 4] = [View::Overview, View::Leads, View::CallLogs, View::Settings];

    /// Look up a view by name. Unknown names land on the overview.
    pub fn from_name(name: &str) -> View {
        match normalize(name).as_str() {
            "leads" => View::Leads,
            "call-logs" | "calls" => View::CallLogs,
            "settings" => View::Settings,
            _ => View::Overview,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Overview => "Dashboard",
            View::Leads => "Leads",
            View::CallLogs => "Call Logs",
            View::Settings => "Settings",
        }
    }

    pub fn admin_only(&self) -> bool {
        matches!(self, View::Settings)
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The view actually shown for a requested view. Admin-only views fall back
/// to the overview for everyone else.
pub fn resolve_view(requested: View, role: Role) -> View {
    if requested.admin_only() && !role.is_admin() {
        View::Overview
    } else {
        requested
    }
}

/// Whether the lead status control is interactive for `role`.
pub fn can_edit_lead_status(role: Role) -> bool {
    role.is_admin()
}

/// Hint shown next to a control the role cannot use.
pub const ADMIN_REQUIRED: &str = "Admin access required";

/// A navigation entry or quick action, with its gating already applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub view: View,
    pub label: &'static str,
    pub enabled: bool,
}

/// Navigation entries for `role`, in display order.
pub fn nav_entries(role: Role) -> Vec<NavEntry> {
    View::ALL
        .iter()
        .map(|&view| NavEntry {
            view,
            label: view.label(),
            enabled: resolve_view(view, role) == view,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_settings_resolves_to_overview() {
        assert_eq!(resolve_view(View::Settings, Role::Agent), View::Overview);
        assert_eq!(resolve_view(View::Settings, Role::Admin), View::Settings);
    }

    #[test]
    fn test_read_views_open_to_every_role() {
        for role in [Role::Admin, Role::Agent] {
            for view in [View::Overview, View::Leads, View::CallLogs] {
                assert_eq!(resolve_view(view, role), view);
            }
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(View::from_name("leads"), View::Leads);
        assert_eq!(View::from_name("call-logs"), View::CallLogs);
        assert_eq!(View::from_name("Calls"), View::CallLogs);
        assert_eq!(View::from_name("settings"), View::Settings);
        assert_eq!(View::from_name("dashboard"), View::Overview);
        assert_eq!(View::from_name("reports"), View::Overview);
    }

    #[test]
    fn test_can_edit_lead_status() {
        assert!(can_edit_lead_status(Role::Admin));
        assert!(!can_edit_lead_status(Role::Agent));
    }

    #[test]
    fn test_nav_entries_disable_settings_for_agent() {
        let entries = nav_entries(Role::Agent);
        assert_eq!(entries.len(), 4);
        for entry in &entries {
            assert_eq!(entry.enabled, entry.view != View::Settings);
        }
        assert!(nav_entries(Role::Admin).iter().all(|e| e.enabled));
    }
}
