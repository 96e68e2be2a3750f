//! View models handed to presentation.
//!
//! Each one is a snapshot of what the access layer returned for the current
//! user: the scoped records, derived figures, and which controls are live.

use serde::Serialize;

use crate::access::{
    call_log_stats, can_edit_lead_status, nav_entries, overview_stats, scoped_call_logs,
    scoped_leads, CallLogStats, NavEntry, OverviewStats,
};
use crate::types::{CallLog, Lead, Role, StatusFilter, Tenant, User};

#[derive(Debug, Clone, Serialize)]
pub struct OverviewView {
    pub tenant: Tenant,
    pub role: Role,
    pub stats: OverviewStats,
    pub quick_actions: Vec<NavEntry>,
}

impl OverviewView {
    pub fn build(user: &User, leads: &[Lead], call_logs: &[CallLog]) -> Self {
        let leads = scoped_leads(leads, user.tenant, StatusFilter::All);
        let call_logs = scoped_call_logs(call_logs, user.tenant);
        Self {
            tenant: user.tenant,
            role: user.role,
            stats: overview_stats(&leads, &call_logs),
            // The overview itself is not a quick action.
            quick_actions: nav_entries(user.role)
                .into_iter()
                .skip(1)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LeadsView {
    pub tenant: Tenant,
    pub filter: StatusFilter,
    /// Whether the per-lead status control is interactive.
    pub editable: bool,
    pub leads: Vec<Lead>,
}

impl LeadsView {
    pub fn build(user: &User, leads: &[Lead], filter: StatusFilter) -> Self {
        Self {
            tenant: user.tenant,
            filter,
            editable: can_edit_lead_status(user.role),
            leads: scoped_leads(leads, user.tenant, filter),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CallLogsView {
    pub tenant: Tenant,
    pub stats: CallLogStats,
    pub call_logs: Vec<CallLog>,
}

impl CallLogsView {
    pub fn build(user: &User, call_logs: &[CallLog]) -> Self {
        let call_logs = scoped_call_logs(call_logs, user.tenant);
        Self {
            tenant: user.tenant,
            stats: call_log_stats(&call_logs),
            call_logs,
        }
    }
}

/// A settings area listed on the settings view.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SettingsSection {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static SETTINGS_SECTIONS: [SettingsSection; 3] = [
    SettingsSection {
        id: "organization",
        title: "Organization Settings",
        description: "Manage organization details and preferences",
    },
    SettingsSection {
        id: "permissions",
        title: "Permissions & Roles",
        description: "Configure user roles and access controls",
    },
    SettingsSection {
        id: "notifications",
        title: "Notifications",
        description: "Set up alerts and notification preferences",
    },
];

/// Per-tenant switches on the settings view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickSettings {
    pub email_notifications: bool,
    pub auto_assign_leads: bool,
    pub call_recording: bool,
}

impl Default for QuickSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            auto_assign_leads: false,
            call_recording: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SettingsView {
    pub tenant: Tenant,
    pub sections: &'static [SettingsSection],
    pub quick: QuickSettings,
}

impl SettingsView {
    pub fn build(user: &User, quick: QuickSettings) -> Self {
        Self {
            tenant: user.tenant,
            sections: &SETTINGS_SECTIONS,
            quick,
        }
    }
}

/// Whichever view the current user ended up on.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "kebab-case")]
pub enum Screen {
    Overview(OverviewView),
    Leads(LeadsView),
    CallLogs(CallLogsView),
    Settings(SettingsView),
}
