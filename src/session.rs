//! Application state holder.
//!
//! A `Session` is the single owner of the signed-in user, the current view,
//! the lead collection and the quick settings. Everything that reads records
//! goes through the user held here, so a tenant switch re-scopes every view
//! at once.

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, info};

use crate::access::{can_edit_lead_status, resolve_view, set_lead_status, View};
use crate::data::Records;
use crate::types::{normalize, CallLog, Lead, LeadStatus, Role, StatusFilter, Tenant, User};
use crate::views::{CallLogsView, LeadsView, OverviewView, QuickSettings, Screen, SettingsView};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("not signed in")]
    NotLoggedIn,

    #[error("admin access required")]
    AdminRequired,

    #[error("unknown setting: {0} (expected: email-notifications, auto-assign-leads, call-recording)")]
    UnknownSetting(String),
}

/// What happened to a status edit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusEdit {
    Applied,
    /// The role may not edit; nothing changed.
    ReadOnly,
    /// No lead of the current tenant has that id; nothing changed.
    UnknownLead,
}

/// A quick settings switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    EmailNotifications,
    AutoAssignLeads,
    CallRecording,
}

impl Setting {
    pub fn as_str(&self) -> &'static str {
        match self {
            Setting::EmailNotifications => "email-notifications",
            Setting::AutoAssignLeads => "auto-assign-leads",
            Setting::CallRecording => "call-recording",
        }
    }
}

impl std::fmt::Display for Setting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Setting {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "email-notifications" | "email" => Ok(Setting::EmailNotifications),
            "auto-assign-leads" | "auto-assign" => Ok(Setting::AutoAssignLeads),
            "call-recording" | "recording" => Ok(Setting::CallRecording),
            _ => Err(SessionError::UnknownSetting(s.to_string())),
        }
    }
}

pub struct Session {
    display_name: String,
    user: Option<User>,
    view: View,
    filter: StatusFilter,
    leads: Vec<Lead>,
    call_logs: Vec<CallLog>,
    settings: HashMap<Tenant, QuickSettings>,
}

impl Session {
    /// A signed-out session over `records`. `display_name` is the name given
    /// to whoever logs in.
    pub fn new(records: Records, display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            user: None,
            view: View::Overview,
            filter: StatusFilter::All,
            leads: records.leads,
            call_logs: records.call_logs,
            settings: HashMap::new(),
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    fn require_user(&self) -> Result<&User, SessionError> {
        self.user.as_ref().ok_or(SessionError::NotLoggedIn)
    }

    pub fn login(&mut self, tenant: Tenant, role: Role) -> &User {
        info!(tenant = %tenant, role = %role, "signed in");
        self.view = View::Overview;
        self.user.insert(User::new(self.display_name.clone(), role, tenant))
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!(tenant = %user.tenant, "signed out");
        }
        self.view = View::Overview;
    }

    pub fn switch_tenant(&mut self, tenant: Tenant) -> Result<&User, SessionError> {
        let switched = self.require_user()?.with_tenant(tenant);
        info!(tenant = %tenant, "switched organization");
        Ok(self.user.insert(switched))
    }

    /// Record the requested view. Use [`Session::current_view`] for the view
    /// that is actually shown.
    pub fn navigate(&mut self, view: View) {
        debug!(view = %view, "navigate");
        self.view = view;
    }

    pub fn current_view(&self) -> View {
        match &self.user {
            Some(user) => resolve_view(self.view, user.role),
            None => View::Overview,
        }
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    /// Change a lead's status on behalf of the current user.
    ///
    /// Only leads of the user's own tenant are addressable.
    pub fn change_lead_status(
        &mut self,
        lead_id: &str,
        status: LeadStatus,
    ) -> Result<StatusEdit, SessionError> {
        let user = self.require_user()?;
        let (role, tenant) = (user.role, user.tenant);

        if !can_edit_lead_status(role) {
            return Ok(StatusEdit::ReadOnly);
        }
        if !self
            .leads
            .iter()
            .any(|lead| lead.id == lead_id && lead.tenant == tenant)
        {
            return Ok(StatusEdit::UnknownLead);
        }

        let leads = std::mem::take(&mut self.leads);
        self.leads = set_lead_status(leads, lead_id, status, role);
        debug!(lead_id, status = %status, "lead status changed");
        Ok(StatusEdit::Applied)
    }

    pub fn quick_settings(&self) -> Result<QuickSettings, SessionError> {
        let user = self.require_user()?;
        Ok(self.settings.get(&user.tenant).copied().unwrap_or_default())
    }

    /// Flip a quick setting for the current tenant. Admin only.
    pub fn toggle_setting(&mut self, setting: Setting) -> Result<bool, SessionError> {
        let user = self.require_user()?;
        if !user.is_admin() {
            return Err(SessionError::AdminRequired);
        }
        let tenant = user.tenant;

        let quick = self.settings.entry(tenant).or_default();
        let flag = match setting {
            Setting::EmailNotifications => &mut quick.email_notifications,
            Setting::AutoAssignLeads => &mut quick.auto_assign_leads,
            Setting::CallRecording => &mut quick.call_recording,
        };
        *flag = !*flag;
        Ok(*flag)
    }

    pub fn overview(&self) -> Result<OverviewView, SessionError> {
        let user = self.require_user()?;
        Ok(OverviewView::build(user, &self.leads, &self.call_logs))
    }

    pub fn leads_view(&self) -> Result<LeadsView, SessionError> {
        let user = self.require_user()?;
        Ok(LeadsView::build(user, &self.leads, self.filter))
    }

    pub fn call_logs_view(&self) -> Result<CallLogsView, SessionError> {
        let user = self.require_user()?;
        Ok(CallLogsView::build(user, &self.call_logs))
    }

    /// The settings view, or the overview for non-admins.
    pub fn settings_view(&self) -> Result<Screen, SessionError> {
        let user = self.require_user()?;
        if resolve_view(View::Settings, user.role) != View::Settings {
            return self.overview().map(Screen::Overview);
        }
        Ok(Screen::Settings(SettingsView::build(user, self.quick_settings()?)))
    }

    /// Snapshot of the current view.
    pub fn screen(&self) -> Result<Screen, SessionError> {
        match self.current_view() {
            View::Overview => self.overview().map(Screen::Overview),
            View::Leads => self.leads_view().map(Screen::Leads),
            View::CallLogs => self.call_logs_view().map(Screen::CallLogs),
            View::Settings => self.settings_view(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_records;

    fn session() -> Session {
        Session::new(sample_records(), "Demo User")
    }

    #[test]
    fn test_logged_out_reads_fail() {
        let s = session();
        assert_eq!(s.leads_view().unwrap_err(), SessionError::NotLoggedIn);
        assert_eq!(s.screen().unwrap_err(), SessionError::NotLoggedIn);
    }

    #[test]
    fn test_login_resets_view() {
        let mut s = session();
        s.login(Tenant::OrganizationA, Role::Admin);
        s.navigate(View::Leads);
        assert_eq!(s.current_view(), View::Leads);

        let user = s.login(Tenant::OrganizationB, Role::Agent);
        assert_eq!(user.name, "Demo User");
        assert_eq!(s.current_view(), View::Overview);
    }

    #[test]
    fn test_tenant_switch_rescopes_reads() {
        let mut s = session();
        s.login(Tenant::OrganizationA, Role::Agent);
        assert_eq!(s.leads_view().unwrap().leads.len(), 5);

        s.switch_tenant(Tenant::OrganizationB).unwrap();
        let view = s.leads_view().unwrap();
        assert_eq!(view.leads.len(), 3);
        assert!(view.leads.iter().all(|l| l.tenant == Tenant::OrganizationB));

        let calls = s.call_logs_view().unwrap();
        assert!(calls.call_logs.iter().all(|c| c.tenant == Tenant::OrganizationB));
        assert_eq!(s.user().unwrap().role, Role::Agent);
    }

    #[test]
    fn test_switch_tenant_requires_login() {
        let mut s = session();
        assert_eq!(
            s.switch_tenant(Tenant::OrganizationB).unwrap_err(),
            SessionError::NotLoggedIn
        );
    }

    #[test]
    fn test_agent_settings_navigation_lands_on_overview() {
        let mut s = session();
        s.login(Tenant::OrganizationA, Role::Agent);
        s.navigate(View::Settings);

        assert_eq!(s.current_view(), View::Overview);
        assert!(matches!(s.screen().unwrap(), Screen::Overview(_)));
        assert!(matches!(s.settings_view().unwrap(), Screen::Overview(_)));
    }

    #[test]
    fn test_admin_settings_navigation() {
        let mut s = session();
        s.login(Tenant::OrganizationA, Role::Admin);
        s.navigate(View::Settings);
        assert!(matches!(s.screen().unwrap(), Screen::Settings(_)));
    }

    #[test]
    fn test_agent_status_edit_is_read_only() {
        let mut s = session();
        s.login(Tenant::OrganizationA, Role::Agent);
        let before = s.leads_view().unwrap().leads;

        assert_eq!(
            s.change_lead_status("1", LeadStatus::Converted).unwrap(),
            StatusEdit::ReadOnly
        );
        assert_eq!(s.leads_view().unwrap().leads, before);
    }

    #[test]
    fn test_admin_status_edit_applies() {
        let mut s = session();
        s.login(Tenant::OrganizationA, Role::Admin);

        assert_eq!(
            s.change_lead_status("1", LeadStatus::Converted).unwrap(),
            StatusEdit::Applied
        );

        s.set_filter(StatusFilter::Only(LeadStatus::Converted));
        let names: Vec<_> = s
            .leads_view()
            .unwrap()
            .leads
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names, vec!["John Smith", "Michael Brown"]);
    }

    #[test]
    fn test_admin_cannot_edit_other_tenant_lead() {
        let mut s = session();
        s.login(Tenant::OrganizationA, Role::Admin);

        assert_eq!(
            s.change_lead_status("7", LeadStatus::New).unwrap(),
            StatusEdit::UnknownLead
        );

        s.switch_tenant(Tenant::OrganizationB).unwrap();
        let lead = s
            .leads_view()
            .unwrap()
            .leads
            .into_iter()
            .find(|l| l.id == "7")
            .unwrap();
        assert_eq!(lead.status, LeadStatus::Converted);
    }

    #[test]
    fn test_edits_survive_navigation_and_logout() {
        let mut s = session();
        s.login(Tenant::OrganizationB, Role::Admin);
        s.change_lead_status("6", LeadStatus::Contacted).unwrap();
        s.logout();
        assert!(s.user().is_none());

        s.login(Tenant::OrganizationB, Role::Agent);
        let lead = s.leads_view().unwrap().leads.into_iter().next().unwrap();
        assert_eq!(lead.status, LeadStatus::Contacted);
    }

    #[test]
    fn test_toggle_setting() {
        let mut s = session();
        s.login(Tenant::OrganizationA, Role::Admin);

        assert!(!s.toggle_setting(Setting::EmailNotifications).unwrap());
        assert!(s.toggle_setting(Setting::AutoAssignLeads).unwrap());
        let quick = s.quick_settings().unwrap();
        assert!(!quick.email_notifications);
        assert!(quick.auto_assign_leads);
        assert!(quick.call_recording);

        s.switch_tenant(Tenant::OrganizationB).unwrap();
        assert_eq!(s.quick_settings().unwrap(), QuickSettings::default());
    }

    #[test]
    fn test_toggle_setting_requires_admin() {
        let mut s = session();
        s.login(Tenant::OrganizationA, Role::Agent);
        assert_eq!(
            s.toggle_setting(Setting::CallRecording).unwrap_err(),
            SessionError::AdminRequired
        );
    }

    #[test]
    fn test_setting_parse() {
        assert_eq!("email".parse::<Setting>().unwrap(), Setting::EmailNotifications);
        assert_eq!("Call Recording".parse::<Setting>().unwrap(), Setting::CallRecording);
        assert!("dark-mode".parse::<Setting>().is_err());
        assert_eq!(Setting::AutoAssignLeads.to_string(), "auto-assign-leads");
    }
}
