//! Terminal rendering of view models.

use std::fmt::Write;

use crate::access::ADMIN_REQUIRED;
use crate::types::{format_duration, StatusFilter, Tone, User};
use crate::views::{CallLogsView, LeadsView, OverviewView, Screen, SettingsView};

fn badge(label: &str, tone: Tone) -> String {
    format!("[{} {}]", tone.marker(), label)
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    format!("{} {}", n, if n == 1 { one } else { many })
}

pub fn header(user: &User) -> String {
    format!("{} [{}] - {}", user.tenant, user.role, user.name)
}

pub fn overview(view: &OverviewView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Dashboard - {}", view.tenant);
    let _ = writeln!(out);
    let _ = writeln!(out, "Total Leads:        {}", view.stats.total_leads);
    let _ = writeln!(out, "Total Calls:        {}", view.stats.total_calls);
    let _ = writeln!(out, "Conversion Rate:    {}%", view.stats.conversion_rate);
    let _ = writeln!(
        out,
        "Avg Call Duration:  {}",
        format_duration(view.stats.avg_call_duration_secs)
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Quick Actions:");
    for action in &view.quick_actions {
        if action.enabled {
            let _ = writeln!(out, "  {}", action.label);
        } else {
            let _ = writeln!(out, "  {} (disabled: {})", action.label, ADMIN_REQUIRED);
        }
    }
    out
}

pub fn leads(view: &LeadsView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Leads - {}", view.tenant);
    let _ = writeln!(
        out,
        "Status filter: {}    {}",
        view.filter,
        plural(view.leads.len(), "lead", "leads")
    );
    let _ = writeln!(out);

    if view.leads.is_empty() {
        let _ = writeln!(out, "No leads found");
        match view.filter {
            StatusFilter::All => {
                let _ = writeln!(out, "No leads available for this organization.");
            }
            StatusFilter::Only(status) => {
                let _ = writeln!(out, "No leads with status \"{}\" found.", status);
            }
        }
        return out;
    }

    let _ = write!(out, "{:<4} {:<20} {:<20} {:<15}", "ID", "Lead Name", "Phone Number", "Status");
    if view.editable {
        let _ = write!(out, " Actions");
    }
    let _ = writeln!(out);

    for lead in &view.leads {
        let _ = write!(
            out,
            "{:<4} {:<20} {:<20} {:<15}",
            lead.id,
            lead.name,
            lead.phone_number,
            badge(lead.status.as_str(), lead.status.tone())
        );
        if view.editable {
            let _ = write!(out, " set {} <new|contacted|converted>", lead.id);
        }
        let _ = writeln!(out);
    }

    if !view.editable {
        let _ = writeln!(out);
        let _ = writeln!(out, "View-Only Access");
        let _ = writeln!(
            out,
            "You have read-only access to leads. Contact your administrator to edit lead statuses."
        );
    }
    out
}

pub fn call_logs(view: &CallLogsView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Call Logs - {}", view.tenant);
    let _ = writeln!(out);
    let _ = writeln!(out, "Total Calls:            {}", view.stats.total);
    let _ = writeln!(out, "Successful:             {}", view.stats.successful);
    let _ = writeln!(out, "Follow-up Required:     {}", view.stats.follow_up);
    let _ = writeln!(out, "No Answer / Voicemail:  {}", view.stats.no_answer);
    let _ = writeln!(out);

    if view.call_logs.is_empty() {
        let _ = writeln!(out, "No call logs found");
        let _ = writeln!(out, "No call history available for this organization.");
        return out;
    }

    let _ = writeln!(
        out,
        "{:<20} {:<22} {:<8} Outcome",
        "Lead Name", "Date & Time", "Duration"
    );
    for log in &view.call_logs {
        let _ = writeln!(
            out,
            "{:<20} {:<22} {:<8} {}",
            log.lead_name,
            log.date_time,
            log.duration,
            badge(log.outcome.as_str(), log.outcome.tone())
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Call logs are read-only for all users. This data is automatically generated from call activities."
    );
    out
}

pub fn settings(view: &SettingsView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Settings (Admin Only) - {}", view.tenant);
    let _ = writeln!(out);
    for section in view.sections {
        let _ = writeln!(out, "  {:<24} {}", section.title, section.description);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Quick Settings:");
    let _ = writeln!(out, "  email-notifications  {}", on_off(view.quick.email_notifications));
    let _ = writeln!(out, "  auto-assign-leads    {}", on_off(view.quick.auto_assign_leads));
    let _ = writeln!(out, "  call-recording       {}", on_off(view.quick.call_recording));
    out
}

pub fn screen(screen: &Screen) -> String {
    match screen {
        Screen::Overview(view) => overview(view),
        Screen::Leads(view) => leads(view),
        Screen::CallLogs(view) => call_logs(view),
        Screen::Settings(view) => settings(view),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{sample_call_logs, sample_leads};
    use crate::types::{LeadStatus, Role, Tenant};

    fn admin() -> User {
        User::new("Demo User", Role::Admin, Tenant::OrganizationA)
    }

    fn agent() -> User {
        User::new("Demo User", Role::Agent, Tenant::OrganizationA)
    }

    #[test]
    fn test_leads_admin_shows_actions() {
        let view = LeadsView::build(&admin(), &sample_leads(), StatusFilter::All);
        let out = leads(&view);

        assert!(out.contains("5 leads"));
        assert!(out.contains("Actions"));
        assert!(out.contains("[+ Converted]"));
        assert!(!out.contains("View-Only Access"));
        assert!(!out.contains("Lisa Anderson"));
    }

    #[test]
    fn test_leads_agent_shows_view_only_notice() {
        let view = LeadsView::build(&agent(), &sample_leads(), StatusFilter::All);
        let out = leads(&view);

        assert!(!out.contains("Actions"));
        assert!(out.contains("View-Only Access"));
    }

    #[test]
    fn test_leads_single_count() {
        let view = LeadsView::build(
            &admin(),
            &sample_leads(),
            StatusFilter::Only(LeadStatus::Converted),
        );
        assert!(leads(&view).contains("1 lead\n"));
    }

    #[test]
    fn test_leads_empty_states() {
        let view = LeadsView::build(&agent(), &[], StatusFilter::All);
        let out = leads(&view);
        assert!(out.contains("No leads available for this organization."));
        assert!(!out.contains("View-Only Access"));

        let view = LeadsView::build(&agent(), &[], StatusFilter::Only(LeadStatus::Contacted));
        assert!(leads(&view).contains("No leads with status \"Contacted\" found."));
    }

    #[test]
    fn test_call_logs_rendering() {
        let view = CallLogsView::build(&agent(), &sample_call_logs());
        let out = call_logs(&view);
        assert!(out.contains("Total Calls:            5"));
        assert!(out.contains("[! Follow-up Required]"));
        assert!(out.contains("read-only for all users"));

        let empty = CallLogsView::build(&agent(), &[]);
        assert!(call_logs(&empty).contains("No call history available for this organization."));
    }

    #[test]
    fn test_overview_marks_settings_disabled_for_agent() {
        let view = OverviewView::build(&agent(), &sample_leads(), &sample_call_logs());
        let out = overview(&view);
        assert!(out.contains("Settings (disabled: Admin access required)"));
        assert!(out.contains("Conversion Rate:    20%"));
        assert!(out.contains("Avg Call Duration:  3:43"));
    }
}
