//! Built-in sample records: five leads and five calls for Organization A,
//! three of each for Organization B.

use crate::types::{CallLog, CallOutcome, Lead, LeadStatus, Tenant};

use super::Records;

const LEADS: &[(&str, &str, &str, LeadStatus, Tenant)] = &[
    ("1", "John Smith", "+1 (555) 123-4567", LeadStatus::New, Tenant::OrganizationA),
    ("2", "Sarah Johnson", "+1 (555) 234-5678", LeadStatus::Contacted, Tenant::OrganizationA),
    ("3", "Michael Brown", "+1 (555) 345-6789", LeadStatus::Converted, Tenant::OrganizationA),
    ("4", "Emily Davis", "+1 (555) 456-7890", LeadStatus::New, Tenant::OrganizationA),
    ("5", "David Wilson", "+1 (555) 567-8901", LeadStatus::Contacted, Tenant::OrganizationA),
    ("6", "Lisa Anderson", "+1 (555) 678-9012", LeadStatus::New, Tenant::OrganizationB),
    ("7", "Robert Taylor", "+1 (555) 789-0123", LeadStatus::Converted, Tenant::OrganizationB),
    ("8", "Jennifer Martinez", "+1 (555) 890-1234", LeadStatus::Contacted, Tenant::OrganizationB),
];

const CALL_LOGS: &[(&str, &str, &str, &str, CallOutcome, Tenant)] = &[
    ("1", "John Smith", "2026-01-16 10:30 AM", "5:23", CallOutcome::Successful, Tenant::OrganizationA),
    ("2", "Sarah Johnson", "2026-01-16 11:15 AM", "3:45", CallOutcome::FollowUpRequired, Tenant::OrganizationA),
    ("3", "Michael Brown", "2026-01-16 01:00 PM", "7:12", CallOutcome::Successful, Tenant::OrganizationA),
    ("4", "Emily Davis", "2026-01-16 02:30 PM", "0:00", CallOutcome::NoAnswer, Tenant::OrganizationA),
    ("5", "David Wilson", "2026-01-16 03:45 PM", "2:15", CallOutcome::Voicemail, Tenant::OrganizationA),
    ("6", "Lisa Anderson", "2026-01-16 09:00 AM", "6:30", CallOutcome::Successful, Tenant::OrganizationB),
    ("7", "Robert Taylor", "2026-01-16 10:45 AM", "4:20", CallOutcome::FollowUpRequired, Tenant::OrganizationB),
    ("8", "Jennifer Martinez", "2026-01-16 02:00 PM", "8:15", CallOutcome::Successful, Tenant::OrganizationB),
];

pub fn sample_leads() -> Vec<Lead> {
    LEADS
        .iter()
        .map(|&(id, name, phone, status, tenant)| Lead {
            id: id.to_string(),
            name: name.to_string(),
            phone_number: phone.to_string(),
            status,
            tenant,
        })
        .collect()
}

pub fn sample_call_logs() -> Vec<CallLog> {
    CALL_LOGS
        .iter()
        .map(|&(id, lead_name, date_time, duration, outcome, tenant)| CallLog {
            id: id.to_string(),
            lead_name: lead_name.to_string(),
            date_time: date_time.to_string(),
            duration: duration.to_string(),
            outcome,
            tenant,
        })
        .collect()
}

pub fn sample_records() -> Records {
    Records {
        leads: sample_leads(),
        call_logs: sample_call_logs(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_records_are_valid() {
        let records = sample_records();
        assert_eq!(records.leads.len(), 8);
        assert_eq!(records.call_logs.len(), 8);
        records.validate().unwrap();
    }
}
