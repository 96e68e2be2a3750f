use serde::Serialize;

use crate::types::{CallLog, Lead, LeadStatus};

/// Headline figures for the overview, computed from tenant-scoped records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OverviewStats {
    pub total_leads: usize,
    pub total_calls: usize,
    /// Percent of leads that converted, rounded. Zero without leads.
    pub conversion_rate: u32,
    /// Mean call length in whole seconds. Zero without calls.
    pub avg_call_duration_secs: u32,
}

pub fn overview_stats(leads: &[Lead], call_logs: &[CallLog]) -> OverviewStats {
    let converted = leads
        .iter()
        .filter(|lead| lead.status == LeadStatus::Converted)
        .count();
    let conversion_rate = if leads.is_empty() {
        0
    } else {
        ((converted as f64 / leads.len() as f64) * 100.0).round() as u32
    };

    let total_secs: u64 = call_logs
        .iter()
        .filter_map(|log| log.duration_secs())
        .map(u64::from)
        .sum();
    let avg_call_duration_secs = if call_logs.is_empty() {
        0
    } else {
        (total_secs / call_logs.len() as u64) as u32
    };

    OverviewStats {
        total_leads: leads.len(),
        total_calls: call_logs.len(),
        conversion_rate,
        avg_call_duration_secs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{scoped_call_logs, scoped_leads};
    use crate::data::{sample_call_logs, sample_leads};
    use crate::types::{StatusFilter, Tenant};

    fn stats_for(tenant: Tenant) -> OverviewStats {
        let leads = scoped_leads(&sample_leads(), tenant, StatusFilter::All);
        let calls = scoped_call_logs(&sample_call_logs(), tenant);
        overview_stats(&leads, &calls)
    }

    #[test]
    fn test_overview_org_a() {
        assert_eq!(
            stats_for(Tenant::OrganizationA),
            OverviewStats {
                total_leads: 5,
                total_calls: 5,
                conversion_rate: 20,
                avg_call_duration_secs: 223,
            }
        );
    }

    #[test]
    fn test_overview_org_b() {
        assert_eq!(
            stats_for(Tenant::OrganizationB),
            OverviewStats {
                total_leads: 3,
                total_calls: 3,
                conversion_rate: 33,
                avg_call_duration_secs: 381,
            }
        );
    }

    #[test]
    fn test_overview_empty() {
        assert_eq!(overview_stats(&[], &[]), OverviewStats::default());
    }
}
