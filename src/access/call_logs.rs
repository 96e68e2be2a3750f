use serde::Serialize;

use crate::types::{CallLog, CallOutcome, Tenant};

/// Outcome counts over a tenant-scoped list of calls.
///
/// The three buckets are disjoint and always add up to `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CallLogStats {
    pub total: usize,
    pub successful: usize,
    pub follow_up: usize,
    /// No answer or voicemail.
    pub no_answer: usize,
}

/// Call logs owned by `tenant`, in source order.
pub fn scoped_call_logs(all: &[CallLog], tenant: Tenant) -> Vec<CallLog> {
    all.iter().filter(|log| log.tenant == tenant).cloned().collect()
}

pub fn call_log_stats(scoped: &[CallLog]) -> CallLogStats {
    scoped.iter().fold(
        CallLogStats {
            total: scoped.len(),
            ..CallLogStats::default()
        },
        |mut stats, log| {
            match log.outcome {
                CallOutcome::Successful => stats.successful += 1,
                CallOutcome::FollowUpRequired => stats.follow_up += 1,
                CallOutcome::NoAnswer | CallOutcome::Voicemail => stats.no_answer += 1,
            }
            stats
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_call_logs;

    #[test]
    fn test_stats_for_org_a() {
        let logs = sample_call_logs();
        let stats = call_log_stats(&scoped_call_logs(&logs, Tenant::OrganizationA));

        assert_eq!(
            stats,
            CallLogStats {
                total: 5,
                successful: 2,
                follow_up: 1,
                no_answer: 2,
            }
        );
    }

    #[test]
    fn test_stats_for_org_b() {
        let logs = sample_call_logs();
        let stats = call_log_stats(&scoped_call_logs(&logs, Tenant::OrganizationB));

        assert_eq!(stats.total, 3);
        assert_eq!(stats.successful, 2);
        assert_eq!(stats.follow_up, 1);
        assert_eq!(stats.no_answer, 0);
    }

    #[test]
    fn test_buckets_sum_to_total() {
        let logs = sample_call_logs();
        for stats in [
            call_log_stats(&logs),
            call_log_stats(&logs[..3]),
            call_log_stats(&[]),
        ] {
            assert_eq!(stats.successful + stats.follow_up + stats.no_answer, stats.total);
        }
    }

    #[test]
    fn test_scoped_call_logs_preserves_order() {
        let logs = sample_call_logs();
        let ids: Vec<_> = scoped_call_logs(&logs, Tenant::OrganizationB)
            .into_iter()
            .map(|log| log.id)
            .collect();
        assert_eq!(ids, vec!["6", "7", "8"]);
    }

    #[test]
    fn test_empty_stats() {
        assert_eq!(call_log_stats(&[]), CallLogStats::default());
    }
}
