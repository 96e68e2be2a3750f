use thiserror::Error;

/// Rejected user input for one of the closed enumerations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown tenant: {0} (expected: org-a, org-b)")]
    Tenant(String),

    #[error("unknown role: {0} (expected: admin, agent)")]
    Role(String),

    #[error("unknown lead status: {0} (expected: new, contacted, converted)")]
    LeadStatus(String),

    #[error("unknown status filter: {0} (expected: all, new, contacted, converted)")]
    StatusFilter(String),

    #[error("unknown call outcome: {0}")]
    CallOutcome(String),
}
