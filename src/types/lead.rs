use serde::{Deserialize, Serialize};

use super::{normalize, ParseError, Tenant, Tone};

/// Pipeline status of a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadStatus {
    New,
    Contacted,
    Converted,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 3] = [LeadStatus::New, LeadStatus::Contacted, LeadStatus::Converted];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Converted => "Converted",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            LeadStatus::New => Tone::Info,
            LeadStatus::Contacted => Tone::Warning,
            LeadStatus::Converted => Tone::Success,
        }
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LeadStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "new" => Ok(LeadStatus::New),
            "contacted" => Ok(LeadStatus::Contacted),
            "converted" => Ok(LeadStatus::Converted),
            _ => Err(ParseError::LeadStatus(s.to_string())),
        }
    }
}

/// Secondary filter over a tenant's leads. Serializes as its label, `"All"`
/// or the status name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Show every lead of the tenant.
    #[default]
    All,
    Only(LeadStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: LeadStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFilter::All => f.write_str("All"),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

impl Serialize for StatusFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if normalize(s) == "all" {
            return Ok(StatusFilter::All);
        }
        s.parse::<LeadStatus>()
            .map(StatusFilter::Only)
            .map_err(|_| ParseError::StatusFilter(s.to_string()))
    }
}

/// A prospective customer record, owned by exactly one tenant.
///
/// `status` is the only field that ever changes, and only through an
/// admin-initiated edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub phone_number: String,
    pub status: LeadStatus,
    pub tenant: Tenant,
}
