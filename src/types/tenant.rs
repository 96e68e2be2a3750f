use serde::{Deserialize, Serialize};

use super::{normalize, ParseError};

/// An organization whose records are isolated from every other organization.
///
/// Every lead and call log carries exactly one tenant tag. A user only ever
/// observes records whose tag equals the user's current tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tenant {
    #[default]
    #[serde(rename = "Organization A")]
    OrganizationA,
    #[serde(rename = "Organization B")]
    OrganizationB,
}

impl Tenant {
    pub const ALL: [Tenant; 2] = [Tenant::OrganizationA, Tenant::OrganizationB];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tenant::OrganizationA => "Organization A",
            Tenant::OrganizationB => "Organization B",
        }
    }
}

impl std::fmt::Display for Tenant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Tenant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "organization-a" | "org-a" | "a" => Ok(Tenant::OrganizationA),
            "organization-b" | "org-b" | "b" => Ok(Tenant::OrganizationB),
            _ => Err(ParseError::Tenant(s.to_string())),
        }
    }
}

/// What the acting user may do.
///
/// Both roles can read every lead and call log of their tenant. Only
/// `Admin` can change a lead's status or open the settings view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Admin,
    Agent,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Agent => "Agent",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "admin" => Ok(Role::Admin),
            "agent" => Ok(Role::Agent),
            _ => Err(ParseError::Role(s.to_string())),
        }
    }
}

/// The acting principal.
///
/// Created at login and replaced wholesale on logout or tenant switch; a
/// `User` is never patched field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub role: Role,
    pub tenant: Tenant,
}

impl User {
    pub fn new(name: impl Into<String>, role: Role, tenant: Tenant) -> Self {
        Self {
            name: name.into(),
            role,
            tenant,
        }
    }

    /// The same principal re-scoped to another tenant.
    pub fn with_tenant(&self, tenant: Tenant) -> Self {
        Self {
            name: self.name.clone(),
            role: self.role,
            tenant,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
