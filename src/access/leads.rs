use crate::types::{Lead, LeadStatus, Role, StatusFilter, Tenant};

/// Leads owned by `tenant` that pass `filter`, in source order.
pub fn scoped_leads(all: &[Lead], tenant: Tenant, filter: StatusFilter) -> Vec<Lead> {
    all.iter()
        .filter(|lead| lead.tenant == tenant)
        .filter(|lead| filter.matches(lead.status))
        .cloned()
        .collect()
}

/// Replace the status of lead `lead_id`.
///
/// Only an `Admin` may edit. Any other role, or an id that matches nothing,
/// gets the collection back unchanged.
pub fn set_lead_status(
    mut leads: Vec<Lead>,
    lead_id: &str,
    new_status: LeadStatus,
    acting_role: Role,
) -> Vec<Lead> {
    if !acting_role.is_admin() {
        return leads;
    }

    if let Some(lead) = leads.iter_mut().find(|lead| lead.id == lead_id) {
        lead.status = new_status;
    }
    leads
}
