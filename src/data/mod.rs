//! Records provider.
//!
//! Supplies the full lead and call-log collections, either from the built-in
//! sample set or from a records file:
//! ```text
//! [[leads]]
//! id = "1"
//! name = "John Smith"
//! phone_number = "+1 (555) 123-4567"
//! status = "New"
//! tenant = "Organization A"
//!
//! [[call_logs]]
//! id = "1"
//! lead_name = "John Smith"
//! date_time = "2026-01-16 10:30 AM"
//! duration = "5:23"
//! outcome = "Successful"
//! tenant = "Organization A"
//! ```
//! Files are validated on load so the access layer can assume well-formed
//! records with unique ids.

mod error;
mod sample;

pub use error::DataError;
pub use sample::{sample_call_logs, sample_leads, sample_records};

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{CallLog, Lead};

/// Every record known to the dashboard, across all tenants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Records {
    #[serde(default)]
    pub leads: Vec<Lead>,
    #[serde(default)]
    pub call_logs: Vec<CallLog>,
}

impl Records {
    /// Check id uniqueness and that call timestamps and durations parse.
    pub fn validate(&self) -> Result<(), DataError> {
        let mut seen = HashSet::new();
        for lead in &self.leads {
            if !seen.insert(lead.id.as_str()) {
                return Err(DataError::DuplicateLeadId(lead.id.clone()));
            }
        }

        let mut seen = HashSet::new();
        for log in &self.call_logs {
            if !seen.insert(log.id.as_str()) {
                return Err(DataError::DuplicateCallLogId(log.id.clone()));
            }
            if log.started_at().is_err() {
                return Err(DataError::InvalidDateTime {
                    id: log.id.clone(),
                    value: log.date_time.clone(),
                });
            }
            if log.duration_secs().is_none() {
                return Err(DataError::InvalidDuration {
                    id: log.id.clone(),
                    value: log.duration.clone(),
                });
            }
        }

        Ok(())
    }

    /// Parse records from file contents, choosing the format by extension.
    pub fn parse(path: &Path, content: &str) -> Result<Self, DataError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        let records: Records = match ext.as_str() {
            "toml" => toml::from_str(content)?,
            "json" => serde_json::from_str(content)?,
            _ => return Err(DataError::UnsupportedFormat(path.display().to_string())),
        };

        records.validate()?;
        Ok(records)
    }
}

/// Load records from `path`, or the built-in sample set when `path` is `None`.
pub async fn load_records(path: Option<&Path>) -> Result<Records, DataError> {
    let Some(path) = path else {
        debug!("using built-in sample records");
        return Ok(sample_records());
    };

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| DataError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let records = Records::parse(path, &content)?;
    debug!(
        path = %path.display(),
        leads = records.leads.len(),
        call_logs = records.call_logs.len(),
        "loaded records file"
    );
    Ok(records)
}
