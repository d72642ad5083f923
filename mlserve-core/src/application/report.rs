// mlserve-core/src/application/report.rs

use serde::{Deserialize, Serialize};

use crate::domain::access::AccessControlEntry;
use crate::domain::model::ModelReference;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EndpointOutcome {
    Created,
    Updated,
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PermissionOutcome {
    Applied { entries: Vec<AccessControlEntry> },
    Failed { reason: String },
}

/// Result of one deploy run. Only the resolution step can abort a run, so a
/// report always exists once the model version is known.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployReport {
    pub model: ModelReference,
    pub alias: String,
    pub endpoint_name: String,
    pub endpoint: EndpointOutcome,
    pub permissions: PermissionOutcome,
    pub finished_at: String,
}

impl DeployReport {
    pub fn is_clean(&self) -> bool {
        !matches!(self.endpoint, EndpointOutcome::Failed { .. })
            && !matches!(self.permissions, PermissionOutcome::Failed { .. })
    }

    /// Non-fatal failures, in the order they happened.
    pub fn failures(&self) -> Vec<String> {
        let mut failures = Vec::new();
        if let EndpointOutcome::Failed { reason } = &self.endpoint {
            failures.push(reason.clone());
        }
        if let PermissionOutcome::Failed { reason } = &self.permissions {
            failures.push(reason.clone());
        }
        failures
    }
}
