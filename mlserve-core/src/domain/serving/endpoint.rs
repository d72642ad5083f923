// mlserve-core/src/domain/serving/endpoint.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::model::ModelReference;
use crate::domain::serving::workload::WorkloadShape;

pub const ENDPOINT_SUFFIX: &str = "_endpoint";

/// One endpoint per model: `<model_name>_endpoint`.
pub fn endpoint_name_for(model_name: &str) -> String {
    format!("{}{}", model_name, ENDPOINT_SUFFIX)
}

/// Desired state of a serving endpoint, as submitted on create or update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    pub name: String,
    pub model: ModelReference,
    pub workload: WorkloadShape,
}

impl EndpointDescriptor {
    pub fn for_model(model: &ModelReference, workload: WorkloadShape) -> Self {
        Self {
            name: endpoint_name_for(&model.name),
            model: model.clone(),
            workload,
        }
    }
}

/// Readiness as reported by the platform. Display only: nothing polls it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EndpointState {
    Ready,
    NotReady,
    UpdatePending,
    #[default]
    Unknown,
}

impl fmt::Display for EndpointState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Ready => "ready",
            Self::NotReady => "not ready",
            Self::UpdatePending => "update pending",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Endpoint descriptor as observed on the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServingEndpoint {
    pub id: String,
    pub name: String,
    /// First served entity of the active config, or of the pending one.
    pub model: Option<ModelReference>,
    pub state: EndpointState,
}
