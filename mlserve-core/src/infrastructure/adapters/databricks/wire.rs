// mlserve-core/src/infrastructure/adapters/databricks/wire.rs
//
// Request/response bodies of the Databricks REST APIs we call.

use serde::{Deserialize, Serialize};

use crate::domain::access::{AccessControlEntry, AccessControlList};
use crate::domain::model::{ModelName, ModelReference};
use crate::domain::serving::{EndpointDescriptor, EndpointState, WorkloadSize, WorkloadType};

// --- SERVING ENDPOINTS ---

#[derive(Debug, Serialize)]
pub struct ServedEntityInput {
    pub entity_name: String,
    pub entity_version: String,
    pub workload_size: WorkloadSize,
    pub workload_type: WorkloadType,
    pub scale_to_zero_enabled: bool,
}

impl From<&EndpointDescriptor> for ServedEntityInput {
    fn from(descriptor: &EndpointDescriptor) -> Self {
        Self {
            entity_name: descriptor.model.full_name(),
            entity_version: descriptor.model.version.to_string(),
            workload_size: descriptor.workload.size,
            workload_type: descriptor.workload.workload_type,
            scale_to_zero_enabled: descriptor.workload.scale_to_zero,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EndpointCoreConfigInput {
    pub name: String,
    pub served_entities: Vec<ServedEntityInput>,
}

#[derive(Debug, Serialize)]
pub struct CreateServingEndpoint {
    pub name: String,
    pub config: EndpointCoreConfigInput,
}

impl From<&EndpointDescriptor> for CreateServingEndpoint {
    fn from(descriptor: &EndpointDescriptor) -> Self {
        Self {
            name: descriptor.name.clone(),
            config: EndpointCoreConfigInput {
                name: descriptor.name.clone(),
                served_entities: vec![ServedEntityInput::from(descriptor)],
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateEndpointConfig {
    pub served_entities: Vec<ServedEntityInput>,
}

#[derive(Debug, Deserialize)]
pub struct ServingEndpointDetailed {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub state: Option<EndpointStateWire>,
    #[serde(default)]
    pub config: Option<EndpointConfigOutput>,
    #[serde(default)]
    pub pending_config: Option<EndpointConfigOutput>,
}

#[derive(Debug, Deserialize)]
pub struct EndpointStateWire {
    #[serde(default)]
    pub ready: Option<String>,
    #[serde(default)]
    pub config_update: Option<String>,
}

impl EndpointStateWire {
    pub fn to_domain(&self) -> EndpointState {
        if self.config_update.as_deref() == Some("IN_PROGRESS") {
            return EndpointState::UpdatePending;
        }
        match self.ready.as_deref() {
            Some("READY") => EndpointState::Ready,
            Some("NOT_READY") => EndpointState::NotReady,
            _ => EndpointState::Unknown,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EndpointConfigOutput {
    #[serde(default)]
    pub served_entities: Vec<ServedEntityOutput>,
}

#[derive(Debug, Deserialize)]
pub struct ServedEntityOutput {
    #[serde(default)]
    pub entity_name: Option<String>,
    #[serde(default)]
    pub entity_version: Option<String>,
}

impl ServedEntityOutput {
    /// Only Unity Catalog entities (three-part name, numeric version) map to a reference.
    pub fn to_reference(&self) -> Option<ModelReference> {
        let name = ModelName::parse(self.entity_name.as_deref()?).ok()?;
        let version = self.entity_version.as_deref()?.parse().ok()?;
        Some(name.at_version(version))
    }
}

// --- PERMISSIONS ---

#[derive(Debug, Serialize)]
pub struct SetPermissions<'a> {
    pub access_control_list: &'a [AccessControlEntry],
}

impl<'a> From<&'a AccessControlList> for SetPermissions<'a> {
    fn from(acl: &'a AccessControlList) -> Self {
        Self {
            access_control_list: acl.entries(),
        }
    }
}

// --- UNITY CATALOG MODEL REGISTRY ---

#[derive(Debug, Deserialize)]
pub struct ModelVersionInfo {
    #[serde(default)]
    pub catalog_name: Option<String>,
    #[serde(default)]
    pub schema_name: Option<String>,
    #[serde(default)]
    pub model_name: Option<String>,
    pub version: u64,
}

#[derive(Debug, Serialize)]
pub struct CreateRegisteredModel<'a> {
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CreateModelVersion<'a> {
    pub name: &'a str,
    pub source: &'a str,
    pub run_id: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct CreateModelVersionResponse {
    pub model_version: CreatedModelVersion,
}

#[derive(Debug, Deserialize)]
pub struct CreatedModelVersion {
    pub name: String,
    // MLflow returns the version as a string.
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct SetRegisteredModelAlias {
    pub version_num: u64,
}

// --- IDENTITY (SCIM) ---

#[derive(Debug, Deserialize)]
pub struct ScimMe {
    #[serde(rename = "userName")]
    pub user_name: String,
}
