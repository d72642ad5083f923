// mlserve-core/src/application/mocks.rs
//
// In-memory port implementations shared by the application tests.

#![allow(clippy::unwrap_used)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::access::{AccessControlList, Identity};
use crate::domain::model::{ModelName, ModelReference, RunArtifactUri, VersionHandle};
use crate::domain::serving::{EndpointDescriptor, EndpointState, ServingEndpoint};
use crate::error::MlserveError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::{IdentityProvider, ModelRegistry, ServingPlatform};

fn api_error(status: u16, code: &str, message: &str) -> MlserveError {
    MlserveError::Infrastructure(InfrastructureError::Api {
        status,
        code: Some(code.to_string()),
        message: message.to_string(),
    })
}

// --- REGISTRY ---

#[derive(Default, Clone)]
pub struct MockRegistry {
    pub aliases: Arc<Mutex<HashMap<(String, String), u64>>>,
    pub versions: Arc<Mutex<HashMap<String, u64>>>,
    pub registered: Arc<Mutex<Vec<(String, String)>>>,
    pub fail_register: bool,
    pub fail_alias: bool,
}

impl MockRegistry {
    pub fn with_alias(self, full_name: &str, alias: &str, version: u64) -> Self {
        self.aliases
            .lock()
            .unwrap()
            .insert((full_name.to_string(), alias.to_string()), version);
        self
    }

    pub fn alias_of(&self, full_name: &str, alias: &str) -> Option<u64> {
        self.aliases
            .lock()
            .unwrap()
            .get(&(full_name.to_string(), alias.to_string()))
            .copied()
    }
}

#[async_trait]
impl ModelRegistry for MockRegistry {
    async fn get_by_alias(
        &self,
        model: &ModelName,
        alias: &str,
    ) -> Result<ModelReference, MlserveError> {
        self.alias_of(&model.full_name(), alias)
            .map(|v| model.at_version(v))
            .ok_or_else(|| api_error(404, "RESOURCE_DOES_NOT_EXIST", "alias not found"))
    }

    async fn register_model(
        &self,
        source: &RunArtifactUri,
        model: &ModelName,
    ) -> Result<VersionHandle, MlserveError> {
        if self.fail_register {
            return Err(api_error(400, "INVALID_PARAMETER_VALUE", "run not found"));
        }
        let full_name = model.full_name();
        self.registered
            .lock()
            .unwrap()
            .push((source.to_string(), full_name.clone()));
        let mut versions = self.versions.lock().unwrap();
        let version = versions.entry(full_name.clone()).or_insert(0);
        *version += 1;
        Ok(VersionHandle {
            full_name,
            version: *version,
        })
    }

    async fn set_alias(
        &self,
        model: &ModelName,
        alias: &str,
        version: u64,
    ) -> Result<(), MlserveError> {
        if self.fail_alias {
            return Err(api_error(403, "PERMISSION_DENIED", "cannot set alias"));
        }
        self.aliases
            .lock()
            .unwrap()
            .insert((model.full_name(), alias.to_string()), version);
        Ok(())
    }
}

// --- SERVING ---

#[derive(Debug, Clone, PartialEq)]
pub enum ServingCall {
    Exists(String),
    Create(EndpointDescriptor),
    Update(String, EndpointDescriptor),
    Get(String),
    SetPermissions(String, AccessControlList),
}

#[derive(Default, Clone)]
pub struct MockServing {
    pub endpoints: Arc<Mutex<HashMap<String, ServingEndpoint>>>,
    pub calls: Arc<Mutex<Vec<ServingCall>>>,
    pub fail_exists: bool,
    pub fail_create: bool,
    pub fail_update: bool,
    pub fail_permissions: bool,
}

impl MockServing {
    pub fn with_endpoint(self, name: &str, model: Option<ModelReference>) -> Self {
        self.endpoints.lock().unwrap().insert(
            name.to_string(),
            ServingEndpoint {
                id: format!("id-{}", name),
                name: name.to_string(),
                model,
                state: EndpointState::Ready,
            },
        );
        self
    }

    pub fn calls(&self) -> Vec<ServingCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ServingCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ServingPlatform for MockServing {
    async fn exists(&self, name: &str) -> Result<bool, MlserveError> {
        self.record(ServingCall::Exists(name.to_string()));
        if self.fail_exists {
            return Err(api_error(503, "TEMPORARILY_UNAVAILABLE", "try later"));
        }
        Ok(self.endpoints.lock().unwrap().contains_key(name))
    }

    async fn create_endpoint(&self, descriptor: &EndpointDescriptor) -> Result<(), MlserveError> {
        self.record(ServingCall::Create(descriptor.clone()));
        if self.fail_create {
            return Err(api_error(400, "QUOTA_EXCEEDED", "too many endpoints"));
        }
        let mut endpoints = self.endpoints.lock().unwrap();
        if endpoints.contains_key(&descriptor.name) {
            return Err(api_error(409, "RESOURCE_ALREADY_EXISTS", "endpoint exists"));
        }
        endpoints.insert(
            descriptor.name.clone(),
            ServingEndpoint {
                id: format!("id-{}", descriptor.name),
                name: descriptor.name.clone(),
                model: Some(descriptor.model.clone()),
                state: EndpointState::NotReady,
            },
        );
        Ok(())
    }

    async fn update_endpoint_config(
        &self,
        name: &str,
        descriptor: &EndpointDescriptor,
    ) -> Result<(), MlserveError> {
        self.record(ServingCall::Update(name.to_string(), descriptor.clone()));
        if self.fail_update {
            return Err(api_error(400, "INVALID_PARAMETER_VALUE", "bad config"));
        }
        match self.endpoints.lock().unwrap().get_mut(name) {
            Some(endpoint) => {
                endpoint.model = Some(descriptor.model.clone());
                endpoint.state = EndpointState::UpdatePending;
                Ok(())
            }
            None => Err(api_error(404, "RESOURCE_DOES_NOT_EXIST", "no endpoint")),
        }
    }

    async fn get_endpoint(&self, name: &str) -> Result<ServingEndpoint, MlserveError> {
        self.record(ServingCall::Get(name.to_string()));
        self.endpoints
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| api_error(404, "RESOURCE_DOES_NOT_EXIST", "no endpoint"))
    }

    async fn set_permissions(
        &self,
        endpoint_id: &str,
        acl: &AccessControlList,
    ) -> Result<(), MlserveError> {
        self.record(ServingCall::SetPermissions(
            endpoint_id.to_string(),
            acl.clone(),
        ));
        if self.fail_permissions {
            return Err(api_error(403, "PERMISSION_DENIED", "not an owner"));
        }
        Ok(())
    }
}

// --- IDENTITY ---

pub struct MockIdentity(pub String);

#[async_trait]
impl IdentityProvider for MockIdentity {
    async fn current_identity(&self) -> Result<Identity, MlserveError> {
        Ok(Identity::classify(self.0.clone()))
    }
}
