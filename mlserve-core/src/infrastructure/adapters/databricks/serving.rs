// mlserve-core/src/infrastructure/adapters/databricks/serving.rs

use async_trait::async_trait;
use reqwest::Method;
use serde::de::IgnoredAny;

use super::client::DatabricksClient;
use super::wire::{
    CreateServingEndpoint, ServedEntityInput, ServingEndpointDetailed, SetPermissions,
    UpdateEndpointConfig,
};
use crate::domain::access::AccessControlList;
use crate::domain::serving::{EndpointDescriptor, EndpointState, ServingEndpoint};
use crate::error::MlserveError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::ServingPlatform;

const ENDPOINTS: &[&str] = &["api", "2.0", "serving-endpoints"];
const ENDPOINT_PERMISSIONS: &[&str] = &["api", "2.0", "permissions", "serving-endpoints"];

impl DatabricksClient {
    async fn fetch_endpoint(
        &self,
        name: &str,
    ) -> Result<ServingEndpointDetailed, InfrastructureError> {
        self.get(self.url(ENDPOINTS, &[name])?).await
    }
}

#[async_trait]
impl ServingPlatform for DatabricksClient {
    async fn exists(&self, name: &str) -> Result<bool, MlserveError> {
        match self.fetch_endpoint(name).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn create_endpoint(&self, descriptor: &EndpointDescriptor) -> Result<(), MlserveError> {
        let body = CreateServingEndpoint::from(descriptor);
        let _: IgnoredAny = self
            .send_json(Method::POST, self.url(ENDPOINTS, &[])?, &body)
            .await?;
        Ok(())
    }

    async fn update_endpoint_config(
        &self,
        name: &str,
        descriptor: &EndpointDescriptor,
    ) -> Result<(), MlserveError> {
        let body = UpdateEndpointConfig {
            served_entities: vec![ServedEntityInput::from(descriptor)],
        };
        let url = self.url(ENDPOINTS, &[name, "config"])?;
        let _: IgnoredAny = self.send_json(Method::PUT, url, &body).await?;
        Ok(())
    }

    async fn get_endpoint(&self, name: &str) -> Result<ServingEndpoint, MlserveError> {
        let detailed = self.fetch_endpoint(name).await?;

        let id = detailed.id.clone().ok_or_else(|| {
            InfrastructureError::Decode(format!("serving endpoint '{}' has no id", name))
        })?;
        let model = [&detailed.config, &detailed.pending_config]
            .into_iter()
            .flatten()
            .flat_map(|c| c.served_entities.iter())
            .find_map(|e| e.to_reference());
        let state = detailed
            .state
            .as_ref()
            .map(|s| s.to_domain())
            .unwrap_or(EndpointState::Unknown);

        Ok(ServingEndpoint {
            id,
            name: detailed.name,
            model,
            state,
        })
    }

    async fn set_permissions(
        &self,
        endpoint_id: &str,
        acl: &AccessControlList,
    ) -> Result<(), MlserveError> {
        let url = self.url(ENDPOINT_PERMISSIONS, &[endpoint_id])?;
        // PUT replaces the whole list; PATCH would merge.
        let _: IgnoredAny = self
            .send_json(Method::PUT, url, &SetPermissions::from(acl))
            .await?;
        Ok(())
    }
}
