// mlserve-core/src/ports/serving.rs

use crate::domain::access::AccessControlList;
use crate::domain::serving::{EndpointDescriptor, ServingEndpoint};
use crate::error::MlserveError;
use async_trait::async_trait;

#[async_trait]
pub trait ServingPlatform: Send + Sync {
    /// `Ok(false)` only when the platform says the endpoint does not exist.
    /// Any other failure is an error: it must not be read as "absent".
    async fn exists(&self, name: &str) -> Result<bool, MlserveError>;

    async fn create_endpoint(&self, descriptor: &EndpointDescriptor) -> Result<(), MlserveError>;

    async fn update_endpoint_config(
        &self,
        name: &str,
        descriptor: &EndpointDescriptor,
    ) -> Result<(), MlserveError>;

    async fn get_endpoint(&self, name: &str) -> Result<ServingEndpoint, MlserveError>;

    /// Replaces the whole ACL of the endpoint. Entries not submitted are dropped.
    async fn set_permissions(
        &self,
        endpoint_id: &str,
        acl: &AccessControlList,
    ) -> Result<(), MlserveError>;
}
