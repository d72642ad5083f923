// mlserve-core/src/infrastructure/adapters/databricks/identity.rs

use async_trait::async_trait;

use super::client::DatabricksClient;
use super::wire::ScimMe;
use crate::domain::access::Identity;
use crate::error::MlserveError;
use crate::ports::IdentityProvider;

const SCIM_ME: &[&str] = &["api", "2.0", "preview", "scim", "v2", "Me"];

#[async_trait]
impl IdentityProvider for DatabricksClient {
    async fn current_identity(&self) -> Result<Identity, MlserveError> {
        let me: ScimMe = self.get(self.url(SCIM_ME, &[])?).await?;
        Ok(Identity::classify(me.user_name))
    }
}
