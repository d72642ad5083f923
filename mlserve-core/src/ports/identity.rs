// mlserve-core/src/ports/identity.rs

use crate::domain::access::Identity;
use crate::error::MlserveError;
use async_trait::async_trait;

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn current_identity(&self) -> Result<Identity, MlserveError>;
}
