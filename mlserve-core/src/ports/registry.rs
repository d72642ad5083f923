// mlserve-core/src/ports/registry.rs

// What the application needs from a model registry, without knowing which one.
// The Databricks adapter lives in infrastructure/adapters/databricks.

use crate::domain::model::{ModelName, ModelReference, RunArtifactUri, VersionHandle};
use crate::error::MlserveError;
use async_trait::async_trait;

#[async_trait]
pub trait ModelRegistry: Send + Sync {
    /// Version currently bound to `alias`. Not found is an error, never a default.
    async fn get_by_alias(
        &self,
        model: &ModelName,
        alias: &str,
    ) -> Result<ModelReference, MlserveError>;

    /// Creates a new version of `model` from a run artifact.
    async fn register_model(
        &self,
        source: &RunArtifactUri,
        model: &ModelName,
    ) -> Result<VersionHandle, MlserveError>;

    /// Binds `alias` to `version`, moving it away from any previous version.
    async fn set_alias(
        &self,
        model: &ModelName,
        alias: &str,
        version: u64,
    ) -> Result<(), MlserveError>;
}
