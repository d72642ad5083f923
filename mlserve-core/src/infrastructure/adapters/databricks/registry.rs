// mlserve-core/src/infrastructure/adapters/databricks/registry.rs

use async_trait::async_trait;
use reqwest::Method;
use serde::de::IgnoredAny;
use tracing::debug;

use super::client::DatabricksClient;
use super::wire::{
    CreateModelVersion, CreateModelVersionResponse, CreateRegisteredModel, ModelVersionInfo,
    SetRegisteredModelAlias,
};
use crate::domain::model::{ModelName, ModelReference, RunArtifactUri, VersionHandle};
use crate::error::MlserveError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::ModelRegistry;

const UC_MODELS: &[&str] = &["api", "2.1", "unity-catalog", "models"];
const MLFLOW_UC: &[&str] = &["api", "2.0", "mlflow", "unity-catalog"];

#[async_trait]
impl ModelRegistry for DatabricksClient {
    async fn get_by_alias(
        &self,
        model: &ModelName,
        alias: &str,
    ) -> Result<ModelReference, MlserveError> {
        let full_name = model.full_name();
        let url = self.url(UC_MODELS, &[full_name.as_str(), "aliases", alias])?;
        let info: ModelVersionInfo = self.get(url).await?;

        // The platform echoes the name back; fall back to what was asked for.
        Ok(ModelReference {
            catalog: info.catalog_name.unwrap_or_else(|| model.catalog.clone()),
            schema: info.schema_name.unwrap_or_else(|| model.schema.clone()),
            name: info.model_name.unwrap_or_else(|| model.name.clone()),
            version: info.version,
        })
    }

    async fn register_model(
        &self,
        source: &RunArtifactUri,
        model: &ModelName,
    ) -> Result<VersionHandle, MlserveError> {
        let full_name = model.full_name();

        // The registered model must exist before a version can be attached to it.
        let created: Result<IgnoredAny, InfrastructureError> = self
            .send_json(
                Method::POST,
                self.url(MLFLOW_UC, &["registered-models", "create"])?,
                &CreateRegisteredModel { name: &full_name },
            )
            .await;
        match created {
            Ok(_) => debug!(model = %full_name, "Registered model created"),
            Err(e) if e.is_already_exists() => {
                debug!(model = %full_name, "Registered model already exists")
            }
            Err(e) => return Err(e.into()),
        }

        let uri = source.to_string();
        let response: CreateModelVersionResponse = self
            .send_json(
                Method::POST,
                self.url(MLFLOW_UC, &["model-versions", "create"])?,
                &CreateModelVersion {
                    name: &full_name,
                    source: &uri,
                    run_id: &source.run_id,
                },
            )
            .await?;

        let version = response.model_version.version.parse().map_err(|_| {
            InfrastructureError::Decode(format!(
                "model version '{}' is not a number",
                response.model_version.version
            ))
        })?;

        Ok(VersionHandle {
            full_name: response.model_version.name,
            version,
        })
    }

    async fn set_alias(
        &self,
        model: &ModelName,
        alias: &str,
        version: u64,
    ) -> Result<(), MlserveError> {
        let full_name = model.full_name();
        let url = self.url(UC_MODELS, &[full_name.as_str(), "aliases", alias])?;
        let _: IgnoredAny = self
            .send_json(
                Method::PUT,
                url,
                &SetRegisteredModelAlias {
                    version_num: version,
                },
            )
            .await?;
        Ok(())
    }
}
