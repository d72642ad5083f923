// mlserve-core/src/application/registration.rs

use tracing::{info, instrument};

use crate::domain::error::DomainError;
use crate::domain::model::{ModelName, RunArtifactUri, VersionHandle};
use crate::ports::ModelRegistry;

/// Registers a new model version from a run artifact and points `alias` at it.
///
/// Both steps are fatal: a version without the alias cannot be deployed by alias.
#[instrument(skip(registry), fields(model = %model))]
pub async fn register_and_alias(
    registry: &dyn ModelRegistry,
    model_uri: &str,
    model: &ModelName,
    alias: &str,
) -> Result<VersionHandle, DomainError> {
    let source = RunArtifactUri::parse(model_uri)?;

    let handle = registry
        .register_model(&source, model)
        .await
        .map_err(|e| DomainError::Registration {
            model: model.full_name(),
            reason: e.to_string(),
        })?;
    info!(version = handle.version, run_id = %source.run_id, "Registered new model version");

    registry
        .set_alias(model, alias, handle.version)
        .await
        .map_err(|e| DomainError::AliasAssignment {
            model: model.full_name(),
            alias: alias.to_string(),
            reason: e.to_string(),
        })?;
    info!(alias, version = handle.version, "Alias moved");

    Ok(handle)
}
