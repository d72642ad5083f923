// mlserve-core/src/application/reconciler.rs

use serde::Serialize;
use tracing::{error, info, instrument};

use crate::application::report::{DeployReport, EndpointOutcome, PermissionOutcome};
use crate::domain::access::{AccessControlEntry, AccessControlList};
use crate::domain::error::DomainError;
use crate::domain::model::{ModelName, ModelReference};
use crate::domain::serving::{EndpointDescriptor, WorkloadShape, endpoint_name_for};
use crate::ports::{IdentityProvider, ModelRegistry, ServingPlatform};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpsertAction {
    Created,
    Updated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    pub descriptor: EndpointDescriptor,
    pub action: UpsertAction,
}

/// What a deploy run should converge to.
#[derive(Debug, Clone)]
pub struct DeployRequest {
    pub model: ModelName,
    pub alias: String,
    /// Principals that keep access besides the running identity.
    pub access_control: Vec<AccessControlEntry>,
}

/// Drives the serving platform to serve one model version, then sets the ACL.
///
/// Single pass, no retries: create-or-update is decided by an explicit
/// existence query, and the ACL is always submitted as a full replacement.
pub struct EndpointReconciler<'a> {
    registry: &'a dyn ModelRegistry,
    serving: &'a dyn ServingPlatform,
    identity: &'a dyn IdentityProvider,
    workload: WorkloadShape,
}

impl<'a> EndpointReconciler<'a> {
    pub fn new(
        registry: &'a dyn ModelRegistry,
        serving: &'a dyn ServingPlatform,
        identity: &'a dyn IdentityProvider,
    ) -> Self {
        Self {
            registry,
            serving,
            identity,
            workload: WorkloadShape::default(),
        }
    }

    pub fn with_workload(mut self, workload: WorkloadShape) -> Self {
        self.workload = workload;
        self
    }

    #[instrument(skip(self), fields(model = %model))]
    pub async fn resolve_model(
        &self,
        model: &ModelName,
        alias: &str,
    ) -> Result<ModelReference, DomainError> {
        let reference = self
            .registry
            .get_by_alias(model, alias)
            .await
            .map_err(|e| DomainError::ModelResolution {
                model: model.full_name(),
                alias: alias.to_string(),
                reason: e.to_string(),
            })?;

        info!(version = reference.version, "Resolved model alias");
        Ok(reference)
    }

    pub async fn exists(&self, name: &str) -> Result<bool, DomainError> {
        self.serving
            .exists(name)
            .await
            .map_err(|e| DomainError::EndpointUpsert {
                endpoint: name.to_string(),
                reason: format!("existence check failed: {}", e),
            })
    }

    #[instrument(skip(self), fields(model = %model))]
    pub async fn reconcile_endpoint(
        &self,
        model: &ModelReference,
    ) -> Result<Reconciled, DomainError> {
        let descriptor = EndpointDescriptor::for_model(model, self.workload);
        let name = descriptor.name.clone();

        let action = if self.exists(&name).await? {
            info!(endpoint = %name, "Endpoint exists, updating served entity");
            self.serving
                .update_endpoint_config(&name, &descriptor)
                .await
                .map_err(|e| DomainError::EndpointUpsert {
                    endpoint: name.clone(),
                    reason: format!("update failed: {}", e),
                })?;
            UpsertAction::Updated
        } else {
            info!(endpoint = %name, "Endpoint absent, creating it");
            self.serving
                .create_endpoint(&descriptor)
                .await
                .map_err(|e| DomainError::EndpointUpsert {
                    endpoint: name.clone(),
                    reason: format!("create failed: {}", e),
                })?;
            UpsertAction::Created
        };

        Ok(Reconciled { descriptor, action })
    }

    /// Replaces the endpoint ACL with the running identity (`CAN_MANAGE`) plus `extra`.
    #[instrument(skip(self, extra), fields(extra = extra.len()))]
    pub async fn apply_permissions(
        &self,
        endpoint_id: &str,
        extra: &[AccessControlEntry],
    ) -> Result<AccessControlList, DomainError> {
        let permission_error = |reason: String| DomainError::Permission {
            endpoint: endpoint_id.to_string(),
            reason,
        };

        let identity = self
            .identity
            .current_identity()
            .await
            .map_err(|e| permission_error(format!("could not determine current identity: {}", e)))?;

        let acl = AccessControlList::owned_by(&identity, extra);
        info!(
            identity = %identity,
            key = identity.principal().acl_key(),
            "Keeping the running identity in the ACL"
        );

        self.serving
            .set_permissions(endpoint_id, &acl)
            .await
            .map_err(|e| permission_error(e.to_string()))?;

        Ok(acl)
    }

    /// Resolve (fatal) => upsert endpoint (reported) => set permissions (reported).
    #[instrument(skip(self, request), fields(model = %request.model, alias = %request.alias))]
    pub async fn deploy(&self, request: &DeployRequest) -> Result<DeployReport, DomainError> {
        let model = self.resolve_model(&request.model, &request.alias).await?;
        let endpoint_name = endpoint_name_for(&model.name);

        let endpoint = match self.reconcile_endpoint(&model).await {
            Ok(Reconciled {
                action: UpsertAction::Created,
                ..
            }) => EndpointOutcome::Created,
            Ok(Reconciled {
                action: UpsertAction::Updated,
                ..
            }) => EndpointOutcome::Updated,
            Err(e) => EndpointOutcome::Failed {
                reason: reported(&endpoint_name, e),
            },
        };

        let permissions = match self.serving.get_endpoint(&endpoint_name).await {
            Ok(observed) => {
                match self
                    .apply_permissions(&observed.id, &request.access_control)
                    .await
                {
                    Ok(acl) => PermissionOutcome::Applied {
                        entries: acl.entries().to_vec(),
                    },
                    Err(e) => PermissionOutcome::Failed {
                        reason: reported(&endpoint_name, e),
                    },
                }
            }
            Err(e) => {
                let err = DomainError::Permission {
                    endpoint: endpoint_name.clone(),
                    reason: format!("endpoint lookup failed: {}", e),
                };
                PermissionOutcome::Failed {
                    reason: reported(&endpoint_name, err),
                }
            }
        };

        Ok(DeployReport {
            model,
            alias: request.alias.clone(),
            endpoint_name,
            endpoint,
            permissions,
            finished_at: chrono::Utc::now().to_rfc3339(),
        })
    }
}

/// Logs a non-fatal deploy failure and returns the reason kept in the report.
fn reported(endpoint: &str, err: DomainError) -> String {
    error!(endpoint, "{}", err);
    err.to_string()
}
