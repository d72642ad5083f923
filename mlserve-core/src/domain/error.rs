// mlserve-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, Clone, PartialEq)]
pub enum DomainError {
    #[error("Could not resolve model '{model}' with alias '{alias}': {reason}")]
    #[diagnostic(
        code(mlserve::domain::resolution),
        help("Check that the alias is set on the registered model (e.g. 'staging').")
    )]
    ModelResolution {
        model: String,
        alias: String,
        reason: String,
    },

    #[error("Failed to create or update endpoint '{endpoint}': {reason}")]
    #[diagnostic(code(mlserve::domain::endpoint_upsert))]
    EndpointUpsert { endpoint: String, reason: String },

    #[error("Failed to set permissions on endpoint '{endpoint}': {reason}")]
    #[diagnostic(
        code(mlserve::domain::permission),
        help("The ACL is submitted as a full replacement. Every principal must be listed.")
    )]
    Permission { endpoint: String, reason: String },

    #[error("Failed to register model '{model}': {reason}")]
    #[diagnostic(code(mlserve::domain::registration))]
    Registration { model: String, reason: String },

    #[error("Failed to set alias '{alias}' on model '{model}': {reason}")]
    #[diagnostic(code(mlserve::domain::alias))]
    AliasAssignment {
        model: String,
        alias: String,
        reason: String,
    },

    #[error("Could not determine environment from '{0}'")]
    #[diagnostic(
        code(mlserve::domain::environment),
        help("Set 'environment' (dev, qa, prod) in mlserve.yaml or MLSERVE_ENV.")
    )]
    UnknownEnvironment(String),

    #[error("Invalid model name '{0}'")]
    #[diagnostic(
        code(mlserve::domain::model_name),
        help("Expected a three-part name: <catalog>.<schema>.<model>")
    )]
    InvalidModelName(String),

    #[error("Invalid model URI '{0}'")]
    #[diagnostic(
        code(mlserve::domain::model_uri),
        help("Expected a run artifact URI: runs:/<run_id>/<artifact_path>")
    )]
    InvalidModelUri(String),

    #[error("Invalid access control entry: {0}")]
    #[diagnostic(code(mlserve::domain::acl))]
    InvalidAccessControl(String),
}

impl DomainError {
    /// Fatal errors abort the run; the others are reported and the run continues.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            DomainError::EndpointUpsert { .. } | DomainError::Permission { .. }
        )
    }
}
