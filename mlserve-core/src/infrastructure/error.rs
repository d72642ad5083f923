// mlserve-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- HTTP (Transport) ---
    #[error("HTTP Error: {0}")]
    #[diagnostic(
        code(mlserve::infra::http),
        help("Check DATABRICKS_HOST and network access to the workspace.")
    )]
    Http(#[from] reqwest::Error),

    // --- PLATFORM (Databricks REST answered with an error) ---
    #[error("Databricks API Error (HTTP {status}) [{}]: {message}", .code.as_deref().unwrap_or("UNKNOWN"))]
    #[diagnostic(code(mlserve::infra::api))]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("Unexpected response from Databricks: {0}")]
    #[diagnostic(code(mlserve::infra::decode))]
    Decode(String),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(mlserve::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(mlserve::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    #[diagnostic(code(mlserve::infra::config))]
    ConfigError(String),

    #[error("Deploy configuration not found at '{0}'")]
    #[diagnostic(code(mlserve::infra::config_missing))]
    ConfigNotFound(String),
}

impl InfrastructureError {
    pub const NOT_FOUND_CODE: &'static str = "RESOURCE_DOES_NOT_EXIST";
    pub const ALREADY_EXISTS_CODE: &'static str = "RESOURCE_ALREADY_EXISTS";

    pub fn is_not_found(&self) -> bool {
        match self {
            InfrastructureError::Api { status, code, .. } => {
                *status == 404 || code.as_deref() == Some(Self::NOT_FOUND_CODE)
            }
            _ => false,
        }
    }

    pub fn is_already_exists(&self) -> bool {
        match self {
            InfrastructureError::Api { status, code, .. } => {
                *status == 409 || code.as_deref() == Some(Self::ALREADY_EXISTS_CODE)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16, code: Option<&str>) -> InfrastructureError {
        InfrastructureError::Api {
            status,
            code: code.map(str::to_string),
            message: "boom".to_string(),
        }
    }

    #[test]
    fn test_not_found_by_status_or_code() {
        assert!(api(404, None).is_not_found());
        assert!(api(400, Some("RESOURCE_DOES_NOT_EXIST")).is_not_found());
        assert!(!api(403, Some("PERMISSION_DENIED")).is_not_found());
        assert!(!InfrastructureError::ConfigError("x".into()).is_not_found());
    }

    #[test]
    fn test_already_exists_is_explicit() {
        assert!(api(400, Some("RESOURCE_ALREADY_EXISTS")).is_already_exists());
        assert!(api(409, None).is_already_exists());
        assert!(!api(400, Some("QUOTA_EXCEEDED")).is_already_exists());
    }

    #[test]
    fn test_api_error_display_carries_code() {
        assert_eq!(
            api(400, Some("QUOTA_EXCEEDED")).to_string(),
            "Databricks API Error (HTTP 400) [QUOTA_EXCEEDED]: boom"
        );
        assert_eq!(
            api(500, None).to_string(),
            "Databricks API Error (HTTP 500) [UNKNOWN]: boom"
        );
    }
}
