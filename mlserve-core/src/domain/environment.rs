// mlserve-core/src/domain/environment.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::DomainError;

/// Host used when none is configured (the dev workspace).
pub const DEFAULT_HOST: &str = "lego-ssc-dev.cloud.databricks.com";

/// Deployment stage of the workspace. Resolved once at startup, never changed after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    Qa,
    Prod,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Qa => "qa",
            Self::Prod => "prod",
        }
    }

    /// Hostname strategy: `lego-ssc-qa.cloud.databricks.com` => `qa`.
    ///
    /// Only the first DNS label is inspected; `dev` wins over `qa`, `qa` over `prod`.
    pub fn from_host(host: &str) -> Result<Self, DomainError> {
        let lowered = host.trim().to_lowercase();
        let without_scheme = lowered
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(&lowered);
        let label = without_scheme.split('.').next().unwrap_or_default();

        if label.contains("dev") {
            Ok(Self::Dev)
        } else if label.contains("qa") {
            Ok(Self::Qa)
        } else if label.contains("prod") {
            Ok(Self::Prod)
        } else {
            Err(DomainError::UnknownEnvironment(host.to_string()))
        }
    }

    /// Explicit value first, hostname strategy as fallback. Fails closed.
    pub fn resolve(explicit: Option<&str>, host: &str) -> Result<Self, DomainError> {
        match explicit.map(str::trim).filter(|s| !s.is_empty()) {
            Some(value) => value.parse(),
            None => Self::from_host(host),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Environment {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dev" => Ok(Self::Dev),
            "qa" => Ok(Self::Qa),
            "prod" => Ok(Self::Prod),
            _ => Err(DomainError::UnknownEnvironment(s.to_string())),
        }
    }
}
