// mlserve-core/src/domain/model/reference.rs

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use crate::domain::error::DomainError;

// Unity Catalog identifiers: letters, digits, underscores and hyphens.
fn re_identifier() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_\-]*$")
            .unwrap_or_else(|_| Regex::new("$^").unwrap_or_else(|_| unreachable!()))
    })
}

/// Three-part name of a registered model: `<catalog>.<schema>.<model>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelName {
    pub catalog: String,
    pub schema: String,
    pub name: String,
}

impl ModelName {
    pub fn new(
        catalog: impl Into<String>,
        schema: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let model = Self {
            catalog: catalog.into(),
            schema: schema.into(),
            name: name.into(),
        };
        let valid = [&model.catalog, &model.schema, &model.name]
            .iter()
            .all(|part| re_identifier().is_match(part));
        if !valid {
            return Err(DomainError::InvalidModelName(model.full_name()));
        }
        Ok(model)
    }

    pub fn parse(full_name: &str) -> Result<Self, DomainError> {
        let parts: Vec<&str> = full_name.split('.').collect();
        match parts.as_slice() {
            [catalog, schema, name] => Self::new(*catalog, *schema, *name)
                .map_err(|_| DomainError::InvalidModelName(full_name.to_string())),
            _ => Err(DomainError::InvalidModelName(full_name.to_string())),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{}.{}.{}", self.catalog, self.schema, self.name)
    }

    pub fn at_version(&self, version: u64) -> ModelReference {
        ModelReference {
            catalog: self.catalog.clone(),
            schema: self.schema.clone(),
            name: self.name.clone(),
            version,
        }
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

/// One immutable registered model version.
///
/// Resolved from an alias at call time: the version is a snapshot, a later
/// move of the alias does not affect an already resolved reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelReference {
    pub catalog: String,
    pub schema: String,
    pub name: String,
    pub version: u64,
}

impl ModelReference {
    pub fn full_name(&self) -> String {
        format!("{}.{}.{}", self.catalog, self.schema, self.name)
    }

    pub fn model_name(&self) -> ModelName {
        ModelName {
            catalog: self.catalog.clone(),
            schema: self.schema.clone(),
            name: self.name.clone(),
        }
    }
}

impl fmt::Display for ModelReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (v{})", self.full_name(), self.version)
    }
}

/// Handle returned by the registry after a new version was created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionHandle {
    pub full_name: String,
    pub version: u64,
}

/// Artifact logged by a tracking run: `runs:/<run_id>/<artifact_path>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunArtifactUri {
    pub run_id: String,
    pub artifact_path: String,
}

impl RunArtifactUri {
    const SCHEME: &'static str = "runs:/";

    pub fn parse(uri: &str) -> Result<Self, DomainError> {
        let rest = uri
            .strip_prefix(Self::SCHEME)
            .ok_or_else(|| DomainError::InvalidModelUri(uri.to_string()))?;

        match rest.split_once('/') {
            Some((run_id, path)) if !run_id.is_empty() && !path.trim_matches('/').is_empty() => {
                Ok(Self {
                    run_id: run_id.to_string(),
                    artifact_path: path.trim_matches('/').to_string(),
                })
            }
            _ => Err(DomainError::InvalidModelUri(uri.to_string())),
        }
    }
}

impl fmt::Display for RunArtifactUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}/{}", Self::SCHEME, self.run_id, self.artifact_path)
    }
}
