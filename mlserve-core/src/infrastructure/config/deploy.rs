// mlserve-core/src/infrastructure/config/deploy.rs

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, instrument};
use validator::Validate;

use crate::domain::access::AccessControlEntry;
use crate::domain::environment::{DEFAULT_HOST, Environment};
use crate::domain::error::DomainError;
use crate::domain::model::ModelName;
use crate::domain::serving::WorkloadShape;
use crate::infrastructure::error::InfrastructureError;

pub const CONFIG_CANDIDATES: [&str; 2] = ["mlserve.yaml", "mlserve_project_conf.yaml"];

// --- DATA CONTRACT (mlserve.yaml) ---

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct DeployConfig {
    #[serde(default)]
    pub name: Option<String>,

    /// Workspace host, with or without scheme. `DATABRICKS_HOST` wins over it.
    #[serde(default)]
    pub host: Option<String>,

    /// Never read from the file: `DATABRICKS_TOKEN` only.
    #[serde(skip)]
    pub token: Option<String>,

    /// dev | qa | prod. When absent, the hostname strategy decides.
    #[serde(default)]
    pub environment: Option<String>,

    #[serde(default)]
    pub env_prefix: String,

    #[serde(default = "default_catalog_base")]
    #[validate(length(min = 1, message = "catalog_base cannot be empty"))]
    pub catalog_base: String,

    #[serde(default = "default_schema")]
    #[validate(length(min = 1, message = "schema cannot be empty"))]
    pub schema: String,

    #[serde(default)]
    pub model_name: Option<String>,

    #[serde(default = "default_alias")]
    #[validate(length(min = 1, message = "alias cannot be empty"))]
    pub alias: String,

    #[serde(default = "default_timeout_secs")]
    #[validate(range(min = 1, max = 600))]
    pub timeout_secs: u64,

    #[serde(default)]
    pub workload: WorkloadShape,

    /// Principals kept on the endpoint besides the running identity.
    #[serde(default)]
    pub access_control: Vec<AccessControlEntry>,
}

fn default_catalog_base() -> String {
    "digital_technology".to_string()
}
fn default_schema() -> String {
    "ai_agency_bronze".to_string()
}
fn default_alias() -> String {
    "staging".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            name: None,
            host: None,
            token: None,
            environment: None,
            env_prefix: String::new(),
            catalog_base: default_catalog_base(),
            schema: default_schema(),
            model_name: None,
            alias: default_alias(),
            timeout_secs: default_timeout_secs(),
            workload: WorkloadShape::default(),
            access_control: Vec::new(),
        }
    }
}

/// Values given on the command line. They win over the file and the environment.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub environment: Option<String>,
    pub env_prefix: Option<String>,
    pub alias: Option<String>,
    pub model_name: Option<String>,
}

impl DeployConfig {
    pub fn host(&self) -> &str {
        self.host
            .as_deref()
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(DEFAULT_HOST)
    }

    pub fn environment(&self) -> Result<Environment, DomainError> {
        Environment::resolve(self.environment.as_deref(), self.host())
    }

    /// `<env_prefix><catalog_base>`, e.g. `dev_` + `digital_technology`.
    pub fn catalog(&self) -> String {
        format!("{}{}", self.env_prefix, self.catalog_base)
    }

    pub fn model(&self) -> Result<ModelName, InfrastructureError> {
        let name = self
            .model_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| {
                InfrastructureError::ConfigError(
                    "model_name is required (mlserve.yaml or --model-name)".to_string(),
                )
            })?;
        ModelName::new(self.catalog(), self.schema.clone(), name)
            .map_err(|e| InfrastructureError::ConfigError(e.to_string()))
    }

    pub fn token(&self) -> Result<&str, InfrastructureError> {
        self.token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| InfrastructureError::ConfigError("DATABRICKS_TOKEN is not set".into()))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Applies CLI values and validates the result again.
    pub fn apply_overrides(
        &mut self,
        overrides: ConfigOverrides,
    ) -> Result<(), InfrastructureError> {
        if let Some(env) = overrides.environment {
            self.environment = Some(env);
        }
        if let Some(prefix) = overrides.env_prefix {
            self.env_prefix = prefix;
        }
        if let Some(alias) = overrides.alias {
            self.alias = alias;
        }
        if let Some(model) = overrides.model_name {
            self.model_name = Some(model);
        }
        self.check()
    }

    fn check(&self) -> Result<(), InfrastructureError> {
        self.validate()
            .map_err(|e| InfrastructureError::ConfigError(e.to_string()))
    }
}

// --- LOADER ---

/// Loads `mlserve.yaml`, then layers the process environment on top.
///
/// With an explicit `path` the file must exist. Without one, the candidates are
/// looked up in `dir` and defaults are used when none is present.
#[instrument(skip(dir))]
pub fn load_deploy_config(
    path: Option<&Path>,
    dir: &Path,
) -> Result<DeployConfig, InfrastructureError> {
    let mut config = match path {
        Some(p) => {
            if !p.exists() {
                return Err(InfrastructureError::ConfigNotFound(p.display().to_string()));
            }
            read_config(p)?
        }
        None => match find_config(dir) {
            Some(p) => read_config(&p)?,
            None => {
                info!("No mlserve.yaml found, using defaults");
                DeployConfig::default()
            }
        },
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    config.check()?;

    Ok(config)
}

fn find_config(dir: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|f| dir.join(f))
        .find(|p| p.exists())
}

fn read_config(path: &Path) -> Result<DeployConfig, InfrastructureError> {
    info!(path = ?path, "Loading deploy configuration");
    let content = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

/// Layering: `DATABRICKS_HOST`, `DATABRICKS_TOKEN`, `MLSERVE_ENV`, `MLSERVE_ENV_PREFIX`.
pub fn apply_env_overrides<F>(config: &mut DeployConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(host) = lookup("DATABRICKS_HOST").filter(|v| !v.is_empty()) {
        info!(old = ?config.host, new = %host, "Overriding host via ENV");
        config.host = Some(host);
    }
    if let Some(token) = lookup("DATABRICKS_TOKEN") {
        config.token = Some(token);
    }
    if let Some(env) = lookup("MLSERVE_ENV").filter(|v| !v.is_empty()) {
        info!(old = ?config.environment, new = %env, "Overriding environment via ENV");
        config.environment = Some(env);
    }
    if let Some(prefix) = lookup("MLSERVE_ENV_PREFIX") {
        config.env_prefix = prefix;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::access::{PermissionLevel, Principal};
    use crate::domain::serving::WorkloadSize;
    use anyhow::Result;
    use std::collections::HashMap;

    const SAMPLE: &str = r#"
name: my_model_deployment_project
host: lego-ssc-qa.cloud.databricks.com
env_prefix: "qa_"
model_name: my_model_deployment_project_ml_pipeline_model
workload:
  size: Medium
access_control:
  - group_name: c1.app.access.sscdp.ai_agency.developer
    permission_level: CAN_MANAGE
"#;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn test_sample_config_with_defaults() -> Result<()> {
        let config: DeployConfig = serde_yaml::from_str(SAMPLE)?;

        assert_eq!(config.alias, "staging");
        assert_eq!(config.schema, "ai_agency_bronze");
        assert_eq!(config.catalog(), "qa_digital_technology");
        assert_eq!(config.environment()?, Environment::Qa);
        assert_eq!(config.workload.size, WorkloadSize::Medium);
        assert!(config.workload.scale_to_zero);
        assert_eq!(
            config.model()?.full_name(),
            "qa_digital_technology.ai_agency_bronze.my_model_deployment_project_ml_pipeline_model"
        );
        assert_eq!(
            config.access_control[0].principal,
            Principal::Group("c1.app.access.sscdp.ai_agency.developer".into())
        );
        assert_eq!(
            config.access_control[0].permission_level,
            PermissionLevel::CanManage
        );
        Ok(())
    }

    #[test]
    fn test_token_is_never_read_from_file() -> Result<()> {
        let config: DeployConfig = serde_yaml::from_str("token: leaked\nmodel_name: m")?;
        assert!(config.token().is_err());
        Ok(())
    }

    #[test]
    fn test_env_then_cli_layering() -> Result<()> {
        let mut config: DeployConfig = serde_yaml::from_str(SAMPLE)?;

        apply_env_overrides(
            &mut config,
            env(&[
                ("DATABRICKS_HOST", "https://lego-ssc-prod.cloud.databricks.com"),
                ("DATABRICKS_TOKEN", "dapi-123"),
                ("MLSERVE_ENV_PREFIX", ""),
            ]),
        );
        assert_eq!(config.environment()?, Environment::Prod);
        assert_eq!(config.token()?, "dapi-123");
        assert_eq!(config.catalog(), "digital_technology");

        config.apply_overrides(ConfigOverrides {
            environment: Some("dev".into()),
            alias: Some("production".into()),
            ..Default::default()
        })?;
        assert_eq!(config.environment()?, Environment::Dev);
        assert_eq!(config.alias, "production");
        Ok(())
    }

    #[test]
    fn test_cli_overrides_are_validated() -> Result<()> {
        let mut config: DeployConfig = serde_yaml::from_str(SAMPLE)?;

        let err = config
            .apply_overrides(ConfigOverrides {
                alias: Some(String::new()),
                ..Default::default()
            })
            .unwrap_err();
        assert!(
            matches!(err, InfrastructureError::ConfigError(ref m) if m.contains("alias cannot be empty"))
        );
        Ok(())
    }

    #[test]
    fn test_missing_model_name_is_config_error() {
        let config = DeployConfig::default();
        assert!(matches!(
            config.model(),
            Err(InfrastructureError::ConfigError(_))
        ));
        assert_eq!(config.host(), DEFAULT_HOST);
        assert_eq!(config.environment().unwrap(), Environment::Dev);
    }

    #[test]
    fn test_load_from_dir_and_explicit_path() -> Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("mlserve.yaml"), SAMPLE)?;

        let found = load_deploy_config(None, dir.path())?;
        assert_eq!(found.name.as_deref(), Some("my_model_deployment_project"));

        let missing = load_deploy_config(Some(&dir.path().join("nope.yaml")), dir.path());
        assert!(matches!(
            missing,
            Err(InfrastructureError::ConfigNotFound(_))
        ));
        Ok(())
    }

    #[test]
    fn test_invalid_timeout_is_rejected() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("mlserve.yaml");
        fs::write(&path, "model_name: m\ntimeout_secs: 0\n")?;

        let result = load_deploy_config(Some(&path), dir.path());
        assert!(matches!(result, Err(InfrastructureError::ConfigError(_))));
        Ok(())
    }
}
