pub mod deploy;

pub use deploy::{ConfigOverrides, DeployConfig, apply_env_overrides, load_deploy_config};
