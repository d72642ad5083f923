// mlserve/src/commands/mod.rs

pub mod deploy;
pub mod env;
pub mod register;
pub mod resolve;

use std::path::Path;

use miette::Report;
use mlserve_core::domain::{DomainError, Environment};
use mlserve_core::infrastructure::adapters::databricks::DatabricksClient;
use mlserve_core::infrastructure::config::{ConfigOverrides, DeployConfig, load_deploy_config};

/// Loads the config (file, then ENV, then CLI) and resolves the environment.
///
/// Fails closed: an unrecognised environment aborts before any platform call.
pub(crate) fn load_settings(
    config: Option<&Path>,
    overrides: ConfigOverrides,
) -> miette::Result<(DeployConfig, Environment)> {
    println!("⚙️  Loading configuration...");
    let mut settings = load_deploy_config(config, Path::new("."))?;
    settings.apply_overrides(overrides)?;

    let environment = settings.environment()?;
    println!(
        "   Environment: {} ({}) | Catalog: {}",
        environment,
        settings.host(),
        settings.catalog()
    );

    Ok((settings, environment))
}

pub(crate) fn connect(settings: &DeployConfig) -> miette::Result<DatabricksClient> {
    let token = settings.token()?;
    Ok(DatabricksClient::new(
        settings.host(),
        token,
        settings.timeout(),
    )?)
}

/// Renders a domain failure with its diagnostic code and help.
///
/// Fatal failures end the process with exit code 1; the others are printed
/// as warnings and the caller carries on.
pub(crate) fn report_failure(step: &str, err: DomainError) {
    if err.is_fatal() {
        eprintln!("\n💥 {} ABORTED: {:?}", step, Report::new(err));
        std::process::exit(1);
    }
    eprintln!("\n⚠️  {} (continuing): {:?}", step, Report::new(err));
}
