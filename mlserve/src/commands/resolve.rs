// mlserve/src/commands/resolve.rs
//
// USE CASE: Show which version an alias points at, without touching the endpoint.

use std::path::PathBuf;

use mlserve_core::application::EndpointReconciler;
use mlserve_core::domain::model::ModelName;
use mlserve_core::domain::serving::endpoint_name_for;
use mlserve_core::infrastructure::config::ConfigOverrides;

use super::{connect, load_settings, report_failure};

pub async fn execute(
    config: Option<PathBuf>,
    model: Option<String>,
    alias: Option<String>,
) -> miette::Result<()> {
    let overrides = ConfigOverrides {
        alias,
        ..Default::default()
    };
    let (settings, _environment) = load_settings(config.as_deref(), overrides)?;
    let model = match model {
        Some(full_name) => ModelName::parse(&full_name)?,
        None => settings.model()?,
    };
    let client = connect(&settings)?;

    let reconciler = EndpointReconciler::new(&client, &client, &client);
    let reference = match reconciler.resolve_model(&model, &settings.alias).await {
        Ok(reference) => reference,
        Err(e) => {
            report_failure("RESOLVE", e);
            return Ok(());
        }
    };
    let endpoint = endpoint_name_for(&reference.name);

    println!("🔎 {} @ {} ➜ version {}", model, settings.alias, reference.version);

    match reconciler.exists(&endpoint).await {
        Ok(true) => println!("   Endpoint '{}' exists (deploy will update it)", endpoint),
        Ok(false) => println!("   Endpoint '{}' is absent (deploy will create it)", endpoint),
        Err(e) => report_failure("ENDPOINT CHECK", e),
    }

    Ok(())
}
