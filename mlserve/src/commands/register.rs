// mlserve/src/commands/register.rs
//
// USE CASE: Register a run artifact and move the alias to the new version.

use std::path::PathBuf;

use mlserve_core::application::register_and_alias;
use mlserve_core::domain::model::ModelName;
use mlserve_core::infrastructure::config::ConfigOverrides;

use super::{connect, load_settings, report_failure};

pub async fn execute(
    config: Option<PathBuf>,
    model_uri: String,
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

    println!("📦 Registering {} as {}...", model_uri, model);

    match register_and_alias(&client, &model_uri, &model, &settings.alias).await {
        Ok(handle) => println!(
            "✨ {} v{} registered, alias '{}' now points at it",
            handle.full_name, handle.version, settings.alias
        ),
        Err(e) => report_failure("REGISTRATION", e),
    }

    Ok(())
}
