// mlserve/src/commands/env.rs
//
// USE CASE: Print what the current configuration resolves to. No platform call.

use std::path::PathBuf;

use mlserve_core::infrastructure::config::ConfigOverrides;

use super::load_settings;

pub fn execute(config: Option<PathBuf>, environment: Option<String>) -> miette::Result<()> {
    let overrides = ConfigOverrides {
        environment,
        ..Default::default()
    };
    let (settings, environment) = load_settings(config.as_deref(), overrides)?;

    println!("🌍 environment={}", environment);
    println!("   host={}", settings.host());
    println!("   catalog={}", settings.catalog());
    println!("   schema={}", settings.schema);
    if let Ok(model) = settings.model() {
        println!("   model={}", model);
    }

    Ok(())
}
