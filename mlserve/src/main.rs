// mlserve/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use commands::deploy::DeployArgs;
use mlserve_core::infrastructure::config::ConfigOverrides;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // RUST_LOG=debug mlserve deploy ... pour voir les requêtes HTTP
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Deploy {
            config,
            alias,
            env_prefix,
            environment,
            model_name,
            report,
        } => {
            commands::deploy::execute(DeployArgs {
                config,
                overrides: ConfigOverrides {
                    environment,
                    env_prefix,
                    alias,
                    model_name,
                },
                report,
            })
            .await?
        }

        Commands::Resolve {
            config,
            model,
            alias,
        } => commands::resolve::execute(config, model, alias).await?,

        Commands::Register {
            config,
            model_uri,
            model,
            alias,
        } => commands::register::execute(config, model_uri, model, alias).await?,

        Commands::Env {
            config,
            environment,
        } => commands::env::execute(config, environment)?,
    }

    Ok(())
}
