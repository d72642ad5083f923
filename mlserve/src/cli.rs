// mlserve/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mlserve")]
#[command(about = "Deploys registered models to Databricks Model Serving", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🚀 Resolves the alias, creates or updates `<model>_endpoint`, then sets its ACL
    Deploy {
        /// Config file (default: mlserve.yaml in the current directory)
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Registry alias to deploy (ex: "staging", "production")
        #[arg(long, short)]
        alias: Option<String>,

        /// Prefix prepended to the catalog name (ex: "dev_")
        #[arg(long)]
        env_prefix: Option<String>,

        /// dev | qa | prod. Overrides MLSERVE_ENV and the hostname strategy
        #[arg(long)]
        environment: Option<String>,

        /// Model name inside the catalog and schema
        #[arg(long)]
        model_name: Option<String>,

        /// Write the deploy report as JSON to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// 🔎 Prints the version an alias currently points at
    Resolve {
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Full model name `catalog.schema.name` (default: from the config)
        #[arg(long, short)]
        model: Option<String>,

        #[arg(long, short)]
        alias: Option<String>,
    },

    /// 📦 Registers a run artifact as a new model version and moves the alias to it
    Register {
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Run artifact URI (ex: "runs:/<run_id>/model")
        #[arg(long)]
        model_uri: String,

        /// Full model name `catalog.schema.name` (default: from the config)
        #[arg(long, short)]
        model: Option<String>,

        #[arg(long, short)]
        alias: Option<String>,
    },

    /// 🌍 Prints the resolved environment, host and catalog
    Env {
        #[arg(long, short)]
        config: Option<PathBuf>,

        #[arg(long)]
        environment: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clap::Parser;

    #[test]
    fn test_cli_parse_deploy_defaults() -> Result<()> {
        let args = Cli::parse_from(["mlserve", "deploy"]);
        match args.command {
            Commands::Deploy {
                config,
                alias,
                env_prefix,
                environment,
                model_name,
                report,
            } => {
                assert_eq!(config, None);
                assert_eq!(alias, None);
                assert_eq!(env_prefix, None);
                assert_eq!(environment, None);
                assert_eq!(model_name, None);
                assert_eq!(report, None);
                Ok(())
            }
            _ => bail!("Expected Deploy command"),
        }
    }

    #[test]
    fn test_cli_parse_deploy_overrides() -> Result<()> {
        let args = Cli::parse_from([
            "mlserve",
            "deploy",
            "--alias",
            "production",
            "--env-prefix",
            "dev_",
            "--environment",
            "qa",
            "--config",
            "/tmp/mlserve.yaml",
        ]);
        match args.command {
            Commands::Deploy {
                config,
                alias,
                env_prefix,
                environment,
                ..
            } => {
                assert_eq!(config, Some(PathBuf::from("/tmp/mlserve.yaml")));
                assert_eq!(alias, Some("production".to_string()));
                assert_eq!(env_prefix, Some("dev_".to_string()));
                assert_eq!(environment, Some("qa".to_string()));
                Ok(())
            }
            _ => bail!("Expected Deploy command"),
        }
    }

    #[test]
    fn test_cli_parse_register_requires_uri() -> Result<()> {
        assert!(Cli::try_parse_from(["mlserve", "register"]).is_err());

        let args = Cli::parse_from(["mlserve", "register", "--model-uri", "runs:/abc/model"]);
        match args.command {
            Commands::Register {
                model_uri, alias, ..
            } => {
                assert_eq!(model_uri, "runs:/abc/model");
                assert_eq!(alias, None);
                Ok(())
            }
            _ => bail!("Expected Register command"),
        }
    }

    #[test]
    fn test_cli_parse_resolve_model() -> Result<()> {
        let args = Cli::parse_from(["mlserve", "resolve", "-m", "c.s.m", "-a", "champion"]);
        match args.command {
            Commands::Resolve { model, alias, .. } => {
                assert_eq!(model, Some("c.s.m".to_string()));
                assert_eq!(alias, Some("champion".to_string()));
                Ok(())
            }
            _ => bail!("Expected Resolve command"),
        }
    }
}
