// mlserve/src/commands/deploy.rs
//
// USE CASE: Deploy the aliased model version to its serving endpoint.

use std::path::PathBuf;

use miette::WrapErr;
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use mlserve_core::application::{
    DeployReport, DeployRequest, EndpointOutcome, EndpointReconciler, PermissionOutcome,
};
use mlserve_core::infrastructure::config::ConfigOverrides;
use mlserve_core::infrastructure::fs::write_report;

use super::{connect, load_settings, report_failure};

pub struct DeployArgs {
    pub config: Option<PathBuf>,
    pub overrides: ConfigOverrides,
    pub report: Option<PathBuf>,
}

pub async fn execute(args: DeployArgs) -> miette::Result<()> {
    let start = std::time::Instant::now();

    // A. Config & environment (fatal)
    let (settings, _environment) = load_settings(args.config.as_deref(), args.overrides)?;
    let model = settings.model()?;
    let client = connect(&settings)?;

    // B. Reconcile (the same client implements the three ports)
    println!("🚀 Deploying {} @ {}...", model, settings.alias);
    let reconciler = EndpointReconciler::new(&client, &client, &client)
        .with_workload(settings.workload);
    let request = DeployRequest {
        model,
        alias: settings.alias.clone(),
        access_control: settings.access_control.clone(),
    };

    let report = match reconciler.deploy(&request).await {
        Ok(report) => report,
        Err(e) => {
            report_failure("DEPLOY", e);
            return Ok(());
        }
    };

    // C. Output
    println!("\n{}", summary_table(&report));

    if let Some(path) = &args.report {
        write_report(path, &report)
            .wrap_err_with(|| format!("Failed to write report to {}", path.display()))?;
        println!("📄 Report saved to {}", path.display());
    }

    if report.is_clean() {
        println!("\n✨ SUCCESS! Deployed in {:.2?}", start.elapsed());
    } else {
        // Reported, not escalated: the endpoint may still be serving.
        eprintln!(
            "\n⚠️  Deploy finished with {} warning(s):",
            report.failures().len()
        );
        for failure in report.failures() {
            eprintln!("   ❌ {}", failure);
        }
    }

    Ok(())
}

fn summary_table(report: &DeployReport) -> Table {
    let endpoint = match &report.endpoint {
        EndpointOutcome::Created => "✅ created".to_string(),
        EndpointOutcome::Updated => "✅ updated".to_string(),
        EndpointOutcome::Failed { .. } => "❌ failed".to_string(),
    };
    let permissions = match &report.permissions {
        PermissionOutcome::Applied { entries } => format!("✅ {} entries", entries.len()),
        PermissionOutcome::Failed { .. } => "❌ failed".to_string(),
    };

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Model", "Alias", "Endpoint", "Upsert", "Permissions"])
        .add_row(vec![
            report.model.to_string(),
            report.alias.clone(),
            report.endpoint_name.clone(),
            endpoint,
            permissions,
        ]);
    table
}
