use crate::application::report::DeployReport;
use crate::infrastructure::error::InfrastructureError;
use std::io::Write;
use std::path::Path;

/// Persists a deploy report as pretty JSON, replacing any previous report.
///
/// The report is written to a temporary file next to `path` and renamed into
/// place, so a reader never sees a half-written report.
pub fn write_report(path: &Path, report: &DeployReport) -> Result<(), InfrastructureError> {
    let json = serde_json::to_vec_pretty(report)
        .map_err(|e| InfrastructureError::Decode(format!("report serialization: {}", e)))?;

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.exists() {
        std::fs::create_dir_all(parent)?;
    }

    let mut staged = tempfile::NamedTempFile::new_in(parent)?;
    staged.write_all(&json)?;
    staged.write_all(b"\n")?;
    staged
        .persist(path)
        .map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::report::{EndpointOutcome, PermissionOutcome};
    use crate::domain::model::ModelName;
    use anyhow::Result;
    use std::fs;

    fn report(endpoint: EndpointOutcome) -> Result<DeployReport> {
        Ok(DeployReport {
            model: ModelName::parse("c.s.m")?.at_version(3),
            alias: "staging".into(),
            endpoint_name: "m_endpoint".into(),
            endpoint,
            permissions: PermissionOutcome::Applied { entries: vec![] },
            finished_at: "2026-01-01T00:00:00+00:00".into(),
        })
    }

    #[test]
    fn test_report_is_written_as_json() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("reports").join("deploy.json");

        write_report(&path, &report(EndpointOutcome::Created)?)?;

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
        assert_eq!(value["endpoint_name"], "m_endpoint");
        assert_eq!(value["endpoint"]["status"], "created");
        assert_eq!(value["model"]["version"], 3);
        Ok(())
    }

    #[test]
    fn test_report_overwrites_previous_run() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("deploy.json");

        write_report(&path, &report(EndpointOutcome::Created)?)?;
        write_report(
            &path,
            &report(EndpointOutcome::Failed {
                reason: "quota".into(),
            })?,
        )?;

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
        assert_eq!(value["endpoint"]["status"], "failed");
        assert_eq!(value["endpoint"]["reason"], "quota");
        Ok(())
    }
}
