// mlserve-core/src/application/mod.rs

pub mod reconciler;
pub mod registration;
pub mod report;

#[cfg(test)]
pub(crate) mod mocks;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Le CLI fait : `use mlserve_core::application::{EndpointReconciler, register_and_alias};`

pub use reconciler::{DeployRequest, EndpointReconciler, Reconciled, UpsertAction};
pub use registration::register_and_alias;
pub use report::{DeployReport, EndpointOutcome, PermissionOutcome};
