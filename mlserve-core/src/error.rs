// mlserve-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MlserveError {
    // --- ERREURS DU DOMAINE (Resolution, Upsert, Permissions) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- ERREURS D'INFRASTRUCTURE (HTTP, IO, Parsing) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

impl MlserveError {
    /// True when the platform answered that the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, MlserveError::Infrastructure(e) if e.is_not_found())
    }
}
