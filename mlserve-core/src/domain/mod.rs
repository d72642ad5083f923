pub mod access;
pub mod environment;
pub mod error;
pub mod model;
pub mod serving;

// Re-exports pratiques pour simplifier les imports ailleurs
pub use environment::Environment;
pub use error::DomainError;
