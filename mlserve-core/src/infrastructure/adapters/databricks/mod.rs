// mlserve-core/src/infrastructure/adapters/databricks/mod.rs
//
// Databricks REST adapter: one authenticated client implementing
// ModelRegistry (Unity Catalog), ServingPlatform and IdentityProvider (SCIM).

pub mod client;
mod identity;
mod registry;
mod serving;
pub mod wire;

pub use client::{DatabricksClient, normalize_host};
