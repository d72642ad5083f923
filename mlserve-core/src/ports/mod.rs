// mlserve-core/src/ports/mod.rs

pub mod identity;
pub mod registry;
pub mod serving;

pub use identity::IdentityProvider;
pub use registry::ModelRegistry;
pub use serving::ServingPlatform;
