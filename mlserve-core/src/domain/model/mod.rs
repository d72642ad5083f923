// mlserve-core/src/domain/model/mod.rs

pub mod reference;

pub use reference::{ModelName, ModelReference, RunArtifactUri, VersionHandle};
