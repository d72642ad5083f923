// mlserve-core/src/domain/access/mod.rs

pub mod acl;
pub mod identity;
pub mod permission;

pub use acl::{AccessControlEntry, AccessControlList, Principal};
pub use identity::{Identity, IdentityKind};
pub use permission::PermissionLevel;
