// mlserve-core/src/domain/access/identity.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::access::acl::Principal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityKind {
    User,
    ServicePrincipal,
}

/// The identity performing the current run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub kind: IdentityKind,
    pub name: String,
}

impl Identity {
    /// Human users log in with an e-mail; service principals with an application id.
    pub fn classify(name: impl Into<String>) -> Self {
        let name = name.into();
        let kind = if name.contains('@') {
            IdentityKind::User
        } else {
            IdentityKind::ServicePrincipal
        };
        Self { kind, name }
    }

    pub fn principal(&self) -> Principal {
        match self.kind {
            IdentityKind::User => Principal::User(self.name.clone()),
            IdentityKind::ServicePrincipal => Principal::ServicePrincipal(self.name.clone()),
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
