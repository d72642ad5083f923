// mlserve-core/src/domain/access/acl.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::access::identity::Identity;
use crate::domain::access::permission::PermissionLevel;
use crate::domain::error::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Principal {
    User(String),
    Group(String),
    ServicePrincipal(String),
}

impl Principal {
    /// Field name used for this principal kind in an access control request.
    pub fn acl_key(&self) -> &'static str {
        match self {
            Self::User(_) => "user_name",
            Self::Group(_) => "group_name",
            Self::ServicePrincipal(_) => "service_principal_name",
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::User(n) | Self::Group(n) | Self::ServicePrincipal(n) => n,
        }
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.acl_key(), self.name())
    }
}

/// `{user_name | group_name | service_principal_name, permission_level}`.
///
/// Exactly one principal field is allowed, both in config files and on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEntry", into = "RawEntry")]
pub struct AccessControlEntry {
    pub principal: Principal,
    pub permission_level: PermissionLevel,
}

impl AccessControlEntry {
    pub fn new(principal: Principal, permission_level: PermissionLevel) -> Self {
        Self {
            principal,
            permission_level,
        }
    }

    pub fn group(name: impl Into<String>, permission_level: PermissionLevel) -> Self {
        Self::new(Principal::Group(name.into()), permission_level)
    }
}

#[derive(Serialize, Deserialize)]
struct RawEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    service_principal_name: Option<String>,
    permission_level: PermissionLevel,
}

impl TryFrom<RawEntry> for AccessControlEntry {
    type Error = DomainError;

    fn try_from(raw: RawEntry) -> Result<Self, Self::Error> {
        let principal = match (raw.user_name, raw.group_name, raw.service_principal_name) {
            (Some(u), None, None) => Principal::User(u),
            (None, Some(g), None) => Principal::Group(g),
            (None, None, Some(sp)) => Principal::ServicePrincipal(sp),
            (None, None, None) => {
                return Err(DomainError::InvalidAccessControl(
                    "entry has no principal (user_name, group_name or service_principal_name)"
                        .to_string(),
                ));
            }
            _ => {
                return Err(DomainError::InvalidAccessControl(
                    "entry names more than one principal".to_string(),
                ));
            }
        };
        Ok(Self::new(principal, raw.permission_level))
    }
}

impl From<AccessControlEntry> for RawEntry {
    fn from(entry: AccessControlEntry) -> Self {
        let mut raw = RawEntry {
            user_name: None,
            group_name: None,
            service_principal_name: None,
            permission_level: entry.permission_level,
        };
        match entry.principal {
            Principal::User(n) => raw.user_name = Some(n),
            Principal::Group(n) => raw.group_name = Some(n),
            Principal::ServicePrincipal(n) => raw.service_principal_name = Some(n),
        }
        raw
    }
}

/// Set of entries keyed by principal. Insertion order is kept for display
/// and for the submitted request body; equality ignores it.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct AccessControlList {
    entries: Vec<AccessControlEntry>,
}

impl AccessControlList {
    pub fn new() -> Self {
        Self::default()
    }

    /// ACL that keeps `owner` in control of the endpoint.
    ///
    /// The owner always ends up with `CAN_MANAGE`, whatever `extra` says about it.
    pub fn owned_by(owner: &Identity, extra: &[AccessControlEntry]) -> Self {
        let owner_principal = owner.principal();
        let mut acl = Self::new();
        acl.insert(AccessControlEntry::new(
            owner_principal.clone(),
            PermissionLevel::CanManage,
        ));
        for entry in extra {
            if entry.principal == owner_principal {
                continue;
            }
            acl.insert(entry.clone());
        }
        acl
    }

    /// Inserts or replaces the entry for the same principal.
    pub fn insert(&mut self, entry: AccessControlEntry) {
        match self
            .entries
            .iter_mut()
            .find(|e| e.principal == entry.principal)
        {
            Some(existing) => existing.permission_level = entry.permission_level,
            None => self.entries.push(entry),
        }
    }

    pub fn level_for(&self, principal: &Principal) -> Option<PermissionLevel> {
        self.entries
            .iter()
            .find(|e| &e.principal == principal)
            .map(|e| e.permission_level)
    }

    pub fn entries(&self) -> &[AccessControlEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for AccessControlList {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|e| other.level_for(&e.principal) == Some(e.permission_level))
    }
}

impl Eq for AccessControlList {}

impl FromIterator<AccessControlEntry> for AccessControlList {
    fn from_iter<I: IntoIterator<Item = AccessControlEntry>>(iter: I) -> Self {
        let mut acl = Self::new();
        for entry in iter {
            acl.insert(entry);
        }
        acl
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn admins() -> AccessControlEntry {
        AccessControlEntry::group("admins", PermissionLevel::CanManage)
    }

    #[test]
    fn test_owner_entry_comes_first_with_manage() {
        let owner = Identity::classify("svc-123");
        let acl = AccessControlList::owned_by(&owner, &[admins()]);

        assert_eq!(acl.len(), 2);
        assert_eq!(
            acl.entries()[0],
            AccessControlEntry::new(
                Principal::ServicePrincipal("svc-123".into()),
                PermissionLevel::CanManage
            )
        );
        assert_eq!(acl.entries()[1], admins());
    }

    #[test]
    fn test_owner_cannot_be_downgraded_by_extra_entries() {
        let owner = Identity::classify("jane@example.com");
        let extra = vec![AccessControlEntry::new(
            Principal::User("jane@example.com".into()),
            PermissionLevel::CanView,
        )];
        let acl = AccessControlList::owned_by(&owner, &extra);

        assert_eq!(acl.len(), 1);
        assert_eq!(
            acl.level_for(&owner.principal()),
            Some(PermissionLevel::CanManage)
        );
    }

    #[test]
    fn test_same_principal_is_keyed_once() {
        let acl: AccessControlList = vec![
            AccessControlEntry::group("readers", PermissionLevel::CanView),
            AccessControlEntry::group("readers", PermissionLevel::CanQuery),
        ]
        .into_iter()
        .collect();

        assert_eq!(acl.len(), 1);
        assert_eq!(
            acl.level_for(&Principal::Group("readers".into())),
            Some(PermissionLevel::CanQuery)
        );
    }

    #[test]
    fn test_equality_ignores_order() {
        let a: AccessControlList = vec![
            admins(),
            AccessControlEntry::group("readers", PermissionLevel::CanQuery),
        ]
        .into_iter()
        .collect();
        let b: AccessControlList = vec![
            AccessControlEntry::group("readers", PermissionLevel::CanQuery),
            admins(),
        ]
        .into_iter()
        .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_entry_wire_shape() {
        let json = serde_json::to_value(admins()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"group_name": "admins", "permission_level": "CAN_MANAGE"})
        );
    }

    #[test]
    fn test_entry_from_yaml_requires_exactly_one_principal() {
        let ok: AccessControlEntry =
            serde_yaml::from_str("service_principal_name: svc-1\npermission_level: CAN_QUERY")
                .unwrap();
        assert_eq!(ok.principal, Principal::ServicePrincipal("svc-1".into()));

        let none = serde_yaml::from_str::<AccessControlEntry>("permission_level: CAN_QUERY");
        assert!(none.is_err());

        let both = serde_yaml::from_str::<AccessControlEntry>(
            "user_name: a@b.c\ngroup_name: g\npermission_level: CAN_QUERY",
        );
        assert!(both.is_err());
    }
}
