// mlserve-core/src/domain/access/permission.rs

use serde::{Deserialize, Serialize};
use std::fmt;

// Ordered by capability, so `>=` answers "at least this much access".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PermissionLevel {
    CanView,
    CanQuery,
    CanManage,
}

impl PermissionLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CanView => "CAN_VIEW",
            Self::CanQuery => "CAN_QUERY",
            Self::CanManage => "CAN_MANAGE",
        }
    }

    pub fn is_management(&self) -> bool {
        matches!(self, Self::CanManage)
    }
}

impl fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PermissionLevel {
    type Err = String;

    /// Accepts the platform spelling (`CAN_MANAGE`) and the short form (`manage`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        match upper.strip_prefix("CAN_").unwrap_or(&upper) {
            "VIEW" => Ok(Self::CanView),
            "QUERY" => Ok(Self::CanQuery),
            "MANAGE" => Ok(Self::CanManage),
            _ => Err(format!("Unknown permission level: {}", s)),
        }
    }
}
