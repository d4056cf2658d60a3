use serde::{Deserialize, Serialize};

use crate::model::ids::RoleId;
use crate::store::Record;

/// An access role with a comma-separated permission list.
///
/// The role table is seeded once and treated as immutable reference data;
/// authorization elsewhere is a comparison against the role *name*.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    #[serde(rename = "RoleID")]
    pub id: RoleId,
    #[serde(rename = "RoleName")]
    pub name: String,
    #[serde(rename = "Permissions")]
    pub permissions: String,
}

impl Role {
    /// Role name granted full administrative actions.
    pub const ADMIN: &'static str = "Admin";
    /// Default role for self-registered accounts, and the resolver fallback.
    pub const RESEARCHER: &'static str = "Researcher";
    /// Read-only analyst role.
    pub const ANALYST: &'static str = "Analyst";

    #[must_use]
    pub fn new(id: RoleId, name: impl Into<String>, permissions: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            permissions: permissions.into(),
        }
    }

    /// Split the comma-separated permission list.
    pub fn permission_list(&self) -> impl Iterator<Item = &str> {
        self.permissions.split(',').map(str::trim)
    }

    #[must_use]
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permission_list().any(|p| p == permission)
    }
}

impl Record for Role {
    const TABLE: &'static str = "roles";
    const HEADERS: &'static [&'static str] = &["RoleID", "RoleName", "Permissions"];

    fn key(&self) -> u32 {
        self.id.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_new() {
        let role = Role::new(RoleId::new(1), "Admin", "manage_users,add_minerals");
        assert_eq!(role.name, "Admin");
        assert_eq!(role.key(), 1);
    }

    #[test]
    fn test_permission_list() {
        let role = Role::new(RoleId::new(2), "Researcher", "view_dashboard, view_maps");
        let perms: Vec<&str> = role.permission_list().collect();
        assert_eq!(perms, vec!["view_dashboard", "view_maps"]);
    }

    #[test]
    fn test_has_permission() {
        let role = Role::new(RoleId::new(1), "Admin", "manage_users,add_minerals");
        assert!(role.has_permission("manage_users"));
        assert!(!role.has_permission("view_maps"));
    }
}
