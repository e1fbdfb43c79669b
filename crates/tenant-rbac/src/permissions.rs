//! # Permissions
//!
//! The closed set of atomic capabilities and the static role → permission
//! matrix. The matrix follows the principle of least privilege and is
//! monotone in role rank: each role grants a superset of every lower
//! role's permissions.

use serde::{Deserialize, Serialize};

use crate::roles::OrgRole;

/// An atomic capability gating one class of operation.
///
/// # Examples
///
/// ```
/// use tenant_rbac::Permission;
///
/// let perm = Permission::ManageTeam;
/// assert_eq!(perm.as_str(), "manage_team");
/// assert_eq!(Permission::parse("manage_team"), Some(Permission::ManageTeam));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// View organization data and resources
    Read,

    /// Create and edit resources
    Write,

    /// Delete resources
    Delete,

    /// Manage teams and team members
    ManageTeam,

    /// Access and modify billing settings
    ManageBilling,

    /// Modify organization settings and structure
    ManageOrg,

    /// Invite new members to the organization
    InviteMembers,

    /// Remove members from the organization
    RemoveMembers,
}

impl Permission {
    /// Parse a permission from its string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(Permission)` if valid, `None` otherwise
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "read" => Some(Self::Read),
            "write" => Some(Self::Write),
            "delete" => Some(Self::Delete),
            "manage_team" => Some(Self::ManageTeam),
            "manage_billing" => Some(Self::ManageBilling),
            "manage_org" => Some(Self::ManageOrg),
            "invite_members" => Some(Self::InviteMembers),
            "remove_members" => Some(Self::RemoveMembers),
            _ => None,
        }
    }

    /// Get string representation of the permission.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::Delete => "delete",
            Self::ManageTeam => "manage_team",
            Self::ManageBilling => "manage_billing",
            Self::ManageOrg => "manage_org",
            Self::InviteMembers => "invite_members",
            Self::RemoveMembers => "remove_members",
        }
    }

    /// Get a description of the permission for UI display.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Read => "View organization data and resources",
            Self::Write => "Create and edit resources",
            Self::Delete => "Delete resources",
            Self::ManageTeam => "Manage teams and team members",
            Self::ManageBilling => "Access and modify billing settings",
            Self::ManageOrg => "Modify organization settings and structure",
            Self::InviteMembers => "Invite new members to the organization",
            Self::RemoveMembers => "Remove members from the organization",
        }
    }

    /// All permissions in the closed set.
    pub fn all() -> &'static [Permission] {
        &[
            Self::Read,
            Self::Write,
            Self::Delete,
            Self::ManageTeam,
            Self::ManageBilling,
            Self::ManageOrg,
            Self::InviteMembers,
            Self::RemoveMembers,
        ]
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const VIEWER_PERMISSIONS: &[Permission] = &[Permission::Read];

const MEMBER_PERMISSIONS: &[Permission] = &[Permission::Read, Permission::Write];

const ADMIN_PERMISSIONS: &[Permission] = &[
    Permission::Read,
    Permission::Write,
    Permission::Delete,
    Permission::ManageTeam,
    Permission::InviteMembers,
    Permission::RemoveMembers,
];

const OWNER_PERMISSIONS: &[Permission] = &[
    Permission::Read,
    Permission::Write,
    Permission::Delete,
    Permission::ManageTeam,
    Permission::ManageBilling,
    Permission::ManageOrg,
    Permission::InviteMembers,
    Permission::RemoveMembers,
];

impl OrgRole {
    /// Get all permissions granted by this role.
    ///
    /// The returned set is a superset of every lower-ranked role's set.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenant_rbac::{OrgRole, Permission};
    ///
    /// assert_eq!(OrgRole::Viewer.permissions(), &[Permission::Read]);
    /// assert_eq!(OrgRole::Owner.permissions().len(), 8);
    /// ```
    pub fn permissions(&self) -> &'static [Permission] {
        match self {
            Self::Viewer => VIEWER_PERMISSIONS,
            Self::Member => MEMBER_PERMISSIONS,
            Self::Admin => ADMIN_PERMISSIONS,
            Self::Owner => OWNER_PERMISSIONS,
        }
    }

    /// Check if this role grants a specific permission.
    ///
    /// # Arguments
    ///
    /// * `permission` - The permission to check
    ///
    /// # Examples
    ///
    /// ```
    /// use tenant_rbac::{OrgRole, Permission};
    ///
    /// assert!(OrgRole::Admin.has_permission(Permission::ManageTeam));
    /// assert!(!OrgRole::Member.has_permission(Permission::ManageTeam));
    /// ```
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_parse() {
        assert_eq!(Permission::parse("read"), Some(Permission::Read));
        assert_eq!(Permission::parse("MANAGE_TEAM"), Some(Permission::ManageTeam));
        assert_eq!(Permission::parse("invalid"), None);
    }

    #[test]
    fn test_parse_round_trips() {
        for perm in Permission::all() {
            assert_eq!(Permission::parse(perm.as_str()), Some(*perm));
        }
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Permission::InviteMembers).unwrap();
        assert_eq!(json, "\"invite_members\"");
    }

    #[test]
    fn test_viewer_is_read_only() {
        for perm in Permission::all() {
            assert_eq!(
                OrgRole::Viewer.has_permission(*perm),
                *perm == Permission::Read
            );
        }
    }

    #[test]
    fn test_owner_has_every_permission() {
        for perm in Permission::all() {
            assert!(OrgRole::Owner.has_permission(*perm));
        }
    }

    #[test]
    fn test_admin_cannot_touch_billing_or_org() {
        assert!(!OrgRole::Admin.has_permission(Permission::ManageBilling));
        assert!(!OrgRole::Admin.has_permission(Permission::ManageOrg));
        assert!(OrgRole::Admin.has_permission(Permission::RemoveMembers));
    }

    #[test]
    fn test_matrix_is_monotone_in_rank() {
        // Every role's set contains every lower-ranked role's set.
        let roles = OrgRole::all();
        for (i, higher) in roles.iter().enumerate() {
            for lower in &roles[..i] {
                for perm in lower.permissions() {
                    assert!(
                        higher.has_permission(*perm),
                        "{higher} is missing {perm} granted to {lower}"
                    );
                }
            }
        }
    }
}
