//! # Requirements
//!
//! A requirement describes what a protected operation demands of the
//! caller's role. The authorization gate in `tenant-gate` is a single
//! decision function parameterized by a [`Requirement`], rather than a
//! separate middleware per check kind.

use serde::{Deserialize, Serialize};

use crate::permissions::Permission;
use crate::roles::OrgRole;

/// What a protected operation requires of the caller's role.
///
/// Two equivalent modes are supported:
///
/// - **Minimum role**: the caller's role must meet or exceed a rank.
/// - **Permission set**: the caller's role must grant at least one of the
///   listed permissions (logical OR — a route may be reachable via more
///   than one sufficient permission).
///
/// # Examples
///
/// ```
/// use tenant_rbac::{OrgRole, Permission, Requirement};
///
/// let min_admin = Requirement::min_role(OrgRole::Admin);
/// assert!(min_admin.satisfied_by(OrgRole::Owner));
/// assert!(!min_admin.satisfied_by(OrgRole::Member));
///
/// let can_manage = Requirement::any_of([Permission::ManageOrg, Permission::ManageBilling]);
/// assert!(can_manage.satisfied_by(OrgRole::Owner));
/// assert!(!can_manage.satisfied_by(OrgRole::Admin));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    /// Caller must meet or exceed this role rank.
    MinRole(OrgRole),

    /// Caller must hold at least one of these permissions.
    ///
    /// An empty set is never satisfied.
    AnyPermission(Vec<Permission>),
}

impl Requirement {
    /// Require a minimum role level.
    pub fn min_role(role: OrgRole) -> Self {
        Self::MinRole(role)
    }

    /// Require at least one of the given permissions.
    pub fn any_of(permissions: impl IntoIterator<Item = Permission>) -> Self {
        Self::AnyPermission(permissions.into_iter().collect())
    }

    /// Require a single permission.
    pub fn permission(permission: Permission) -> Self {
        Self::AnyPermission(vec![permission])
    }

    /// Evaluate this requirement against a role.
    ///
    /// Pure: depends only on the role and the static permission matrix.
    ///
    /// # Arguments
    ///
    /// * `role` - The caller's resolved role
    ///
    /// # Returns
    ///
    /// `true` if the role satisfies the requirement
    pub fn satisfied_by(&self, role: OrgRole) -> bool {
        match self {
            Self::MinRole(required) => role.meets(*required),
            Self::AnyPermission(permissions) => {
                permissions.iter().any(|p| role.has_permission(*p))
            }
        }
    }
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MinRole(role) => write!(f, "{} role or higher", role),
            Self::AnyPermission(permissions) => {
                let names: Vec<&str> = permissions.iter().map(|p| p.as_str()).collect();
                write!(f, "one of these permissions: {}", names.join(", "))
            }
        }
    }
}
