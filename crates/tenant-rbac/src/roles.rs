//! Organization role hierarchy
//!
//! This module defines the ordered role hierarchy used for minimum-role
//! checks throughout the platform.

use serde::{Deserialize, Serialize};

/// User role within an organization.
///
/// Roles are hierarchical, with each role inheriting the permissions of lower
/// roles. The hierarchy is: Viewer < Member < Admin < Owner
///
/// # Permission Model
///
/// - **Viewer**: Read-only access to organization data
/// - **Member**: Can view and create resources within their teams
/// - **Admin**: Can manage teams and members, full access except billing
/// - **Owner**: Full access to all organization features and settings
///
/// # Examples
///
/// ```
/// use tenant_rbac::OrgRole;
///
/// let role = OrgRole::Admin;
/// assert!(role.meets(OrgRole::Member));
/// assert!(!role.meets(OrgRole::Owner));
/// assert_eq!(role.rank(), 3);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OrgRole {
    /// Read-only access to organization data
    Viewer = 1,

    /// Can view and create resources
    Member = 2,

    /// Can manage teams and members
    Admin = 3,

    /// Full organization control
    Owner = 4,
}

impl OrgRole {
    /// Get the integer rank of this role.
    ///
    /// Ranks define a total order over roles used for minimum-level checks.
    /// Higher rank means more privileges.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenant_rbac::OrgRole;
    ///
    /// assert_eq!(OrgRole::Viewer.rank(), 1);
    /// assert_eq!(OrgRole::Owner.rank(), 4);
    /// ```
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Check if this role meets or exceeds a required role level.
    ///
    /// # Arguments
    ///
    /// * `required` - The minimum required role
    ///
    /// # Returns
    ///
    /// `true` if this role's rank is greater than or equal to the
    /// required role's rank
    ///
    /// # Examples
    ///
    /// ```
    /// use tenant_rbac::OrgRole;
    ///
    /// assert!(OrgRole::Owner.meets(OrgRole::Admin));
    /// assert!(OrgRole::Admin.meets(OrgRole::Admin));
    /// assert!(!OrgRole::Member.meets(OrgRole::Admin));
    /// ```
    pub fn meets(&self, required: OrgRole) -> bool {
        *self >= required
    }

    /// Parse a role from its string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(OrgRole)` if valid, `None` otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use tenant_rbac::OrgRole;
    ///
    /// assert_eq!(OrgRole::parse("admin"), Some(OrgRole::Admin));
    /// assert_eq!(OrgRole::parse("VIEWER"), Some(OrgRole::Viewer));
    /// assert_eq!(OrgRole::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "viewer" => Some(Self::Viewer),
            "member" => Some(Self::Member),
            "admin" => Some(Self::Admin),
            "owner" => Some(Self::Owner),
            _ => None,
        }
    }

    /// Get string representation of the role.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenant_rbac::OrgRole;
    ///
    /// assert_eq!(OrgRole::Admin.as_str(), "admin");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Viewer => "viewer",
            Self::Member => "member",
            Self::Admin => "admin",
            Self::Owner => "owner",
        }
    }

    /// Get a human-readable display name for the role.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Viewer => "Viewer",
            Self::Member => "Member",
            Self::Admin => "Admin",
            Self::Owner => "Owner",
        }
    }

    /// Get a description of the role for UI display.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Viewer => "Can view organization data but cannot make changes",
            Self::Member => "Can view and create resources within their teams",
            Self::Admin => "Can manage teams and members, full access except billing",
            Self::Owner => "Full access to all organization features and settings",
        }
    }

    /// All roles, lowest rank first.
    pub fn all() -> &'static [OrgRole] {
        &[Self::Viewer, Self::Member, Self::Admin, Self::Owner]
    }
}

impl Default for OrgRole {
    fn default() -> Self {
        Self::Viewer
    }
}

impl std::fmt::Display for OrgRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
