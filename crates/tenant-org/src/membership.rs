//! Membership domain models
//!
//! A membership binds a user to an organization with a role. It is created
//! when a member is added, mutated only by role updates, and destroyed when
//! the member is removed. The backing data store owns the lifetime; values
//! of this type are per-request snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tenant_rbac::OrgRole;

/// Organization membership linking a user to an organization.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use tenant_org::Membership;
/// use tenant_rbac::OrgRole;
///
/// let org_id = Uuid::now_v7();
/// let user_id = Uuid::now_v7();
/// let membership = Membership::new(org_id, user_id, OrgRole::Member);
/// assert_eq!(membership.role, OrgRole::Member);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Membership {
    /// Unique membership ID
    pub id: Uuid,

    /// Organization ID
    pub organization_id: Uuid,

    /// User ID
    pub user_id: Uuid,

    /// Role within the organization
    pub role: OrgRole,

    /// When the user joined
    pub joined_at: DateTime<Utc>,

    /// Who invited this user (if applicable)
    pub invited_by: Option<Uuid>,
}

impl Membership {
    /// Creates a new organization membership.
    ///
    /// The membership is created with:
    /// - A newly generated UUID v7 ID
    /// - Current timestamp for joined_at
    ///
    /// # Arguments
    ///
    /// * `organization_id` - The organization ID
    /// * `user_id` - The user ID
    /// * `role` - The user's role in the organization
    ///
    /// # Examples
    ///
    /// ```
    /// use uuid::Uuid;
    /// use tenant_org::Membership;
    /// use tenant_rbac::OrgRole;
    ///
    /// let membership = Membership::new(Uuid::now_v7(), Uuid::now_v7(), OrgRole::Viewer);
    /// ```
    pub fn new(organization_id: Uuid, user_id: Uuid, role: OrgRole) -> Self {
        Self {
            id: Uuid::now_v7(),
            organization_id,
            user_id,
            role,
            joined_at: Utc::now(),
            invited_by: None,
        }
    }

    /// Set who invited this user.
    ///
    /// # Arguments
    ///
    /// * `inviter_id` - The user ID of who invited this user
    pub fn with_inviter(mut self, inviter_id: Uuid) -> Self {
        self.invited_by = Some(inviter_id);
        self
    }

    /// Update the member's role.
    ///
    /// Role updates are the only mutation a membership supports.
    ///
    /// # Arguments
    ///
    /// * `role` - The new role
    pub fn set_role(&mut self, role: OrgRole) {
        self.role = role;
    }
}
