//! Organization domain models
//!
//! This module provides the core Organization entity. Organizations are the
//! top-level tenant entities that contain teams and members. The
//! authorization core references organizations; it does not own them — the
//! backing data store does.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::plan::Plan;
use crate::settings::OrganizationSettings;

/// An organization represents a tenant in the multi-tenant system.
///
/// Users can belong to multiple organizations with different roles.
/// Each organization has its own settings, members, teams, and plan.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use tenant_org::{Organization, Plan};
///
/// let owner_id = Uuid::now_v7();
/// let org = Organization::new("Acme Corp", "acme-corp", owner_id);
/// assert_eq!(org.name, "Acme Corp");
/// assert_eq!(org.plan, Plan::Free);
/// assert!(org.is_active);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    /// Unique identifier for the organization
    pub id: Uuid,

    /// Human-readable name
    pub name: String,

    /// URL-friendly slug (unique across the platform)
    pub slug: String,

    /// Subscription plan for limit gating
    pub plan: Plan,

    /// Owner user ID (the user who created the org)
    pub owner_id: Uuid,

    /// Whether the organization is active
    pub is_active: bool,

    /// When the organization was created
    pub created_at: DateTime<Utc>,

    /// When the organization was last updated
    pub updated_at: DateTime<Utc>,

    /// Organization-level settings
    #[serde(default)]
    pub settings: OrganizationSettings,

    /// Custom metadata for extensibility
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Organization {
    /// Creates a new organization with default settings.
    ///
    /// The organization is created with:
    /// - A newly generated UUID v7 ID
    /// - The Free plan
    /// - Active status
    /// - Current timestamp for created_at and updated_at
    ///
    /// # Arguments
    ///
    /// * `name` - The organization name
    /// * `slug` - URL-friendly slug (must be unique)
    /// * `owner_id` - The user ID who owns this organization
    ///
    /// # Examples
    ///
    /// ```
    /// use uuid::Uuid;
    /// use tenant_org::Organization;
    ///
    /// let owner_id = Uuid::now_v7();
    /// let org = Organization::new("Acme Corp", "acme-corp", owner_id);
    /// ```
    pub fn new(name: impl Into<String>, slug: impl Into<String>, owner_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            slug: slug.into(),
            plan: Plan::Free,
            owner_id,
            is_active: true,
            created_at: now,
            updated_at: now,
            settings: OrganizationSettings::default(),
            metadata: HashMap::new(),
        }
    }

    /// Get the maximum number of members allowed on this plan.
    ///
    /// # Returns
    ///
    /// Maximum member count, with `u32::MAX` representing unlimited
    pub fn max_members(&self) -> u32 {
        self.plan.limits().max_members.unwrap_or(u32::MAX)
    }

    /// Get the maximum number of teams allowed on this plan.
    ///
    /// # Returns
    ///
    /// Maximum team count, with `u32::MAX` representing unlimited
    pub fn max_teams(&self) -> u32 {
        self.plan.limits().max_teams.unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_organization_creation() {
        let owner_id = Uuid::now_v7();
        let org = Organization::new("Acme Corp", "acme-corp", owner_id);

        assert_eq!(org.name, "Acme Corp");
        assert_eq!(org.slug, "acme-corp");
        assert_eq!(org.owner_id, owner_id);
        assert!(org.is_active);
        assert_eq!(org.plan, Plan::Free);
    }

    #[test]
    fn test_limits_by_plan() {
        let owner_id = Uuid::now_v7();
        let mut org = Organization::new("Test", "test", owner_id);

        org.plan = Plan::Free;
        assert_eq!(org.max_members(), 5);

        org.plan = Plan::Pro;
        assert_eq!(org.max_teams(), 25);

        org.plan = Plan::Enterprise;
        assert_eq!(org.max_members(), u32::MAX);
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let json = format!(
            r#"{{
                "id": "{}",
                "name": "Acme",
                "slug": "acme",
                "plan": "pro",
                "owner_id": "{}",
                "is_active": true,
                "created_at": "2026-01-01T00:00:00Z",
                "updated_at": "2026-01-01T00:00:00Z"
            }}"#,
            Uuid::now_v7(),
            Uuid::now_v7()
        );
        let org: Organization = serde_json::from_str(&json).unwrap();
        assert_eq!(org.plan, Plan::Pro);
        assert!(org.metadata.is_empty());
    }
}
