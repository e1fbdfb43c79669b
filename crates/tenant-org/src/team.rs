//! Team domain models
//!
//! Teams group members within an organization. Team management operations
//! (create, rename, delete) sit behind the `manage_team` permission.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A team within an organization.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use tenant_org::Team;
///
/// let org_id = Uuid::now_v7();
/// let creator = Uuid::now_v7();
/// let team = Team::new(org_id, "Platform", creator);
/// assert_eq!(team.name, "Platform");
/// assert!(team.description.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Unique identifier for the team
    pub id: Uuid,

    /// Organization this team belongs to
    pub organization_id: Uuid,

    /// Human-readable name
    pub name: String,

    /// Optional description
    pub description: Option<String>,

    /// User who created the team
    pub created_by: Uuid,

    /// When the team was created
    pub created_at: DateTime<Utc>,

    /// When the team was last updated
    pub updated_at: DateTime<Utc>,
}

impl Team {
    /// Creates a new team.
    ///
    /// # Arguments
    ///
    /// * `organization_id` - The parent organization
    /// * `name` - Team name
    /// * `created_by` - User who created the team
    pub fn new(organization_id: Uuid, name: impl Into<String>, created_by: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            organization_id,
            name: name.into(),
            description: None,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the team description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Rename the team.
    ///
    /// # Arguments
    ///
    /// * `name` - The new team name
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.updated_at = Utc::now();
    }
}
