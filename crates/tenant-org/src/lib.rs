//! # Tenant Organization Management
//!
//! This crate provides the multi-tenant organization domain model:
//! organizations, teams, and the memberships that bind users to them.
//!
//! ## Overview
//!
//! The tenant-org crate handles:
//! - **Organizations**: Top-level tenant entities with plan and settings
//! - **Teams**: Groups within an organization
//! - **Memberships**: User-organization relationships carrying a role
//! - **Plans**: Subscription plans with member/team limits
//!
//! ## Architecture
//!
//! ```text
//! User
//!   └─ Membership ─→ Organization
//!                       ├─ Settings
//!                       ├─ Plan (limits)
//!                       └─ Teams
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use uuid::Uuid;
//! use tenant_org::{Organization, Team, Membership};
//! use tenant_rbac::OrgRole;
//!
//! // Create an organization
//! let owner_id = Uuid::now_v7();
//! let org = Organization::new("Acme Corp", "acme-corp", owner_id);
//!
//! // Create a team within the org
//! let team = Team::new(org.id, "Platform", owner_id);
//!
//! // Add a member
//! let user_id = Uuid::now_v7();
//! let membership = Membership::new(org.id, user_id, OrgRole::Member);
//! ```
//!
//! Membership lifetimes are owned by the backing data store; these types
//! are per-request snapshots, not cached state.

pub mod membership;
pub mod organization;
pub mod plan;
pub mod settings;
pub mod team;

// Re-export main types for convenience
pub use membership::Membership;
pub use organization::Organization;
pub use plan::{Plan, PlanLimits};
pub use settings::OrganizationSettings;
pub use team::Team;
