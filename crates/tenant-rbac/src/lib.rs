//! # Tenant RBAC (Role-Based Access Control)
//!
//! This crate provides the role and permission model for multi-tenant
//! B2B SaaS backends. It is pure: no I/O, no clocks, no external state.
//!
//! ## Overview
//!
//! The tenant-rbac crate handles:
//! - **Roles**: The ordered organization role hierarchy
//! - **Permissions**: The closed set of atomic capabilities
//! - **Role → Permission matrix**: Which capabilities each role grants
//! - **Requirements**: Descriptors for what an operation demands
//!
//! ## Role Hierarchy
//!
//! Roles are totally ordered by rank:
//!
//! ```text
//! Viewer (1) < Member (2) < Admin (3) < Owner (4)
//! ```
//!
//! Each role's permission set is a superset of every lower role's set,
//! so a minimum-role check and a permission check never disagree about
//! the relative standing of two roles.
//!
//! ## Usage
//!
//! ```rust
//! use tenant_rbac::{OrgRole, Permission, Requirement};
//!
//! // Hierarchy checks
//! assert!(OrgRole::Owner.meets(OrgRole::Admin));
//! assert!(!OrgRole::Member.meets(OrgRole::Admin));
//!
//! // Permission checks
//! assert!(OrgRole::Admin.has_permission(Permission::ManageTeam));
//! assert!(!OrgRole::Viewer.has_permission(Permission::Write));
//!
//! // Requirement descriptors (consumed by the authorization gate)
//! let requirement = Requirement::any_of([Permission::ManageOrg, Permission::ManageBilling]);
//! assert!(requirement.satisfied_by(OrgRole::Owner));
//! assert!(!requirement.satisfied_by(OrgRole::Admin));
//! ```
//!
//! ## Integration
//!
//! This crate is consumed by:
//! - `tenant-org`: Memberships carry an [`OrgRole`]
//! - `tenant-gate`: The authorization gate evaluates a [`Requirement`]
//!   against a resolved membership's role

pub mod permissions;
pub mod requirement;
pub mod roles;

// Re-export main types for convenience
pub use permissions::Permission;
pub use requirement::Requirement;
pub use roles::OrgRole;
