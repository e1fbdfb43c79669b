//! # Tenant Gate
//!
//! The authorization gate for multi-tenant backends. Every protected
//! operation passes through a single decision pipeline before any business
//! logic runs:
//!
//! ```text
//! credential ─→ IdentityResolver ─→ MembershipResolver ─→ Requirement check
//!                    │                     │                     │
//!                 401 deny           400/403 deny            403 deny
//! ```
//!
//! On allow, the gate hands the downstream handler an explicit, immutable
//! [`AuthContext`] carrying the resolved identity, membership, and
//! organization. No state survives between invocations: membership is
//! re-resolved on every call, so a revoked membership takes effect on the
//! very next request.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tenant_gate::{AccessGate, Decision, HttpIdentityResolver, RestMembershipResolver};
//! use tenant_gate::config::GateConfig;
//! use tenant_rbac::{Permission, Requirement};
//! use uuid::Uuid;
//!
//! # async fn example(credential: Option<&str>, org_id: Option<Uuid>) {
//! let config = GateConfig::from_env();
//! let gate = AccessGate::new(
//!     HttpIdentityResolver::new(config.auth.clone(), config.timeout()),
//!     RestMembershipResolver::new(config.store.clone(), config.timeout()),
//! );
//!
//! let requirement = Requirement::permission(Permission::ManageTeam);
//! match gate.authorize(credential, org_id, &requirement).await {
//!     Decision::Allowed(ctx) => {
//!         // run the protected handler with ctx.identity / ctx.membership / ctx.organization
//!     }
//!     Decision::Denied(denial) => {
//!         let status = denial.status_code();
//!         let body = denial.body(); // machine-readable JSON error
//!     }
//! }
//! # }
//! ```
//!
//! ## Collaborators
//!
//! The gate consumes two external collaborators through traits:
//! [`IdentityResolver`] (the auth provider) and [`MembershipResolver`]
//! (the membership data store). HTTP-backed defaults for a managed
//! GoTrue/PostgREST-style backend live in [`http`]; any other backend can
//! plug in by implementing the traits.

pub mod config;
pub mod error;
pub mod gate;
pub mod http;
pub mod identity;
pub mod resolve;

// Re-export main types for convenience
pub use config::{Endpoint, GateConfig};
pub use error::{Denial, DenialBody, ResolverError};
pub use gate::{ensure_can_remove_member, AccessGate, AuthContext, Decision};
pub use http::{HttpIdentityResolver, RestMembershipResolver};
pub use identity::{Identity, IdentityResolver};
pub use resolve::{MembershipResolver, MembershipSnapshot};
