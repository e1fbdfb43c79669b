//! Membership resolution
//!
//! The membership resolver fetches the caller's membership row for a target
//! organization from the external data store. The gate issues one lookup per
//! authorized request — no caching, so a revoked or downgraded membership is
//! visible on the very next call.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tenant_org::{Membership, Organization};

use crate::error::ResolverError;

/// A membership row together with its denormalized organization.
///
/// This is the read the gate consumes: the original query joins the
/// organization onto the membership so the downstream handler gets both
/// without a second round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipSnapshot {
    /// The caller's membership in the target organization
    pub membership: Membership,

    /// The organization's attributes at read time
    pub organization: Organization,
}

/// Looks up membership records in the external data store.
///
/// # Contract
///
/// - `Ok(Some(snapshot))` — a membership row exists for (user, org).
/// - `Ok(None)` — no row exists, or the organization id is unknown.
/// - `Err(_)` — the query itself failed (transport error, upstream error
///   status). This is distinct from not-found: the gate denies either way,
///   but a failure is logged with full context and surfaced as a service
///   error rather than "not a member".
///
/// Reads are last-write-wins snapshots; no retries happen at this layer.
#[async_trait]
pub trait MembershipResolver: Send + Sync {
    /// Fetch the membership of `user_id` in `org_id`.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The resolved caller identity's ID
    /// * `org_id` - The target organization ID
    async fn find_membership(
        &self,
        user_id: Uuid,
        org_id: Uuid,
    ) -> Result<Option<MembershipSnapshot>, ResolverError>;
}
