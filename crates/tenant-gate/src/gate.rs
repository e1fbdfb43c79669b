//! The authorization gate
//!
//! Single entry point composing identity resolution, membership resolution,
//! and the role/permission model into one decision. The gate holds no state
//! across invocations and caches nothing: every call re-resolves membership,
//! so the staleness window is zero at the cost of one external lookup per
//! authorized request.

use tracing::{debug, error, instrument, warn};
use uuid::Uuid;

use tenant_org::{Membership, Organization};
use tenant_rbac::Requirement;

use crate::error::Denial;
use crate::identity::{Identity, IdentityResolver};
use crate::resolve::MembershipResolver;

/// Request-scoped authorization context handed to the downstream handler.
///
/// Returned by value on allow and threaded explicitly into the handler —
/// nothing is attached to a shared request object.
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// The resolved caller identity
    pub identity: Identity,

    /// The caller's membership in the target organization
    pub membership: Membership,

    /// The target organization's attributes at resolution time
    pub organization: Organization,
}

/// The outcome of an authorization check.
///
/// The gate never returns `Err` past its own boundary; failures of every
/// kind are folded into `Denied` with a reason the route layer can render.
#[derive(Debug)]
pub enum Decision {
    /// All checks passed; the handler may run with this context.
    Allowed(Box<AuthContext>),

    /// A check failed; the request must not reach the handler.
    Denied(Denial),
}

impl Decision {
    /// Check whether the decision is an allow.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed(_))
    }

    /// Get the authorization context, if allowed.
    pub fn context(&self) -> Option<&AuthContext> {
        match self {
            Decision::Allowed(ctx) => Some(ctx),
            Decision::Denied(_) => None,
        }
    }

    /// Convert into a `Result` for `?`-style handling in route layers.
    pub fn into_result(self) -> Result<AuthContext, Denial> {
        match self {
            Decision::Allowed(ctx) => Ok(*ctx),
            Decision::Denied(denial) => Err(denial),
        }
    }
}

/// The composed authorization decision function.
///
/// Wraps the two external collaborators and evaluates a [`Requirement`]
/// against the caller's resolved role. Construct one per service and share
/// it freely: it is `Send + Sync` and holds only the resolvers.
///
/// # Pipeline
///
/// 1. Resolve identity — absent → 401 `Unauthenticated`
/// 2. Require an organization id — absent → 400 `MissingOrgId`
/// 3. Resolve membership — absent → 403 `NotAMember`;
///    resolver failure → 500 `ResolverFailure` (logged with full context)
/// 4. Evaluate the requirement — unsatisfied → 403 with the caller's
///    actual role and the unmet requirement
/// 5. Allow, with an [`AuthContext`] for the handler
pub struct AccessGate<I, M> {
    identities: I,
    memberships: M,
}

impl<I, M> AccessGate<I, M>
where
    I: IdentityResolver,
    M: MembershipResolver,
{
    /// Create a gate over the given resolvers.
    pub fn new(identities: I, memberships: M) -> Self {
        Self {
            identities,
            memberships,
        }
    }

    /// Authorize a request against a requirement.
    ///
    /// # Arguments
    ///
    /// * `credential` - Opaque credential from the request, if any
    /// * `org_id` - Target organization from the routing context, if any
    /// * `requirement` - What the protected operation demands
    ///
    /// # Returns
    ///
    /// A [`Decision`]; never an error. Two consecutive calls with no
    /// membership mutation in between yield identical outcomes.
    #[instrument(skip(self, credential))]
    pub async fn authorize(
        &self,
        credential: Option<&str>,
        org_id: Option<Uuid>,
        requirement: &Requirement,
    ) -> Decision {
        let Some(identity) = self.resolve_identity(credential).await else {
            return Decision::Denied(Denial::Unauthenticated);
        };

        let Some(org_id) = org_id else {
            debug!(user_id = %identity.id, "request carried no organization id");
            return Decision::Denied(Denial::MissingOrgId);
        };

        let snapshot = match self.memberships.find_membership(identity.id, org_id).await {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => {
                debug!(user_id = %identity.id, %org_id, "no membership found");
                return Decision::Denied(Denial::NotAMember { org_id });
            }
            Err(err) => {
                error!(
                    user_id = %identity.id,
                    %org_id,
                    error = %err,
                    "membership lookup failed"
                );
                return Decision::Denied(Denial::ResolverFailure);
            }
        };

        let role = snapshot.membership.role;
        if !requirement.satisfied_by(role) {
            debug!(user_id = %identity.id, %org_id, user_role = %role, %requirement, "requirement not met");
            return Decision::Denied(match requirement {
                Requirement::MinRole(required_role) => Denial::InsufficientRole {
                    user_role: role,
                    required_role: *required_role,
                },
                Requirement::AnyPermission(required) => Denial::MissingPermission {
                    user_role: role,
                    required: required.clone(),
                },
            });
        }

        debug!(user_id = %identity.id, %org_id, user_role = %role, "authorized");
        Decision::Allowed(Box::new(AuthContext {
            identity,
            membership: snapshot.membership,
            organization: snapshot.organization,
        }))
    }

    /// Resolve a context without requiring anything.
    ///
    /// For routes that allow anonymous access but want caller info when
    /// present. Returns `None` when the caller is unauthenticated, no
    /// organization id is given, or no membership exists — never a denial.
    pub async fn authorize_optional(
        &self,
        credential: Option<&str>,
        org_id: Option<Uuid>,
    ) -> Option<AuthContext> {
        let identity = self.resolve_identity(credential).await?;
        let org_id = org_id?;
        match self.memberships.find_membership(identity.id, org_id).await {
            Ok(Some(snapshot)) => Some(AuthContext {
                identity,
                membership: snapshot.membership,
                organization: snapshot.organization,
            }),
            Ok(None) => None,
            Err(err) => {
                warn!(user_id = %identity.id, %org_id, error = %err, "optional membership lookup failed");
                None
            }
        }
    }

    /// Resolve the caller identity, collapsing provider failures.
    ///
    /// A provider outage is logged at warn so it stays distinguishable from
    /// an ordinary bad token, but both read as "unauthenticated" to callers.
    async fn resolve_identity(&self, credential: Option<&str>) -> Option<Identity> {
        let credential = credential?;
        match self.identities.verify(credential).await {
            Ok(identity) => identity,
            Err(err) => {
                warn!(error = %err, "identity verification failed");
                None
            }
        }
    }
}

/// Guard the "remove member" operation against self-removal.
///
/// An owner or admin may hold `remove_members` and still not remove
/// themselves through this path. This business invariant is layered on top
/// of the generic gate: call it after [`AccessGate::authorize`] allows.
///
/// # Arguments
///
/// * `ctx` - The authorization context of the caller
/// * `target_user_id` - The member being removed
///
/// # Errors
///
/// [`Denial::CannotRemoveSelf`] when the target is the caller.
pub fn ensure_can_remove_member(ctx: &AuthContext, target_user_id: Uuid) -> Result<(), Denial> {
    if target_user_id == ctx.identity.id {
        return Err(Denial::CannotRemoveSelf);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use async_trait::async_trait;
    use tenant_rbac::{OrgRole, Permission};

    use crate::error::ResolverError;
    use crate::resolve::MembershipSnapshot;

    /// Identity resolver returning a fixed outcome.
    enum StubIdentities {
        Known(Identity),
        Unknown,
        Failing,
    }

    #[async_trait]
    impl IdentityResolver for StubIdentities {
        async fn verify(&self, _credential: &str) -> Result<Option<Identity>, ResolverError> {
            match self {
                StubIdentities::Known(identity) => Ok(Some(identity.clone())),
                StubIdentities::Unknown => Ok(None),
                StubIdentities::Failing => Err(ResolverError::InvalidResponse(
                    "provider outage".to_string(),
                )),
            }
        }
    }

    /// Membership resolver backed by a single mutable row, so tests can
    /// mutate the role between gate calls the way an external store would.
    struct StubMemberships {
        row: Mutex<Option<MembershipSnapshot>>,
    }

    impl StubMemberships {
        fn with_role(org: &Organization, user_id: Uuid, role: OrgRole) -> Self {
            Self {
                row: Mutex::new(Some(MembershipSnapshot {
                    membership: Membership::new(org.id, user_id, role),
                    organization: org.clone(),
                })),
            }
        }

        fn empty() -> Self {
            Self {
                row: Mutex::new(None),
            }
        }

        fn set_role(&self, role: OrgRole) {
            let mut row = self.row.lock().unwrap();
            if let Some(snapshot) = row.as_mut() {
                snapshot.membership.set_role(role);
            }
        }

        fn revoke(&self) {
            *self.row.lock().unwrap() = None;
        }
    }

    #[async_trait]
    impl MembershipResolver for StubMemberships {
        async fn find_membership(
            &self,
            user_id: Uuid,
            org_id: Uuid,
        ) -> Result<Option<MembershipSnapshot>, ResolverError> {
            Ok(self
                .row
                .lock()
                .unwrap()
                .clone()
                .filter(|s| s.membership.user_id == user_id && s.membership.organization_id == org_id))
        }
    }

    /// Membership resolver that always fails at the transport level.
    struct FailingMemberships;

    #[async_trait]
    impl MembershipResolver for FailingMemberships {
        async fn find_membership(
            &self,
            _user_id: Uuid,
            _org_id: Uuid,
        ) -> Result<Option<MembershipSnapshot>, ResolverError> {
            Err(ResolverError::UpstreamStatus {
                status: 503,
                message: "store unavailable".to_string(),
            })
        }
    }

    fn test_identity() -> Identity {
        Identity::new(Uuid::now_v7(), "caller@example.com")
    }

    fn test_org() -> Organization {
        Organization::new("Acme Corp", "acme-corp", Uuid::now_v7())
    }

    #[tokio::test]
    async fn test_missing_credential_denies_unauthenticated() {
        let org = test_org();
        let identity = test_identity();
        let gate = AccessGate::new(
            StubIdentities::Known(identity.clone()),
            StubMemberships::with_role(&org, identity.id, OrgRole::Owner),
        );

        // Regardless of how permissive the requirement is.
        let decision = gate
            .authorize(None, Some(org.id), &Requirement::permission(Permission::Read))
            .await;
        assert_eq!(decision.into_result().unwrap_err(), Denial::Unauthenticated);
    }

    #[tokio::test]
    async fn test_invalid_credential_denies_unauthenticated() {
        let org = test_org();
        let gate = AccessGate::new(StubIdentities::Unknown, StubMemberships::empty());

        let decision = gate
            .authorize(
                Some("expired-token"),
                Some(org.id),
                &Requirement::min_role(OrgRole::Viewer),
            )
            .await;
        assert_eq!(decision.into_result().unwrap_err(), Denial::Unauthenticated);
    }

    #[tokio::test]
    async fn test_provider_outage_collapses_to_unauthenticated() {
        let org = test_org();
        let gate = AccessGate::new(StubIdentities::Failing, StubMemberships::empty());

        let decision = gate
            .authorize(
                Some("token"),
                Some(org.id),
                &Requirement::min_role(OrgRole::Viewer),
            )
            .await;
        assert_eq!(decision.into_result().unwrap_err(), Denial::Unauthenticated);
    }

    #[tokio::test]
    async fn test_missing_org_id_denies_bad_request() {
        let identity = test_identity();
        let gate = AccessGate::new(
            StubIdentities::Known(identity),
            StubMemberships::empty(),
        );

        let decision = gate
            .authorize(Some("token"), None, &Requirement::min_role(OrgRole::Viewer))
            .await;
        let denial = decision.into_result().unwrap_err();
        assert_eq!(denial, Denial::MissingOrgId);
        assert_eq!(denial.status_code(), 400);
    }

    #[tokio::test]
    async fn test_no_membership_denies_not_a_member() {
        let org = test_org();
        let identity = test_identity();
        let gate = AccessGate::new(
            StubIdentities::Known(identity),
            StubMemberships::empty(),
        );

        let decision = gate
            .authorize(
                Some("token"),
                Some(org.id),
                &Requirement::min_role(OrgRole::Viewer),
            )
            .await;
        assert_eq!(
            decision.into_result().unwrap_err(),
            Denial::NotAMember { org_id: org.id }
        );
    }

    #[tokio::test]
    async fn test_viewer_allowed_read_permission() {
        let org = test_org();
        let identity = test_identity();
        let gate = AccessGate::new(
            StubIdentities::Known(identity.clone()),
            StubMemberships::with_role(&org, identity.id, OrgRole::Viewer),
        );

        let decision = gate
            .authorize(
                Some("token"),
                Some(org.id),
                &Requirement::permission(Permission::Read),
            )
            .await;
        let ctx = decision.into_result().unwrap();
        assert_eq!(ctx.identity, identity);
        assert_eq!(ctx.membership.role, OrgRole::Viewer);
        assert_eq!(ctx.organization.id, org.id);
    }

    #[tokio::test]
    async fn test_viewer_denied_manage_team_with_actual_role() {
        let org = test_org();
        let identity = test_identity();
        let gate = AccessGate::new(
            StubIdentities::Known(identity.clone()),
            StubMemberships::with_role(&org, identity.id, OrgRole::Viewer),
        );

        let decision = gate
            .authorize(
                Some("token"),
                Some(org.id),
                &Requirement::permission(Permission::ManageTeam),
            )
            .await;
        let denial = decision.into_result().unwrap_err();
        assert_eq!(
            denial,
            Denial::MissingPermission {
                user_role: OrgRole::Viewer,
                required: vec![Permission::ManageTeam],
            }
        );
        // HTTP-facing contract: the body names the caller's actual role.
        let json = serde_json::to_string(&denial.body()).unwrap();
        assert!(json.contains("\"user_role\":\"viewer\""));
    }

    #[tokio::test]
    async fn test_min_role_denied_with_requirement() {
        let org = test_org();
        let identity = test_identity();
        let gate = AccessGate::new(
            StubIdentities::Known(identity.clone()),
            StubMemberships::with_role(&org, identity.id, OrgRole::Member),
        );

        let decision = gate
            .authorize(
                Some("token"),
                Some(org.id),
                &Requirement::min_role(OrgRole::Admin),
            )
            .await;
        assert_eq!(
            decision.into_result().unwrap_err(),
            Denial::InsufficientRole {
                user_role: OrgRole::Member,
                required_role: OrgRole::Admin,
            }
        );
    }

    #[tokio::test]
    async fn test_membership_resolver_failure_denies_service_error() {
        let org = test_org();
        let identity = test_identity();
        let gate = AccessGate::new(StubIdentities::Known(identity), FailingMemberships);

        let decision = gate
            .authorize(
                Some("token"),
                Some(org.id),
                &Requirement::min_role(OrgRole::Viewer),
            )
            .await;
        let denial = decision.into_result().unwrap_err();
        assert_eq!(denial, Denial::ResolverFailure);
        assert_eq!(denial.status_code(), 500);
        // Upstream detail must not leak into the body.
        assert!(!denial.body().error.contains("unavailable"));
    }

    #[tokio::test]
    async fn test_repeated_checks_are_idempotent() {
        let org = test_org();
        let identity = test_identity();
        let gate = AccessGate::new(
            StubIdentities::Known(identity.clone()),
            StubMemberships::with_role(&org, identity.id, OrgRole::Admin),
        );
        let requirement = Requirement::min_role(OrgRole::Admin);

        let first = gate
            .authorize(Some("token"), Some(org.id), &requirement)
            .await;
        let second = gate
            .authorize(Some("token"), Some(org.id), &requirement)
            .await;
        assert!(first.is_allowed());
        assert!(second.is_allowed());
    }

    #[tokio::test]
    async fn test_role_downgrade_takes_effect_immediately() {
        let org = test_org();
        let identity = test_identity();
        let memberships = StubMemberships::with_role(&org, identity.id, OrgRole::Admin);
        let gate = AccessGate::new(StubIdentities::Known(identity.clone()), memberships);
        let requirement = Requirement::min_role(OrgRole::Admin);

        let before = gate
            .authorize(Some("token"), Some(org.id), &requirement)
            .await;
        assert!(before.is_allowed());

        // Downgrade externally; the very next evaluation must see it.
        gate.memberships.set_role(OrgRole::Member);
        let after = gate
            .authorize(Some("token"), Some(org.id), &requirement)
            .await;
        assert_eq!(
            after.into_result().unwrap_err(),
            Denial::InsufficientRole {
                user_role: OrgRole::Member,
                required_role: OrgRole::Admin,
            }
        );
    }

    #[tokio::test]
    async fn test_revoked_membership_takes_effect_immediately() {
        let org = test_org();
        let identity = test_identity();
        let memberships = StubMemberships::with_role(&org, identity.id, OrgRole::Owner);
        let gate = AccessGate::new(StubIdentities::Known(identity), memberships);
        let requirement = Requirement::permission(Permission::Read);

        assert!(gate
            .authorize(Some("token"), Some(org.id), &requirement)
            .await
            .is_allowed());

        gate.memberships.revoke();
        let decision = gate
            .authorize(Some("token"), Some(org.id), &requirement)
            .await;
        assert_eq!(
            decision.into_result().unwrap_err(),
            Denial::NotAMember { org_id: org.id }
        );
    }

    #[tokio::test]
    async fn test_optional_auth_yields_context_for_members_only() {
        let org = test_org();
        let identity = test_identity();
        let gate = AccessGate::new(
            StubIdentities::Known(identity.clone()),
            StubMemberships::with_role(&org, identity.id, OrgRole::Viewer),
        );

        let ctx = gate.authorize_optional(Some("token"), Some(org.id)).await;
        assert!(ctx.is_some());

        assert!(gate.authorize_optional(None, Some(org.id)).await.is_none());
        assert!(gate.authorize_optional(Some("token"), None).await.is_none());
    }

    #[tokio::test]
    async fn test_self_removal_rejected_despite_permission() {
        let org = test_org();
        let identity = test_identity();
        let gate = AccessGate::new(
            StubIdentities::Known(identity.clone()),
            StubMemberships::with_role(&org, identity.id, OrgRole::Admin),
        );

        // Admin holds remove_members, so the gate allows...
        let ctx = gate
            .authorize(
                Some("token"),
                Some(org.id),
                &Requirement::permission(Permission::RemoveMembers),
            )
            .await
            .into_result()
            .unwrap();

        // ...but removing oneself is still rejected.
        assert_eq!(
            ensure_can_remove_member(&ctx, identity.id),
            Err(Denial::CannotRemoveSelf)
        );

        // Removing another member passes the guard.
        assert_eq!(ensure_can_remove_member(&ctx, Uuid::now_v7()), Ok(()));
    }
}
