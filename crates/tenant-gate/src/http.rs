//! HTTP-backed resolver implementations
//!
//! Default implementations of [`IdentityResolver`] and [`MembershipResolver`]
//! against a managed backend exposing a GoTrue-style auth API and a
//! PostgREST-style data API. Any other backend can plug into the gate by
//! implementing the traits directly.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};
use uuid::Uuid;

use tenant_org::{Membership, Organization};
use tenant_rbac::OrgRole;

use crate::config::Endpoint;
use crate::error::ResolverError;
use crate::identity::{Identity, IdentityResolver};
use crate::resolve::{MembershipResolver, MembershipSnapshot};

/// Identity resolver backed by the auth provider's user endpoint.
///
/// Sends the caller's credential as a bearer token to `GET /auth/v1/user`.
/// A 401 or 403 answer means the credential is invalid or expired and maps
/// to `Ok(None)`; any other failure is a [`ResolverError`].
#[derive(Clone)]
pub struct HttpIdentityResolver {
    /// HTTP client instance.
    client: Client,

    /// Auth provider endpoint configuration.
    endpoint: Endpoint,
}

impl HttpIdentityResolver {
    /// Create a new identity resolver.
    pub fn new(endpoint: Endpoint, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, endpoint }
    }
}

/// User payload returned by the auth provider.
#[derive(Debug, Deserialize)]
struct AuthUser {
    id: Uuid,
    #[serde(default)]
    email: String,
}

#[async_trait]
impl IdentityResolver for HttpIdentityResolver {
    #[instrument(skip(self, credential))]
    async fn verify(&self, credential: &str) -> Result<Option<Identity>, ResolverError> {
        let url = self.endpoint.url("/auth/v1/user");
        let mut request = self.client.get(&url).bearer_auth(credential);

        if let Some(ref api_key) = self.endpoint.api_key {
            request = request.header("apikey", api_key);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            let user: AuthUser = response
                .json()
                .await
                .map_err(|err| ResolverError::InvalidResponse(err.to_string()))?;
            debug!(user_id = %user.id, "credential verified");
            Ok(Some(Identity::new(user.id, user.email)))
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            debug!("credential rejected by auth provider");
            Ok(None)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ResolverError::UpstreamStatus {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Membership resolver backed by a PostgREST-style data API.
///
/// Queries the `organization_members` table filtered by user and
/// organization, embedding the organization row so the gate gets the
/// denormalized snapshot in one round trip.
#[derive(Clone)]
pub struct RestMembershipResolver {
    /// HTTP client instance.
    client: Client,

    /// Data store endpoint configuration.
    endpoint: Endpoint,
}

impl RestMembershipResolver {
    /// Create a new membership resolver.
    pub fn new(endpoint: Endpoint, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, endpoint }
    }
}

/// A membership row with its embedded organization, as the data API
/// returns it.
#[derive(Debug, Deserialize)]
struct MembershipRow {
    id: Uuid,
    organization_id: Uuid,
    user_id: Uuid,
    role: OrgRole,
    #[serde(alias = "created_at")]
    joined_at: DateTime<Utc>,
    #[serde(default)]
    invited_by: Option<Uuid>,
    organization: Organization,
}

impl From<MembershipRow> for MembershipSnapshot {
    fn from(row: MembershipRow) -> Self {
        Self {
            membership: Membership {
                id: row.id,
                organization_id: row.organization_id,
                user_id: row.user_id,
                role: row.role,
                joined_at: row.joined_at,
                invited_by: row.invited_by,
            },
            organization: row.organization,
        }
    }
}

#[async_trait]
impl MembershipResolver for RestMembershipResolver {
    #[instrument(skip(self))]
    async fn find_membership(
        &self,
        user_id: Uuid,
        org_id: Uuid,
    ) -> Result<Option<MembershipSnapshot>, ResolverError> {
        let url = self.endpoint.url("/rest/v1/organization_members");
        let mut request = self.client.get(&url).query(&[
            ("user_id", format!("eq.{user_id}")),
            ("organization_id", format!("eq.{org_id}")),
            ("select", "*,organization:organizations(*)".to_string()),
        ]);

        if let Some(ref api_key) = self.endpoint.api_key {
            request = request
                .header("apikey", api_key)
                .bearer_auth(api_key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ResolverError::UpstreamStatus {
                status: status.as_u16(),
                message,
            });
        }

        let rows: Vec<MembershipRow> = response
            .json()
            .await
            .map_err(|err| ResolverError::InvalidResponse(err.to_string()))?;

        // The (user, org) pair is unique in the store; an empty result is
        // a legitimate "not a member".
        Ok(rows.into_iter().next().map(MembershipSnapshot::from))
    }
}
