//! Caller identity resolution
//!
//! The identity resolver turns opaque request credentials (a bearer token or
//! session cookie value) into the caller's identity via the external auth
//! provider. Credential material is never persisted and never logged.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ResolverError;

/// The caller's identity as vouched for by the auth provider.
///
/// Immutable per request; the gate threads it into the [`AuthContext`]
/// handed to downstream handlers.
///
/// [`AuthContext`]: crate::gate::AuthContext
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    /// Opaque user ID assigned by the auth provider
    pub id: Uuid,

    /// The user's email address
    pub email: String,
}

impl Identity {
    /// Creates a new identity.
    pub fn new(id: Uuid, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }
}

/// Verifies request credentials against the external auth provider.
///
/// # Contract
///
/// - `Ok(Some(identity))` — the credential is valid and belongs to `identity`.
/// - `Ok(None)` — the credential is invalid, expired, or unknown. The several
///   underlying provider outcomes are deliberately collapsed: the gate cannot
///   act differently whether a token is malformed or expired.
/// - `Err(_)` — the provider itself failed (transport error, outage). The
///   gate also treats this as unauthenticated at the decision surface but
///   logs it distinctly so outages remain visible.
///
/// Implementations must be read-only and must not log the credential.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Resolve a credential to the caller's identity.
    ///
    /// # Arguments
    ///
    /// * `credential` - Opaque credential material extracted from the request
    async fn verify(&self, credential: &str) -> Result<Option<Identity>, ResolverError>;
}
