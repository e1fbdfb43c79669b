//! Error and denial types for authorization
//!
//! Two distinct families live here. [`ResolverError`] is a real fault in an
//! external collaborator (transport failure, upstream error status).
//! [`Denial`] is an expected, non-fatal authorization outcome; the gate
//! returns it as data, never as an `Err`, and the route layer renders it
//! into a protocol response.

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use tenant_rbac::{OrgRole, Permission};

/// Failure of an external resolver (auth provider or data store).
///
/// Distinct from a legitimate "not found": these indicate the collaborator
/// itself misbehaved. They are logged with full context but never exposed
/// verbatim in a response body.
#[derive(Debug, Error)]
pub enum ResolverError {
    /// The HTTP request to the collaborator failed.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The collaborator answered with an unexpected error status.
    #[error("upstream returned status {status}: {message}")]
    UpstreamStatus {
        /// HTTP status code from the collaborator.
        status: u16,
        /// Error body from the collaborator.
        message: String,
    },

    /// The collaborator's response could not be interpreted.
    #[error("invalid upstream response: {0}")]
    InvalidResponse(String),
}

/// Why an authorization request was denied.
///
/// Every deny carries enough for the route layer to produce the HTTP-facing
/// contract: a status code, a machine-readable reason code, and — for
/// privilege failures — the caller's actual role and the unmet requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Denial {
    /// No credential, or the credential did not resolve to an identity (401).
    Unauthenticated,

    /// The request's routing context carried no organization id (400).
    MissingOrgId,

    /// The caller has no membership in the target organization (403).
    NotAMember {
        /// The organization the caller is not a member of.
        org_id: Uuid,
    },

    /// The caller's role rank is below the required minimum (403).
    InsufficientRole {
        /// The caller's actual role.
        user_role: OrgRole,
        /// The minimum role that was required.
        required_role: OrgRole,
    },

    /// The caller's role grants none of the required permissions (403).
    MissingPermission {
        /// The caller's actual role.
        user_role: OrgRole,
        /// The permissions of which at least one was required.
        required: Vec<Permission>,
    },

    /// A member may not remove themselves from the organization (400).
    CannotRemoveSelf,

    /// An external resolver failed; detail is in the logs only (500).
    ResolverFailure,
}

impl Denial {
    /// Get the HTTP status code for this denial.
    pub fn status_code(&self) -> u16 {
        match self {
            Denial::Unauthenticated => 401,
            Denial::MissingOrgId => 400,
            Denial::NotAMember { .. } => 403,
            Denial::InsufficientRole { .. } => 403,
            Denial::MissingPermission { .. } => 403,
            Denial::CannotRemoveSelf => 400,
            Denial::ResolverFailure => 500,
        }
    }

    /// Get the machine-readable reason code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            Denial::Unauthenticated => "UNAUTHORIZED",
            Denial::MissingOrgId => "BAD_REQUEST",
            Denial::NotAMember { .. } => "NOT_MEMBER",
            Denial::InsufficientRole { .. } => "INSUFFICIENT_ROLE",
            Denial::MissingPermission { .. } => "PERMISSION_DENIED",
            Denial::CannotRemoveSelf => "CANNOT_REMOVE_SELF",
            Denial::ResolverFailure => "INTERNAL_ERROR",
        }
    }

    /// Build the JSON error body for this denial.
    ///
    /// Privilege failures include the caller's actual role and the unmet
    /// requirement; observability, not secrecy, is the goal there. Resolver
    /// failures stay generic — internal detail never reaches the body.
    pub fn body(&self) -> DenialBody {
        let mut body = DenialBody {
            error: self.to_string(),
            code: self.error_code(),
            status: self.status_code(),
            user_role: None,
            required_role: None,
            required_permissions: None,
        };
        match self {
            Denial::InsufficientRole {
                user_role,
                required_role,
            } => {
                body.user_role = Some(*user_role);
                body.required_role = Some(*required_role);
            }
            Denial::MissingPermission {
                user_role,
                required,
            } => {
                body.user_role = Some(*user_role);
                body.required_permissions = Some(required.clone());
            }
            _ => {}
        }
        body
    }
}

impl std::fmt::Display for Denial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Denial::Unauthenticated => write!(f, "Unauthorized - please log in"),
            Denial::MissingOrgId => write!(f, "Organization ID required"),
            Denial::NotAMember { .. } => write!(f, "Not a member of this organization"),
            Denial::InsufficientRole { required_role, .. } => {
                write!(f, "Requires {required_role} role or higher")
            }
            Denial::MissingPermission { required, .. } => {
                let names: Vec<&str> = required.iter().map(|p| p.as_str()).collect();
                write!(f, "Requires one of these permissions: {}", names.join(", "))
            }
            Denial::CannotRemoveSelf => {
                write!(f, "Cannot remove yourself from the organization")
            }
            Denial::ResolverFailure => write!(f, "Internal server error"),
        }
    }
}

/// JSON error body rendered for a denied request.
///
/// `user_role` and the requirement fields are present only for privilege
/// failures.
#[derive(Debug, Clone, Serialize)]
pub struct DenialBody {
    /// Human-readable message.
    pub error: String,

    /// Machine-readable reason code.
    pub code: &'static str,

    /// HTTP status code.
    pub status: u16,

    /// The caller's actual role (privilege failures only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_role: Option<OrgRole>,

    /// The minimum role that was not met.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_role: Option<OrgRole>,

    /// The permission set of which none was held.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_permissions: Option<Vec<Permission>>,
}
