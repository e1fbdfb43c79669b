//! Gate configuration
//!
//! Endpoint configuration for the external auth provider and membership
//! data store. Loaded from environment variables with localhost defaults
//! for development.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A collaborator endpoint: base URL plus optional API key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoint {
    /// Base URL of the service.
    pub base_url: String,

    /// API key sent alongside requests, if the service requires one.
    pub api_key: Option<String>,
}

impl Endpoint {
    /// Build a full URL for a path on this endpoint.
    ///
    /// # Arguments
    ///
    /// * `path` - Path starting with `/`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Configuration for the authorization gate's collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    /// Identity verification service (auth provider).
    pub auth: Endpoint,

    /// Membership data store (REST-exposed relational store).
    pub store: Endpoint,

    /// Request timeout in seconds for both collaborators.
    pub timeout_secs: u64,
}

impl Default for GateConfig {
    /// Returns default configuration suitable for local development.
    fn default() -> Self {
        Self {
            auth: Endpoint {
                base_url: "http://localhost:9999".to_string(),
                api_key: None,
            },
            store: Endpoint {
                base_url: "http://localhost:3000".to_string(),
                api_key: None,
            },
            timeout_secs: 30,
        }
    }
}

impl GateConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `AUTH_API_URL`: Auth provider URL (default: http://localhost:9999)
    /// - `AUTH_API_KEY`: Auth provider API key
    /// - `STORE_API_URL`: Data store URL (default: http://localhost:3000)
    /// - `STORE_SERVICE_KEY`: Data store service key (bypasses row security
    ///   for membership queries; keep server-side only)
    /// - `GATE_TIMEOUT_SECS`: Request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            auth: Endpoint {
                base_url: std::env::var("AUTH_API_URL").unwrap_or(default.auth.base_url),
                api_key: std::env::var("AUTH_API_KEY").ok(),
            },
            store: Endpoint {
                base_url: std::env::var("STORE_API_URL").unwrap_or(default.store.base_url),
                api_key: std::env::var("STORE_SERVICE_KEY").ok(),
            },
            timeout_secs: std::env::var("GATE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.timeout_secs),
        }
    }

    /// Get the request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
