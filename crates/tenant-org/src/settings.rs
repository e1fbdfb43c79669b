//! Organization settings
//!
//! Settings control membership defaults and invitation policy for an
//! organization.

use serde::{Deserialize, Serialize};

use tenant_rbac::OrgRole;

/// Organization-level settings.
///
/// # Examples
///
/// ```
/// use tenant_org::OrganizationSettings;
/// use tenant_rbac::OrgRole;
///
/// let settings = OrganizationSettings::default();
/// assert_eq!(settings.default_member_role, OrgRole::Member);
/// assert!(settings.allow_member_invites);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationSettings {
    /// Role assigned to newly invited members
    #[serde(default = "default_member_role")]
    pub default_member_role: OrgRole,

    /// Whether members below admin may send invitations
    #[serde(default = "default_allow_invites")]
    pub allow_member_invites: bool,

    /// Allowed email domains for invitations (empty = all allowed)
    #[serde(default)]
    pub allowed_email_domains: Vec<String>,
}

fn default_member_role() -> OrgRole {
    OrgRole::Member
}

fn default_allow_invites() -> bool {
    true
}

impl Default for OrganizationSettings {
    fn default() -> Self {
        Self {
            default_member_role: default_member_role(),
            allow_member_invites: default_allow_invites(),
            allowed_email_domains: Vec::new(),
        }
    }
}

impl OrganizationSettings {
    /// Check if an email address passes the domain allowlist.
    ///
    /// An empty allowlist admits every domain.
    ///
    /// # Arguments
    ///
    /// * `email` - The invitee's email address
    pub fn email_domain_allowed(&self, email: &str) -> bool {
        if self.allowed_email_domains.is_empty() {
            return true;
        }
        let Some((_, domain)) = email.rsplit_once('@').filter(|(_, d)| !d.is_empty()) else {
            return false;
        };
        self.allowed_email_domains
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(domain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = OrganizationSettings::default();
        assert_eq!(settings.default_member_role, OrgRole::Member);
        assert!(settings.allow_member_invites);
        assert!(settings.allowed_email_domains.is_empty());
    }

    #[test]
    fn test_empty_allowlist_admits_all() {
        let settings = OrganizationSettings::default();
        assert!(settings.email_domain_allowed("user@anywhere.example"));
    }

    #[test]
    fn test_domain_allowlist() {
        let settings = OrganizationSettings {
            allowed_email_domains: vec!["acme.example".to_string()],
            ..Default::default()
        };
        assert!(settings.email_domain_allowed("user@acme.example"));
        assert!(settings.email_domain_allowed("user@ACME.EXAMPLE"));
        assert!(!settings.email_domain_allowed("user@other.example"));
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let settings: OrganizationSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.default_member_role, OrgRole::Member);
        assert!(settings.allow_member_invites);
    }
}
