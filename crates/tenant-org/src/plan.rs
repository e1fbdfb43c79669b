//! Subscription plans
//!
//! Plans gate organization limits such as member and team counts.

use serde::{Deserialize, Serialize};

/// Subscription plan for an organization.
///
/// # Examples
///
/// ```
/// use tenant_org::Plan;
///
/// let plan = Plan::Pro;
/// assert_eq!(plan.as_str(), "pro");
/// assert_eq!(plan.limits().max_members, Some(50));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Plan {
    /// Free plan with tight limits
    Free,

    /// Paid plan for growing teams
    Pro,

    /// Unlimited plan with custom terms
    Enterprise,
}

impl Plan {
    /// Parse a plan from its string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "free" => Some(Self::Free),
            "pro" => Some(Self::Pro),
            "enterprise" => Some(Self::Enterprise),
            _ => None,
        }
    }

    /// Get string representation of the plan.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pro => "pro",
            Self::Enterprise => "enterprise",
        }
    }

    /// Get a human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Pro => "Pro",
            Self::Enterprise => "Enterprise",
        }
    }

    /// Get the limits for this plan.
    ///
    /// `None` represents unlimited.
    pub fn limits(&self) -> PlanLimits {
        match self {
            Self::Free => PlanLimits {
                max_members: Some(5),
                max_teams: Some(2),
            },
            Self::Pro => PlanLimits {
                max_members: Some(50),
                max_teams: Some(25),
            },
            Self::Enterprise => PlanLimits {
                max_members: None,
                max_teams: None,
            },
        }
    }
}

impl Default for Plan {
    fn default() -> Self {
        Self::Free
    }
}

impl std::fmt::Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Limits attached to a subscription plan.
///
/// `None` means unlimited.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanLimits {
    /// Maximum number of organization members
    pub max_members: Option<u32>,

    /// Maximum number of teams
    pub max_teams: Option<u32>,
}
