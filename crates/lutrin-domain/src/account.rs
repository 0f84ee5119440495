//! Account role, approval status, and plan types.
//!
//! The backing store keeps these as snake_case strings (legacy rows exist
//! with mixed casing); [`parse_str`](AccountRole::parse_str) normalizes
//! case-insensitively and is the single point where raw strings become
//! typed values. The gateway injects roles as `u8` wire values.

use serde::{Deserialize, Serialize};

/// Account permission level.
///
/// Wire format on gateway headers: `u8` (0 = Student … 3 = Admin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountRole {
    Student = 0,
    Teacher = 1,
    SchoolAdmin = 2,
    Admin = 3,
}

impl AccountRole {
    /// Convert from the `u8` wire value. Returns `None` for unknown values.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Student),
            1 => Some(Self::Teacher),
            2 => Some(Self::SchoolAdmin),
            3 => Some(Self::Admin),
            _ => None,
        }
    }

    /// Convert to the `u8` wire value.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Parse the stored string form, normalizing case. Returns `None` for
    /// unknown values.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "student" => Some(Self::Student),
            "teacher" => Some(Self::Teacher),
            "school_admin" => Some(Self::SchoolAdmin),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Canonical stored string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::SchoolAdmin => "school_admin",
            Self::Admin => "admin",
        }
    }
}

impl PartialOrd for AccountRole {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AccountRole {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_u8().cmp(&other.as_u8())
    }
}

/// Admin-controlled approval state of an account, distinct from the
/// technical `is_active` kill-switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Pending,
    Active,
    Rejected,
}

impl AccountStatus {
    /// Parse the stored string form, normalizing case.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "active" => Some(Self::Active),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Rejected => "rejected",
        }
    }
}

/// Whether quota limits apply to an account. Only a confirmed payment
/// moves an account to `Subscription`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanSelection {
    Trial,
    Subscription,
}

impl PlanSelection {
    pub fn parse_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "trial" => Some(Self::Trial),
            "subscription" => Some(Self::Subscription),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trial => "trial",
            Self::Subscription => "subscription",
        }
    }
}

/// Plan tier requested at registration. Pro and Enterprise are
/// subscription-*intent*: the account still starts on the trial plan and
/// only billing confirmation flips [`PlanSelection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanTier {
    Free,
    Pro,
    Enterprise,
}

impl PlanTier {
    pub fn parse_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "free" => Some(Self::Free),
            "pro" => Some(Self::Pro),
            "enterprise" => Some(Self::Enterprise),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pro => "pro",
            Self::Enterprise => "enterprise",
        }
    }

    /// Paid tiers must go through billing checkout before the plan changes.
    pub fn requires_checkout(self) -> bool {
        !matches!(self, Self::Free)
    }
}
