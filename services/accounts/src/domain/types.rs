use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use lutrin_domain::account::{AccountRole, AccountStatus, PlanSelection};

/// Length of the free trial window, anchored at account creation.
pub const TRIAL_DAYS: i64 = 15;

/// Lifetime document-generation limit for trial accounts (never resets).
pub const GENERATION_LIMIT: i32 = 5;

/// Lifetime chat-message limit for trial accounts (never resets).
pub const CHAT_MESSAGE_LIMIT: i32 = 15;

/// One authenticated user of the service.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub organization: String,
    pub role: AccountRole,
    pub status: AccountStatus,
    pub is_active: bool,
    pub plan_selection: PlanSelection,
    /// Trial anchor. `None` on legacy rows that predate the column; quota
    /// checks treat that as an already-expired trial (fail closed).
    pub created_at: Option<DateTime<Utc>>,
    pub generation_count: i32,
    pub chat_message_count: i32,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Quota limits never apply to admins or paying subscribers.
    pub fn quota_exempt(&self) -> bool {
        self.role == AccountRole::Admin || self.plan_selection == PlanSelection::Subscription
    }

    /// End of the trial window, or `None` when the anchor is unknown.
    pub fn trial_ends_at(&self) -> Option<DateTime<Utc>> {
        self.created_at.map(|created| created + Duration::days(TRIAL_DAYS))
    }

    /// Whether the trial window has closed at `now`. An unknown anchor
    /// counts as expired.
    pub fn trial_expired(&self, now: DateTime<Utc>) -> bool {
        match self.trial_ends_at() {
            Some(end) => now > end,
            None => true,
        }
    }

    /// Current lifetime counter for `action`.
    pub fn usage_count(&self, action: UsageAction) -> i32 {
        match action {
            UsageAction::GenerateCourse => self.generation_count,
            UsageAction::ChatMessage => self.chat_message_count,
        }
    }
}

/// A quota-consuming action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageAction {
    GenerateCourse,
    ChatMessage,
}

impl UsageAction {
    pub fn from_kebab_case(s: &str) -> Option<Self> {
        match s {
            "generate-course" => Some(Self::GenerateCourse),
            "chat-message" => Some(Self::ChatMessage),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::GenerateCourse => "generate-course",
            Self::ChatMessage => "chat-message",
        }
    }

    /// Lifetime limit for trial accounts.
    pub fn limit(self) -> i32 {
        match self {
            Self::GenerateCourse => GENERATION_LIMIT,
            Self::ChatMessage => CHAT_MESSAGE_LIMIT,
        }
    }
}

/// Outcome of a quota check. Denial is a business-rule result the caller
/// branches on, not an exception; the HTTP layer translates it to 403.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Admitted,
    Denied(DenialReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    TrialExpired,
    QuotaExceeded,
}

/// Outbox event for async notification delivery (approval/rejection/welcome
/// emails).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationEvent {
    pub id: Uuid,
    pub kind: String,
    pub payload: serde_json::Value,
    pub idempotency_key: String,
}

impl NotificationEvent {
    fn for_account(kind: &str, account: &Account) -> Self {
        let id = Uuid::new_v4();
        Self {
            id,
            kind: kind.to_owned(),
            payload: json!({
                "account_id": account.id,
                "email": account.email,
                "full_name": account.full_name,
                "plan_selection": account.plan_selection.as_str(),
            }),
            idempotency_key: format!("{kind}:{id}"),
        }
    }

    /// Sent when a registration lands in the approval queue.
    pub fn welcome(account: &Account) -> Self {
        Self::for_account("account_welcome", account)
    }

    /// Sent on an actual transition to Active (admin approval or confirmed
    /// payment).
    pub fn approval(account: &Account) -> Self {
        Self::for_account("account_approved", account)
    }

    /// Sent on an actual transition to Rejected.
    pub fn rejection(account: &Account) -> Self {
        Self::for_account("account_rejected", account)
    }
}

/// Validate a registration email: one `@` with non-empty sides, no
/// whitespace, at most 254 chars.
pub fn validate_email(email: &str) -> bool {
    if email.is_empty() || email.len() > 254 {
        return false;
    }
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        }
        None => false,
    }
}
