pub mod account;
pub mod admin;
pub mod billing;
pub mod bootstrap;
pub mod usage;

use serde::Serialize;

use crate::domain::types::Account;

/// Canonical account snapshot returned by every endpoint that yields an
/// account.
#[derive(Serialize)]
pub struct AccountResponse {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub organization: String,
    pub role: lutrin_domain::account::AccountRole,
    pub status: lutrin_domain::account::AccountStatus,
    pub is_active: bool,
    pub plan_selection: lutrin_domain::account::PlanSelection,
    #[serde(serialize_with = "lutrin_core::serde::to_rfc3339_ms_opt")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub generation_count: i32,
    pub chat_message_count: i32,
    #[serde(serialize_with = "lutrin_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id.to_string(),
            email: account.email,
            full_name: account.full_name,
            organization: account.organization,
            role: account.role,
            status: account.status,
            is_active: account.is_active,
            plan_selection: account.plan_selection,
            created_at: account.created_at,
            generation_count: account.generation_count,
            chat_message_count: account.chat_message_count,
            updated_at: account.updated_at,
        }
    }
}
