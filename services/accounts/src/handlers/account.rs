use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use lutrin_core::identity::IdentityHeaders;
use lutrin_domain::account::{PlanSelection, PlanTier};

use crate::error::AccountsServiceError;
use crate::handlers::AccountResponse;
use crate::state::AppState;
use crate::usecase::account::GetAccountUseCase;
use crate::usecase::quota::GetUsageUseCase;
use crate::usecase::register::{RegisterAccountInput, RegisterAccountUseCase};

// ── POST /accounts ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub full_name: String,
    pub organization: String,
    /// Requested tier: "free" (default), "pro", or "enterprise".
    pub plan: Option<String>,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    #[serde(flatten)]
    pub account: AccountResponse,
    pub requires_checkout: bool,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AccountsServiceError> {
    let plan_tier = match body.plan.as_deref() {
        None => PlanTier::Free,
        Some(s) => PlanTier::parse_str(s).ok_or(AccountsServiceError::InvalidPlan)?,
    };
    let usecase = RegisterAccountUseCase {
        repo: state.account_repo(),
        outbox: state.notification_outbox(),
    };
    let output = usecase
        .execute(RegisterAccountInput {
            email: body.email,
            full_name: body.full_name,
            organization: body.organization,
            plan_tier,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            account: output.account.into(),
            requires_checkout: output.requires_checkout,
        }),
    ))
}

// ── GET /accounts/@me ────────────────────────────────────────────────────────

pub async fn get_me(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<AccountResponse>, AccountsServiceError> {
    let usecase = GetAccountUseCase {
        repo: state.account_repo(),
    };
    let account = usecase.execute(identity.user_id).await?;
    Ok(Json(account.into()))
}

// ── GET /accounts/@me/usage ──────────────────────────────────────────────────

#[derive(Serialize)]
pub struct UsageResponse {
    pub plan_selection: PlanSelection,
    pub quota_exempt: bool,
    pub generation_count: i32,
    pub generation_limit: i32,
    pub chat_message_count: i32,
    pub chat_message_limit: i32,
    #[serde(serialize_with = "lutrin_core::serde::to_rfc3339_ms_opt")]
    pub trial_ends_at: Option<chrono::DateTime<chrono::Utc>>,
}

pub async fn get_usage(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<UsageResponse>, AccountsServiceError> {
    let usecase = GetUsageUseCase {
        repo: state.account_repo(),
    };
    let summary = usecase.execute(identity.user_id).await?;
    Ok(Json(UsageResponse {
        plan_selection: summary.plan_selection,
        quota_exempt: summary.quota_exempt,
        generation_count: summary.generation_count,
        generation_limit: summary.generation_limit,
        chat_message_count: summary.chat_message_count,
        chat_message_limit: summary.chat_message_limit,
        trial_ends_at: summary.trial_ends_at,
    }))
}
