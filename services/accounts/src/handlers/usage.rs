use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use lutrin_core::identity::IdentityHeaders;

use crate::domain::types::{Admission, DenialReason, UsageAction};
use crate::error::AccountsServiceError;
use crate::state::AppState;
use crate::usecase::quota::ConsumeUsageUseCase;

// ── POST /accounts/@me/usage ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ConsumeUsageRequest {
    /// "generate-course" or "chat-message".
    pub action: String,
}

/// Charge one usage unit for the calling account. 204 on admission; denial
/// surfaces as a 403 with the reason in `kind`.
pub async fn consume_usage(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<ConsumeUsageRequest>,
) -> Result<StatusCode, AccountsServiceError> {
    let action = UsageAction::from_kebab_case(&body.action)
        .ok_or(AccountsServiceError::InvalidAction)?;

    let usecase = ConsumeUsageUseCase {
        repo: state.account_repo(),
    };
    match usecase.execute(identity.user_id, action).await? {
        Admission::Admitted => Ok(StatusCode::NO_CONTENT),
        Admission::Denied(DenialReason::TrialExpired) => Err(AccountsServiceError::TrialExpired),
        Admission::Denied(DenialReason::QuotaExceeded) => Err(AccountsServiceError::QuotaExceeded),
    }
}
