use axum::{Json, extract::State, http::HeaderMap, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::error::AccountsServiceError;
use crate::handlers::AccountResponse;
use crate::state::AppState;
use crate::usecase::bootstrap::{BootstrapAction, BootstrapAdminInput, BootstrapAdminUseCase};

pub const SETUP_SECRET_HEADER: &str = "x-setup-secret";

// ── POST /setup/admin ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct BootstrapAdminRequest {
    pub email: String,
    pub full_name: String,
}

#[derive(Serialize)]
pub struct BootstrapAdminResponse {
    pub action: &'static str,
    #[serde(flatten)]
    pub account: AccountResponse,
}

/// Secret-gated operator seeding. Disabled unless both the enable flag and
/// the secret are configured; the secret travels in `x-setup-secret`.
pub async fn bootstrap_admin(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<BootstrapAdminRequest>,
) -> Result<(StatusCode, Json<BootstrapAdminResponse>), AccountsServiceError> {
    if !state.setup_enabled {
        return Err(AccountsServiceError::BootstrapDisabled);
    }
    let secret = state
        .setup_secret
        .as_deref()
        .ok_or(AccountsServiceError::BootstrapDisabled)?;
    let presented = headers
        .get(SETUP_SECRET_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(AccountsServiceError::Forbidden)?;
    if presented != secret {
        return Err(AccountsServiceError::Forbidden);
    }

    let usecase = BootstrapAdminUseCase {
        repo: state.account_repo(),
    };
    let (account, action) = usecase
        .execute(BootstrapAdminInput {
            email: body.email,
            full_name: body.full_name,
        })
        .await?;

    let code = match action {
        BootstrapAction::Created => StatusCode::CREATED,
        BootstrapAction::Promoted => StatusCode::OK,
    };
    Ok((
        code,
        Json(BootstrapAdminResponse {
            action: action.as_str(),
            account: account.into(),
        }),
    ))
}
