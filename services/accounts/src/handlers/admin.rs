use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use uuid::Uuid;

use lutrin_core::identity::IdentityHeaders;
use lutrin_domain::account::{AccountRole, AccountStatus};
use lutrin_domain::pagination::{PageRequest, Sort};

use crate::error::AccountsServiceError;
use crate::handlers::AccountResponse;
use crate::state::AppState;
use crate::usecase::account::ListAccountsUseCase;
use crate::usecase::approval::{ApplyStatusChangeUseCase, StatusChangeInput};

fn require_admin(identity: &IdentityHeaders) -> Result<(), AccountsServiceError> {
    match AccountRole::from_u8(identity.user_role) {
        Some(AccountRole::Admin) => Ok(()),
        _ => Err(AccountsServiceError::Forbidden),
    }
}

// ── GET /accounts ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ListAccountsQuery {
    pub status: Option<String>,
    #[serde(rename = "per-page")]
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

/// Admin listing, oldest first so the approval queue (`?status=pending`)
/// comes out in arrival order.
pub async fn list_accounts(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Query(query): Query<ListAccountsQuery>,
) -> Result<Json<Vec<AccountResponse>>, AccountsServiceError> {
    require_admin(&identity)?;

    let status = query
        .status
        .as_deref()
        .map(|s| AccountStatus::parse_str(s).ok_or(AccountsServiceError::InvalidStatus))
        .transpose()?;
    let page = PageRequest {
        per_page: query.per_page.unwrap_or(25),
        page: query.page.unwrap_or(1),
    };

    let usecase = ListAccountsUseCase {
        repo: state.account_repo(),
    };
    let accounts = usecase.execute(status, Sort::Asc, page).await?;
    Ok(Json(accounts.into_iter().map(Into::into).collect()))
}

// ── PATCH /accounts/{account_id} ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateAccountRequest {
    pub status: Option<String>,
    pub is_active: Option<bool>,
}

pub async fn update_account(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
    Json(body): Json<UpdateAccountRequest>,
) -> Result<Json<AccountResponse>, AccountsServiceError> {
    require_admin(&identity)?;

    let new_status = body
        .status
        .as_deref()
        .map(|s| AccountStatus::parse_str(s).ok_or(AccountsServiceError::InvalidStatus))
        .transpose()?;

    let usecase = ApplyStatusChangeUseCase {
        repo: state.account_repo(),
        outbox: state.notification_outbox(),
    };
    let updated = usecase
        .execute(
            identity.user_id,
            account_id,
            StatusChangeInput {
                new_status,
                new_is_active: body.is_active,
            },
        )
        .await?;
    Ok(Json(updated.into()))
}
