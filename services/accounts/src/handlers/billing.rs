use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AccountsServiceError;
use crate::state::AppState;
use crate::usecase::billing::ConfirmSubscriptionUseCase;

// ── POST /billing/events ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct BillingEventRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub account_id: Uuid,
}

#[derive(Serialize)]
pub struct BillingEventResponse {
    pub status: &'static str,
}

/// Payment-provider webhook relay. Only completed checkouts act on the
/// account; every other event type is acknowledged and dropped so the
/// provider does not retry it.
pub async fn billing_event(
    State(state): State<AppState>,
    Json(body): Json<BillingEventRequest>,
) -> Result<Json<BillingEventResponse>, AccountsServiceError> {
    if body.kind != "checkout.session.completed" {
        return Ok(Json(BillingEventResponse { status: "ignored" }));
    }

    let usecase = ConfirmSubscriptionUseCase {
        repo: state.account_repo(),
        outbox: state.notification_outbox(),
    };
    usecase.execute(body.account_id).await?;
    Ok(Json(BillingEventResponse {
        status: "processed",
    }))
}
