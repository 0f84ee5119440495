use axum::{
    Router,
    routing::{get, patch, post},
};
use tower_http::trace::TraceLayer;

use lutrin_core::health::{healthz, readyz, version};
use lutrin_core::middleware::request_id_layer;

use crate::handlers::{
    account::{get_me, get_usage, register},
    admin::{list_accounts, update_account},
    billing::billing_event,
    bootstrap::bootstrap_admin,
    usage::consume_usage,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/version", get(version))
        // Accounts
        .route("/accounts", post(register))
        .route("/accounts", get(list_accounts))
        .route("/accounts/@me", get(get_me))
        .route("/accounts/@me/usage", get(get_usage))
        .route("/accounts/@me/usage", post(consume_usage))
        .route("/accounts/{account_id}", patch(update_account))
        // Billing
        .route("/billing/events", post(billing_event))
        // Operator bootstrap
        .route("/setup/admin", post(bootstrap_admin))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
