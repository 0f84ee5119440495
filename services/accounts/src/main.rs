use sea_orm::Database;
use tracing::info;

use lutrin_accounts::config::AccountsConfig;
use lutrin_accounts::router::build_router;
use lutrin_accounts::state::AppState;
use lutrin_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = AccountsConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        setup_enabled: config.setup_enabled,
        setup_secret: config.setup_secret,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.accounts_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("accounts service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
