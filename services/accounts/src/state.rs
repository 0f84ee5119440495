use sea_orm::DatabaseConnection;

use crate::infra::db::{DbAccountRepository, DbNotificationOutbox};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Admin bootstrap endpoint gate (see `config::AccountsConfig`).
    pub setup_enabled: bool,
    pub setup_secret: Option<String>,
}

impl AppState {
    pub fn account_repo(&self) -> DbAccountRepository {
        DbAccountRepository {
            db: self.db.clone(),
        }
    }

    pub fn notification_outbox(&self) -> DbNotificationOutbox {
        DbNotificationOutbox {
            db: self.db.clone(),
        }
    }
}
