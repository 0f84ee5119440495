use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Accounts service domain error variants.
///
/// Quota and approval denials are business-rule outcomes; they map to 403
/// with distinct kinds so the front end can show differentiated upgrade
/// prompts (TRIAL_EXPIRED vs QUOTA_EXCEEDED are never collapsed).
#[derive(Debug, thiserror::Error)]
pub enum AccountsServiceError {
    #[error("account not found")]
    AccountNotFound,
    #[error("email already registered")]
    AccountAlreadyExists,
    #[error("an admin account already exists")]
    AdminAlreadyExists,
    #[error("invalid email address")]
    InvalidEmail,
    #[error("invalid plan tier")]
    InvalidPlan,
    #[error("invalid account status")]
    InvalidStatus,
    #[error("invalid usage action")]
    InvalidAction,
    #[error("missing data")]
    MissingData,
    #[error("forbidden")]
    Forbidden,
    #[error("admins cannot deactivate or demote their own account")]
    SelfActionForbidden,
    #[error("free trial has expired")]
    TrialExpired,
    #[error("usage quota exceeded")]
    QuotaExceeded,
    #[error("admin bootstrap endpoint is disabled")]
    BootstrapDisabled,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AccountsServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AccountNotFound => "ACCOUNT_NOT_FOUND",
            Self::AccountAlreadyExists => "ACCOUNT_ALREADY_EXISTS",
            Self::AdminAlreadyExists => "ADMIN_ALREADY_EXISTS",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidPlan => "INVALID_PLAN",
            Self::InvalidStatus => "INVALID_STATUS",
            Self::InvalidAction => "INVALID_ACTION",
            Self::MissingData => "MISSING_DATA",
            Self::Forbidden => "FORBIDDEN",
            Self::SelfActionForbidden => "SELF_ACTION_FORBIDDEN",
            Self::TrialExpired => "TRIAL_EXPIRED",
            Self::QuotaExceeded => "QUOTA_EXCEEDED",
            Self::BootstrapDisabled => "BOOTSTRAP_DISABLED",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for AccountsServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::AccountNotFound => StatusCode::NOT_FOUND,
            Self::AccountAlreadyExists | Self::AdminAlreadyExists => StatusCode::CONFLICT,
            Self::InvalidEmail
            | Self::InvalidPlan
            | Self::InvalidStatus
            | Self::InvalidAction
            | Self::MissingData => StatusCode::BAD_REQUEST,
            Self::Forbidden
            | Self::SelfActionForbidden
            | Self::TrialExpired
            | Self::QuotaExceeded
            | Self::BootstrapDisabled => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only; tower-http TraceLayer already records method/uri/status
        // for every request, and 4xx are expected client outcomes.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
