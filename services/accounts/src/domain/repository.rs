#![allow(async_fn_in_trait)]

use uuid::Uuid;

use lutrin_domain::account::{AccountStatus, PlanSelection};
use lutrin_domain::pagination::{PageRequest, Sort};

use crate::domain::types::{Account, NotificationEvent, UsageAction};
use crate::error::AccountsServiceError;

/// Repository for account records.
pub trait AccountRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, AccountsServiceError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountsServiceError>;

    /// Insert a new account. A duplicate email surfaces as
    /// [`AccountsServiceError::AccountAlreadyExists`], so registrations
    /// losing a race against the unique index still get a conflict.
    async fn create(&self, account: &Account) -> Result<(), AccountsServiceError>;

    /// List accounts, optionally filtered by status, ordered by creation
    /// time (the admin approval queue reads oldest-first).
    async fn list(
        &self,
        status: Option<AccountStatus>,
        sort: Sort,
        page: PageRequest,
    ) -> Result<Vec<Account>, AccountsServiceError>;

    /// Atomically admit-and-charge one unit of `action` against the
    /// account's lifetime counter: increments only while the counter is
    /// strictly below `limit`, as a single compare-and-increment at the
    /// store. Returns `false` when the counter was already at the limit.
    ///
    /// This is the one serialization point that keeps racing requests from
    /// overshooting the limit.
    async fn try_consume(
        &self,
        id: Uuid,
        action: UsageAction,
        limit: i32,
    ) -> Result<bool, AccountsServiceError>;

    /// Apply plan/status/kill-switch changes; `None` fields are untouched.
    async fn apply_state(
        &self,
        id: Uuid,
        plan: Option<PlanSelection>,
        status: Option<AccountStatus>,
        is_active: Option<bool>,
    ) -> Result<(), AccountsServiceError>;

    /// Whether any admin-role account exists (bootstrap guard).
    async fn any_admin_exists(&self) -> Result<bool, AccountsServiceError>;

    /// Promote an existing account to a fully activated admin
    /// (role=admin, status=active, is_active=true, plan=subscription).
    async fn promote_to_admin(&self, id: Uuid) -> Result<(), AccountsServiceError>;
}

/// Transactional-outbox port for account notifications. Delivery to SMTP is
/// a separate worker's job; callers treat enqueue as best-effort and never
/// fail a state transition over it.
pub trait NotificationOutbox: Send + Sync {
    async fn enqueue(&self, event: &NotificationEvent) -> Result<(), AccountsServiceError>;
}
