use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, SqlErr, sea_query::Expr,
};
use uuid::Uuid;

use lutrin_accounts_schema::{accounts, outbox_events};
use lutrin_domain::account::{AccountRole, AccountStatus, PlanSelection};
use lutrin_domain::pagination::{PageRequest, Sort};

use crate::domain::repository::{AccountRepository, NotificationOutbox};
use crate::domain::types::{Account, NotificationEvent, UsageAction};
use crate::error::AccountsServiceError;

// ── Account repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAccountRepository {
    pub db: DatabaseConnection,
}

impl AccountRepository for DbAccountRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, AccountsServiceError> {
        let model = accounts::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find account by id")?;
        model.map(account_from_model).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountsServiceError> {
        let model = accounts::Entity::find()
            .filter(accounts::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find account by email")?;
        model.map(account_from_model).transpose()
    }

    async fn create(&self, account: &Account) -> Result<(), AccountsServiceError> {
        let result = accounts::ActiveModel {
            id: Set(account.id),
            email: Set(account.email.clone()),
            full_name: Set(account.full_name.clone()),
            organization: Set(account.organization.clone()),
            role: Set(account.role.as_str().to_owned()),
            status: Set(account.status.as_str().to_owned()),
            is_active: Set(account.is_active),
            plan_selection: Set(account.plan_selection.as_str().to_owned()),
            created_at: Set(account.created_at),
            generation_count: Set(account.generation_count),
            chat_message_count: Set(account.chat_message_count),
            updated_at: Set(account.updated_at),
        }
        .insert(&self.db)
        .await;
        match result {
            Ok(_) => Ok(()),
            // The duplicate check in the usecase races against concurrent
            // registrations; the unique email index is the backstop, and
            // losing the race is a conflict, not an internal error.
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AccountsServiceError::AccountAlreadyExists)
            }
            Err(e) => Err(anyhow::Error::new(e).context("create account").into()),
        }
    }

    async fn list(
        &self,
        status: Option<AccountStatus>,
        sort: Sort,
        page: PageRequest,
    ) -> Result<Vec<Account>, AccountsServiceError> {
        let page = page.clamped();
        let mut query = accounts::Entity::find();
        if let Some(status) = status {
            query = query.filter(accounts::Column::Status.eq(status.as_str()));
        }
        query = match sort {
            Sort::Asc => query.order_by_asc(accounts::Column::CreatedAt),
            Sort::Desc => query.order_by_desc(accounts::Column::CreatedAt),
        };
        let models = query
            .offset(page.offset())
            .limit(page.per_page as u64)
            .all(&self.db)
            .await
            .context("list accounts")?;
        models.into_iter().map(account_from_model).collect()
    }

    async fn try_consume(
        &self,
        id: Uuid,
        action: UsageAction,
        limit: i32,
    ) -> Result<bool, AccountsServiceError> {
        let counter = match action {
            UsageAction::GenerateCourse => accounts::Column::GenerationCount,
            UsageAction::ChatMessage => accounts::Column::ChatMessageCount,
        };
        // Conditional UPDATE: the row-level compare-and-increment is the
        // serialization point that keeps concurrent requests from
        // overshooting the lifetime limit.
        let result = accounts::Entity::update_many()
            .filter(accounts::Column::Id.eq(id))
            .filter(counter.lt(limit))
            .col_expr(counter, Expr::col(counter).add(1))
            .col_expr(accounts::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(&self.db)
            .await
            .context("consume usage counter")?;
        Ok(result.rows_affected > 0)
    }

    async fn apply_state(
        &self,
        id: Uuid,
        plan: Option<PlanSelection>,
        status: Option<AccountStatus>,
        is_active: Option<bool>,
    ) -> Result<(), AccountsServiceError> {
        let mut am = accounts::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(plan) = plan {
            am.plan_selection = Set(plan.as_str().to_owned());
        }
        if let Some(status) = status {
            am.status = Set(status.as_str().to_owned());
        }
        if let Some(active) = is_active {
            am.is_active = Set(active);
        }
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await.context("apply account state")?;
        Ok(())
    }

    async fn any_admin_exists(&self) -> Result<bool, AccountsServiceError> {
        let existing = accounts::Entity::find()
            .filter(accounts::Column::Role.eq(AccountRole::Admin.as_str()))
            .one(&self.db)
            .await
            .context("find existing admin")?;
        Ok(existing.is_some())
    }

    async fn promote_to_admin(&self, id: Uuid) -> Result<(), AccountsServiceError> {
        let am = accounts::ActiveModel {
            id: Set(id),
            role: Set(AccountRole::Admin.as_str().to_owned()),
            status: Set(AccountStatus::Active.as_str().to_owned()),
            is_active: Set(true),
            plan_selection: Set(PlanSelection::Subscription.as_str().to_owned()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        am.update(&self.db).await.context("promote to admin")?;
        Ok(())
    }
}

/// Narrow a stored row to the typed domain account. This is the single
/// place raw role/status/plan strings are normalized; unknown values are a
/// data fault, surfaced as internal errors rather than guessed at.
fn account_from_model(model: accounts::Model) -> Result<Account, AccountsServiceError> {
    let role = AccountRole::parse_str(&model.role)
        .ok_or_else(|| anyhow::anyhow!("unknown role {:?} on account {}", model.role, model.id))?;
    let status = AccountStatus::parse_str(&model.status).ok_or_else(|| {
        anyhow::anyhow!("unknown status {:?} on account {}", model.status, model.id)
    })?;
    let plan_selection = PlanSelection::parse_str(&model.plan_selection).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown plan {:?} on account {}",
            model.plan_selection,
            model.id
        )
    })?;
    Ok(Account {
        id: model.id,
        email: model.email,
        full_name: model.full_name,
        organization: model.organization,
        role,
        status,
        is_active: model.is_active,
        plan_selection,
        created_at: model.created_at,
        generation_count: model.generation_count,
        chat_message_count: model.chat_message_count,
        updated_at: model.updated_at,
    })
}

// ── Notification outbox ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbNotificationOutbox {
    pub db: DatabaseConnection,
}

impl NotificationOutbox for DbNotificationOutbox {
    async fn enqueue(&self, event: &NotificationEvent) -> Result<(), AccountsServiceError> {
        let now = Utc::now();
        outbox_events::ActiveModel {
            id: Set(event.id),
            kind: Set(event.kind.clone()),
            payload: Set(event.payload.clone()),
            idempotency_key: Set(event.idempotency_key.clone()),
            attempts: Set(0),
            last_error: Set(None),
            created_at: Set(now),
            next_attempt_at: Set(now),
            processed_at: Set(None),
            failed_at: Set(None),
        }
        .insert(&self.db)
        .await
        .context("enqueue outbox event")?;
        Ok(())
    }
}
