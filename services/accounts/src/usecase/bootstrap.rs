use chrono::Utc;
use uuid::Uuid;

use lutrin_domain::account::{AccountRole, AccountStatus, PlanSelection};

use crate::domain::repository::AccountRepository;
use crate::domain::types::{Account, validate_email};
use crate::error::AccountsServiceError;

pub struct BootstrapAdminInput {
    pub email: String,
    pub full_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapAction {
    Created,
    Promoted,
}

impl BootstrapAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Promoted => "promoted",
        }
    }
}

/// One-shot operator-account seeding.
///
/// An explicit, secret-gated step (the handler checks the setup secret and
/// the enable flag) instead of auto-promoting a well-known email at login
/// time. Refuses as soon as any admin exists, so it cannot be replayed to
/// mint further admins.
pub struct BootstrapAdminUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> BootstrapAdminUseCase<R> {
    pub async fn execute(
        &self,
        input: BootstrapAdminInput,
    ) -> Result<(Account, BootstrapAction), AccountsServiceError> {
        if !validate_email(&input.email) {
            return Err(AccountsServiceError::InvalidEmail);
        }
        if self.repo.any_admin_exists().await? {
            return Err(AccountsServiceError::AdminAlreadyExists);
        }

        if let Some(existing) = self.repo.find_by_email(&input.email).await? {
            self.repo.promote_to_admin(existing.id).await?;
            let promoted = self
                .repo
                .find_by_id(existing.id)
                .await?
                .ok_or(AccountsServiceError::AccountNotFound)?;
            return Ok((promoted, BootstrapAction::Promoted));
        }

        let now = Utc::now();
        let account = Account {
            id: Uuid::now_v7(),
            email: input.email,
            full_name: input.full_name,
            organization: "Operator".into(),
            role: AccountRole::Admin,
            status: AccountStatus::Active,
            is_active: true,
            plan_selection: PlanSelection::Subscription,
            created_at: Some(now),
            generation_count: 0,
            chat_message_count: 0,
            updated_at: now,
        };
        self.repo.create(&account).await?;
        Ok((account, BootstrapAction::Created))
    }
}
