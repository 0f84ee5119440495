use chrono::Utc;
use uuid::Uuid;

use lutrin_domain::account::{AccountRole, AccountStatus, PlanSelection, PlanTier};

use crate::domain::repository::{AccountRepository, NotificationOutbox};
use crate::domain::types::{Account, NotificationEvent, validate_email};
use crate::error::AccountsServiceError;

pub struct RegisterAccountInput {
    pub email: String,
    pub full_name: String,
    pub organization: String,
    pub plan_tier: PlanTier,
}

pub struct RegisterAccountOutput {
    pub account: Account,
    /// Paid tiers still need billing checkout; the plan stays `Trial`
    /// until the payment confirmation arrives.
    pub requires_checkout: bool,
}

/// Create an account at first contact.
///
/// New accounts land in the admin approval queue (status=pending) but keep
/// `is_active=true` so the onboarding flow stays reachable before approval.
/// The first user of a school administers it (role=school_admin).
pub struct RegisterAccountUseCase<R, N>
where
    R: AccountRepository,
    N: NotificationOutbox,
{
    pub repo: R,
    pub outbox: N,
}

impl<R, N> RegisterAccountUseCase<R, N>
where
    R: AccountRepository,
    N: NotificationOutbox,
{
    pub async fn execute(
        &self,
        input: RegisterAccountInput,
    ) -> Result<RegisterAccountOutput, AccountsServiceError> {
        if !validate_email(&input.email) {
            return Err(AccountsServiceError::InvalidEmail);
        }
        if self.repo.find_by_email(&input.email).await?.is_some() {
            return Err(AccountsServiceError::AccountAlreadyExists);
        }

        let now = Utc::now();
        let account = Account {
            id: Uuid::now_v7(),
            email: input.email,
            full_name: input.full_name,
            organization: input.organization,
            role: AccountRole::SchoolAdmin,
            status: AccountStatus::Pending,
            is_active: true,
            plan_selection: PlanSelection::Trial,
            created_at: Some(now),
            generation_count: 0,
            chat_message_count: 0,
            updated_at: now,
        };
        self.repo.create(&account).await?;

        let event = NotificationEvent::welcome(&account);
        if let Err(e) = self.outbox.enqueue(&event).await {
            tracing::warn!(
                error = %e,
                account_id = %account.id,
                "failed to enqueue welcome notification"
            );
        }

        Ok(RegisterAccountOutput {
            requires_checkout: input.plan_tier.requires_checkout(),
            account,
        })
    }
}
