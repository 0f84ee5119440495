use uuid::Uuid;

use lutrin_domain::account::{AccountStatus, PlanSelection};

use crate::domain::repository::{AccountRepository, NotificationOutbox};
use crate::domain::types::{Account, NotificationEvent};
use crate::error::AccountsServiceError;

/// Billing-confirmed subscription activation.
///
/// Second entry point into the status machine, driven by the payment
/// provider's webhook: the plan flips to `Subscription` and the account is
/// activated, with the same forced `is_active=true` and approval
/// notification as an admin approval, but only on an actual transition to
/// Active. An already-active (possibly suspended) account keeps its
/// kill-switch untouched.
pub struct ConfirmSubscriptionUseCase<R, N>
where
    R: AccountRepository,
    N: NotificationOutbox,
{
    pub repo: R,
    pub outbox: N,
}

impl<R, N> ConfirmSubscriptionUseCase<R, N>
where
    R: AccountRepository,
    N: NotificationOutbox,
{
    pub async fn execute(&self, account_id: Uuid) -> Result<Account, AccountsServiceError> {
        let account = self
            .repo
            .find_by_id(account_id)
            .await?
            .ok_or(AccountsServiceError::AccountNotFound)?;

        let becomes_active = account.status != AccountStatus::Active;
        let is_active = becomes_active.then_some(true);

        self.repo
            .apply_state(
                account.id,
                Some(PlanSelection::Subscription),
                Some(AccountStatus::Active),
                is_active,
            )
            .await?;

        if becomes_active {
            let event = NotificationEvent::approval(&account);
            if let Err(e) = self.outbox.enqueue(&event).await {
                tracing::warn!(
                    error = %e,
                    account_id = %account.id,
                    "failed to enqueue subscription approval notification"
                );
            }
        }

        self.repo
            .find_by_id(account.id)
            .await?
            .ok_or(AccountsServiceError::AccountNotFound)
    }
}
