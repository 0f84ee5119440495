use uuid::Uuid;

use lutrin_domain::account::AccountStatus;

use crate::domain::repository::{AccountRepository, NotificationOutbox};
use crate::domain::types::{Account, NotificationEvent};
use crate::error::AccountsServiceError;

/// Requested change; `None` fields are left alone. At least one field must
/// be present.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusChangeInput {
    pub new_status: Option<AccountStatus>,
    pub new_is_active: Option<bool>,
}

/// Admin-driven transitions of `status` and `is_active`.
///
/// The two fields stay independent: an approved account (status=active) can
/// be suspended via `is_active=false` without losing its approval, so
/// lifting the suspension needs no re-approval.
pub struct ApplyStatusChangeUseCase<R, N>
where
    R: AccountRepository,
    N: NotificationOutbox,
{
    pub repo: R,
    pub outbox: N,
}

impl<R, N> ApplyStatusChangeUseCase<R, N>
where
    R: AccountRepository,
    N: NotificationOutbox,
{
    /// Apply the change and return the updated snapshot.
    ///
    /// The caller has already authenticated `acting_admin_id` as an admin;
    /// this enforces the self-protection rule (an admin can neither
    /// deactivate nor demote their own account).
    pub async fn execute(
        &self,
        acting_admin_id: Uuid,
        target_id: Uuid,
        input: StatusChangeInput,
    ) -> Result<Account, AccountsServiceError> {
        if input.new_status.is_none() && input.new_is_active.is_none() {
            return Err(AccountsServiceError::MissingData);
        }

        let target = self
            .repo
            .find_by_id(target_id)
            .await?
            .ok_or(AccountsServiceError::AccountNotFound)?;

        if acting_admin_id == target.id {
            if input.new_is_active == Some(false) {
                return Err(AccountsServiceError::SelfActionForbidden);
            }
            if matches!(
                input.new_status,
                Some(AccountStatus::Pending | AccountStatus::Rejected)
            ) {
                return Err(AccountsServiceError::SelfActionForbidden);
            }
        }

        let old_status = target.status;
        let mut is_active = input.new_is_active;
        let mut notification: Option<NotificationEvent> = None;

        if let Some(new_status) = input.new_status {
            match new_status {
                // Side effects fire on actual transitions only; re-applying
                // the current status is a silent no-op.
                AccountStatus::Active if old_status != AccountStatus::Active => {
                    is_active = Some(true);
                    notification = Some(NotificationEvent::approval(&target));
                }
                AccountStatus::Rejected => {
                    is_active = Some(false);
                    if old_status != AccountStatus::Rejected {
                        notification = Some(NotificationEvent::rejection(&target));
                    }
                }
                _ => {}
            }
        }

        self.repo
            .apply_state(target.id, None, input.new_status, is_active)
            .await?;

        // Best-effort: the transition stands whether or not the
        // notification could be enqueued.
        if let Some(event) = notification {
            if let Err(e) = self.outbox.enqueue(&event).await {
                tracing::warn!(
                    error = %e,
                    account_id = %target.id,
                    kind = %event.kind,
                    "failed to enqueue status notification"
                );
            }
        }

        // Return the persisted row, not an in-memory reconstruction, so the
        // caller sees the store's updated_at and any concurrent changes.
        self.repo
            .find_by_id(target.id)
            .await?
            .ok_or(AccountsServiceError::AccountNotFound)
    }
}
