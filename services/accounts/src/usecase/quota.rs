use chrono::{DateTime, Utc};
use uuid::Uuid;

use lutrin_domain::account::PlanSelection;

use crate::domain::repository::AccountRepository;
use crate::domain::types::{Admission, DenialReason, UsageAction};
use crate::error::AccountsServiceError;

// ── ConsumeUsage ─────────────────────────────────────────────────────────────

/// Gate a quota-consuming action and charge it on admission.
///
/// Consumption is charged when the action is admitted, not when it
/// succeeds: if the caller's LLM request fails afterwards, the unit stays
/// spent. Charging on success would stretch the atomicity window across the
/// external call.
pub struct ConsumeUsageUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> ConsumeUsageUseCase<R> {
    pub async fn execute(
        &self,
        account_id: Uuid,
        action: UsageAction,
    ) -> Result<Admission, AccountsServiceError> {
        let account = self
            .repo
            .find_by_id(account_id)
            .await?
            .ok_or(AccountsServiceError::AccountNotFound)?;

        // Admins and subscribers are unlimited; counters stay untouched.
        if account.quota_exempt() {
            return Ok(Admission::Admitted);
        }

        // A missing creation date counts as expired (fail closed): the
        // legacy backend gave such rows the benefit of the doubt, which let
        // unanchored accounts consume forever.
        if account.trial_expired(Utc::now()) {
            return Ok(Admission::Denied(DenialReason::TrialExpired));
        }

        // Single atomic compare-and-increment; denial mutates nothing.
        let admitted = self
            .repo
            .try_consume(account.id, action, action.limit())
            .await?;
        if admitted {
            Ok(Admission::Admitted)
        } else {
            Ok(Admission::Denied(DenialReason::QuotaExceeded))
        }
    }
}

// ── GetUsage ─────────────────────────────────────────────────────────────────

/// Usage snapshot for the dashboard: counters against limits plus the trial
/// horizon.
#[derive(Debug, Clone)]
pub struct UsageSummary {
    pub plan_selection: PlanSelection,
    pub quota_exempt: bool,
    pub generation_count: i32,
    pub generation_limit: i32,
    pub chat_message_count: i32,
    pub chat_message_limit: i32,
    /// `None` for quota-exempt accounts (no trial applies) and for legacy
    /// accounts without a creation date.
    pub trial_ends_at: Option<DateTime<Utc>>,
}

pub struct GetUsageUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> GetUsageUseCase<R> {
    pub async fn execute(&self, account_id: Uuid) -> Result<UsageSummary, AccountsServiceError> {
        let account = self
            .repo
            .find_by_id(account_id)
            .await?
            .ok_or(AccountsServiceError::AccountNotFound)?;

        let quota_exempt = account.quota_exempt();
        Ok(UsageSummary {
            plan_selection: account.plan_selection,
            quota_exempt,
            generation_count: account.generation_count,
            generation_limit: UsageAction::GenerateCourse.limit(),
            chat_message_count: account.chat_message_count,
            chat_message_limit: UsageAction::ChatMessage.limit(),
            trial_ends_at: if quota_exempt {
                None
            } else {
                account.trial_ends_at()
            },
        })
    }
}
