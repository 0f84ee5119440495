use uuid::Uuid;

use lutrin_domain::account::AccountStatus;
use lutrin_domain::pagination::{PageRequest, Sort};

use crate::domain::repository::AccountRepository;
use crate::domain::types::Account;
use crate::error::AccountsServiceError;

// ── GetAccount ───────────────────────────────────────────────────────────────

pub struct GetAccountUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> GetAccountUseCase<R> {
    pub async fn execute(&self, account_id: Uuid) -> Result<Account, AccountsServiceError> {
        self.repo
            .find_by_id(account_id)
            .await?
            .ok_or(AccountsServiceError::AccountNotFound)
    }
}

// ── ListAccounts ─────────────────────────────────────────────────────────────

/// Admin listing; the approval queue reads status=pending oldest-first.
pub struct ListAccountsUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> ListAccountsUseCase<R> {
    pub async fn execute(
        &self,
        status: Option<AccountStatus>,
        sort: Sort,
        page: PageRequest,
    ) -> Result<Vec<Account>, AccountsServiceError> {
        self.repo.list(status, sort, page.clamped()).await
    }
}
