use std::sync::{Arc, Mutex};

use chrono::{Duration, Utc};
use uuid::Uuid;

use lutrin_accounts::domain::repository::{AccountRepository, NotificationOutbox};
use lutrin_accounts::domain::types::{Account, NotificationEvent, UsageAction};
use lutrin_accounts::error::AccountsServiceError;
use lutrin_domain::account::{AccountRole, AccountStatus, PlanSelection};
use lutrin_domain::pagination::{PageRequest, Sort};

// ── MockAccountRepo ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockAccountRepo {
    pub accounts: Arc<Mutex<Vec<Account>>>,
}

impl MockAccountRepo {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self {
            accounts: Arc::new(Mutex::new(accounts)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Current stored snapshot of an account, for post-execution assertions.
    pub fn stored(&self, id: Uuid) -> Account {
        self.accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .expect("account present in mock repo")
    }
}

impl AccountRepository for MockAccountRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, AccountsServiceError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountsServiceError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn create(&self, account: &Account) -> Result<(), AccountsServiceError> {
        let mut accounts = self.accounts.lock().unwrap();
        // Models the unique email index.
        if accounts.iter().any(|a| a.email == account.email) {
            return Err(AccountsServiceError::AccountAlreadyExists);
        }
        accounts.push(account.clone());
        Ok(())
    }

    async fn list(
        &self,
        status: Option<AccountStatus>,
        sort: Sort,
        page: PageRequest,
    ) -> Result<Vec<Account>, AccountsServiceError> {
        let accounts = self.accounts.lock().unwrap();
        let mut rows: Vec<Account> = accounts
            .iter()
            .filter(|a| status.is_none_or(|s| a.status == s))
            .cloned()
            .collect();
        rows.sort_by_key(|a| a.created_at);
        if sort == Sort::Desc {
            rows.reverse();
        }
        Ok(rows
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.per_page as usize)
            .collect())
    }

    async fn try_consume(
        &self,
        id: Uuid,
        action: UsageAction,
        limit: i32,
    ) -> Result<bool, AccountsServiceError> {
        // Compare-and-increment under one lock, like the conditional UPDATE
        // the real repository issues.
        let mut accounts = self.accounts.lock().unwrap();
        let Some(account) = accounts.iter_mut().find(|a| a.id == id) else {
            return Ok(false);
        };
        let counter = match action {
            UsageAction::GenerateCourse => &mut account.generation_count,
            UsageAction::ChatMessage => &mut account.chat_message_count,
        };
        if *counter < limit {
            *counter += 1;
            account.updated_at = Utc::now();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn apply_state(
        &self,
        id: Uuid,
        plan: Option<PlanSelection>,
        status: Option<AccountStatus>,
        is_active: Option<bool>,
    ) -> Result<(), AccountsServiceError> {
        let mut accounts = self.accounts.lock().unwrap();
        if let Some(account) = accounts.iter_mut().find(|a| a.id == id) {
            if let Some(plan) = plan {
                account.plan_selection = plan;
            }
            if let Some(status) = status {
                account.status = status;
            }
            if let Some(active) = is_active {
                account.is_active = active;
            }
            account.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn any_admin_exists(&self) -> Result<bool, AccountsServiceError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .any(|a| a.role == AccountRole::Admin))
    }

    async fn promote_to_admin(&self, id: Uuid) -> Result<(), AccountsServiceError> {
        let mut accounts = self.accounts.lock().unwrap();
        if let Some(account) = accounts.iter_mut().find(|a| a.id == id) {
            account.role = AccountRole::Admin;
            account.status = AccountStatus::Active;
            account.is_active = true;
            account.plan_selection = PlanSelection::Subscription;
            account.updated_at = Utc::now();
        }
        Ok(())
    }
}

// ── MockOutbox ───────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockOutbox {
    pub events: Arc<Mutex<Vec<NotificationEvent>>>,
    pub fail: bool,
}

impl MockOutbox {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(vec![])),
            fail: false,
        }
    }

    /// An outbox whose enqueue always errors, for best-effort-path tests.
    pub fn failing() -> Self {
        Self {
            events: Arc::new(Mutex::new(vec![])),
            fail: true,
        }
    }

    pub fn kinds(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|e| e.kind.clone())
            .collect()
    }
}

impl NotificationOutbox for MockOutbox {
    async fn enqueue(&self, event: &NotificationEvent) -> Result<(), AccountsServiceError> {
        if self.fail {
            return Err(AccountsServiceError::Internal(anyhow::anyhow!(
                "outbox unavailable"
            )));
        }
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn trial_teacher() -> Account {
    let now = Utc::now();
    Account {
        id: Uuid::new_v4(),
        email: "prof@lycee-condorcet.example".to_owned(),
        full_name: "Prof Martin".to_owned(),
        organization: "Lycée Condorcet".to_owned(),
        role: AccountRole::Teacher,
        status: AccountStatus::Active,
        is_active: true,
        plan_selection: PlanSelection::Trial,
        created_at: Some(now - Duration::days(2)),
        generation_count: 0,
        chat_message_count: 0,
        updated_at: now,
    }
}

pub fn pending_school_admin() -> Account {
    let mut account = trial_teacher();
    account.email = "direction@college.example".to_owned();
    account.full_name = "Mme Dupont".to_owned();
    account.role = AccountRole::SchoolAdmin;
    account.status = AccountStatus::Pending;
    account
}

pub fn admin_account() -> Account {
    let mut account = trial_teacher();
    account.email = "ops@lutrin.example".to_owned();
    account.full_name = "Operator".to_owned();
    account.role = AccountRole::Admin;
    account.plan_selection = PlanSelection::Subscription;
    account
}
