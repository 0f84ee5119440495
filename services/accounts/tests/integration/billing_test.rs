use uuid::Uuid;

use lutrin_accounts::error::AccountsServiceError;
use lutrin_accounts::usecase::billing::ConfirmSubscriptionUseCase;
use lutrin_domain::account::{AccountStatus, PlanSelection};

use super::helpers::{MockAccountRepo, MockOutbox, pending_school_admin, trial_teacher};

#[tokio::test]
async fn should_activate_and_subscribe_on_completed_checkout() {
    let mut account = pending_school_admin();
    account.is_active = false;
    let id = account.id;
    let repo = MockAccountRepo::new(vec![account]);
    let outbox = MockOutbox::new();
    let usecase = ConfirmSubscriptionUseCase {
        repo: repo.clone(),
        outbox: outbox.clone(),
    };

    usecase.execute(id).await.unwrap();

    let stored = repo.stored(id);
    assert_eq!(stored.plan_selection, PlanSelection::Subscription);
    assert_eq!(stored.status, AccountStatus::Active);
    assert!(stored.is_active);
    assert_eq!(outbox.kinds(), vec!["account_approved"]);
}

#[tokio::test]
async fn should_keep_kill_switch_when_already_active() {
    // A suspended (is_active=false) but approved account that pays stays
    // suspended; payment is not a backdoor around the kill switch.
    let mut account = trial_teacher();
    account.status = AccountStatus::Active;
    account.is_active = false;
    let id = account.id;
    let repo = MockAccountRepo::new(vec![account]);
    let outbox = MockOutbox::new();
    let usecase = ConfirmSubscriptionUseCase {
        repo: repo.clone(),
        outbox: outbox.clone(),
    };

    usecase.execute(id).await.unwrap();

    let stored = repo.stored(id);
    assert_eq!(stored.plan_selection, PlanSelection::Subscription);
    assert!(!stored.is_active);
    assert!(outbox.kinds().is_empty());
}

#[tokio::test]
async fn should_return_the_persisted_snapshot() {
    let account = pending_school_admin();
    let id = account.id;
    let repo = MockAccountRepo::new(vec![account]);
    let usecase = ConfirmSubscriptionUseCase {
        repo: repo.clone(),
        outbox: MockOutbox::new(),
    };

    let updated = usecase.execute(id).await.unwrap();

    let stored = repo.stored(id);
    assert_eq!(updated.updated_at, stored.updated_at);
    assert_eq!(updated.plan_selection, stored.plan_selection);
    assert_eq!(updated.status, stored.status);
}

#[tokio::test]
async fn should_error_on_unknown_account() {
    let usecase = ConfirmSubscriptionUseCase {
        repo: MockAccountRepo::empty(),
        outbox: MockOutbox::new(),
    };
    let result = usecase.execute(Uuid::new_v4()).await;
    assert!(matches!(result, Err(AccountsServiceError::AccountNotFound)));
}

#[tokio::test]
async fn should_confirm_subscription_even_when_outbox_is_down() {
    let account = pending_school_admin();
    let id = account.id;
    let repo = MockAccountRepo::new(vec![account]);
    let usecase = ConfirmSubscriptionUseCase {
        repo: repo.clone(),
        outbox: MockOutbox::failing(),
    };

    assert!(usecase.execute(id).await.is_ok());
    assert_eq!(repo.stored(id).plan_selection, PlanSelection::Subscription);
}
