use uuid::Uuid;

use lutrin_accounts::error::AccountsServiceError;
use lutrin_accounts::usecase::approval::{ApplyStatusChangeUseCase, StatusChangeInput};
use lutrin_domain::account::AccountStatus;

use super::helpers::{MockAccountRepo, MockOutbox, admin_account, pending_school_admin};

#[tokio::test]
async fn should_force_active_flag_and_notify_on_approval() {
    let admin = admin_account();
    let mut target = pending_school_admin();
    target.is_active = false;
    let target_id = target.id;
    let repo = MockAccountRepo::new(vec![admin.clone(), target]);
    let outbox = MockOutbox::new();
    let usecase = ApplyStatusChangeUseCase {
        repo: repo.clone(),
        outbox: outbox.clone(),
    };

    let updated = usecase
        .execute(
            admin.id,
            target_id,
            StatusChangeInput {
                new_status: Some(AccountStatus::Active),
                new_is_active: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.status, AccountStatus::Active);
    assert!(updated.is_active);
    let stored = repo.stored(target_id);
    assert_eq!(stored.status, AccountStatus::Active);
    assert!(stored.is_active);
    assert_eq!(outbox.kinds(), vec!["account_approved"]);
}

#[tokio::test]
async fn should_return_the_persisted_snapshot() {
    let admin = admin_account();
    let target = pending_school_admin();
    let target_id = target.id;
    let repo = MockAccountRepo::new(vec![admin.clone(), target]);
    let usecase = ApplyStatusChangeUseCase {
        repo: repo.clone(),
        outbox: MockOutbox::new(),
    };

    let updated = usecase
        .execute(
            admin.id,
            target_id,
            StatusChangeInput {
                new_status: Some(AccountStatus::Active),
                new_is_active: None,
            },
        )
        .await
        .unwrap();

    let stored = repo.stored(target_id);
    assert_eq!(updated.updated_at, stored.updated_at);
    assert_eq!(updated.status, stored.status);
    assert_eq!(updated.is_active, stored.is_active);
}

#[tokio::test]
async fn should_not_notify_when_reapplying_active() {
    let admin = admin_account();
    let mut target = pending_school_admin();
    target.status = AccountStatus::Active;
    let target_id = target.id;
    let repo = MockAccountRepo::new(vec![admin.clone(), target]);
    let outbox = MockOutbox::new();
    let usecase = ApplyStatusChangeUseCase {
        repo,
        outbox: outbox.clone(),
    };

    usecase
        .execute(
            admin.id,
            target_id,
            StatusChangeInput {
                new_status: Some(AccountStatus::Active),
                new_is_active: None,
            },
        )
        .await
        .unwrap();

    assert!(outbox.kinds().is_empty());
}

#[tokio::test]
async fn should_force_inactive_and_notify_on_rejection() {
    let admin = admin_account();
    let target = pending_school_admin();
    let target_id = target.id;
    let repo = MockAccountRepo::new(vec![admin.clone(), target]);
    let outbox = MockOutbox::new();
    let usecase = ApplyStatusChangeUseCase {
        repo: repo.clone(),
        outbox: outbox.clone(),
    };

    usecase
        .execute(
            admin.id,
            target_id,
            StatusChangeInput {
                new_status: Some(AccountStatus::Rejected),
                new_is_active: None,
            },
        )
        .await
        .unwrap();

    let stored = repo.stored(target_id);
    assert_eq!(stored.status, AccountStatus::Rejected);
    assert!(!stored.is_active);
    assert_eq!(outbox.kinds(), vec!["account_rejected"]);
}

#[tokio::test]
async fn should_not_renotify_an_already_rejected_account() {
    let admin = admin_account();
    let mut target = pending_school_admin();
    target.status = AccountStatus::Rejected;
    target.is_active = true;
    let target_id = target.id;
    let repo = MockAccountRepo::new(vec![admin.clone(), target]);
    let outbox = MockOutbox::new();
    let usecase = ApplyStatusChangeUseCase {
        repo: repo.clone(),
        outbox: outbox.clone(),
    };

    usecase
        .execute(
            admin.id,
            target_id,
            StatusChangeInput {
                new_status: Some(AccountStatus::Rejected),
                new_is_active: None,
            },
        )
        .await
        .unwrap();

    // Rejection still forces the kill switch, but fires no duplicate event.
    assert!(!repo.stored(target_id).is_active);
    assert!(outbox.kinds().is_empty());
}

#[tokio::test]
async fn should_toggle_kill_switch_without_touching_status() {
    let admin = admin_account();
    let mut target = pending_school_admin();
    target.status = AccountStatus::Active;
    let target_id = target.id;
    let repo = MockAccountRepo::new(vec![admin.clone(), target]);
    let outbox = MockOutbox::new();
    let usecase = ApplyStatusChangeUseCase {
        repo: repo.clone(),
        outbox: outbox.clone(),
    };

    usecase
        .execute(
            admin.id,
            target_id,
            StatusChangeInput {
                new_status: None,
                new_is_active: Some(false),
            },
        )
        .await
        .unwrap();

    let stored = repo.stored(target_id);
    assert_eq!(stored.status, AccountStatus::Active);
    assert!(!stored.is_active);
    assert!(outbox.kinds().is_empty());
}

#[tokio::test]
async fn should_forbid_admin_self_deactivation() {
    let admin = admin_account();
    let admin_id = admin.id;
    let repo = MockAccountRepo::new(vec![admin]);
    let usecase = ApplyStatusChangeUseCase {
        repo: repo.clone(),
        outbox: MockOutbox::new(),
    };

    let result = usecase
        .execute(
            admin_id,
            admin_id,
            StatusChangeInput {
                new_status: None,
                new_is_active: Some(false),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AccountsServiceError::SelfActionForbidden)
    ));
    assert!(repo.stored(admin_id).is_active);
}

#[tokio::test]
async fn should_forbid_admin_self_demotion() {
    let admin = admin_account();
    let admin_id = admin.id;
    let repo = MockAccountRepo::new(vec![admin]);
    let usecase = ApplyStatusChangeUseCase {
        repo: repo.clone(),
        outbox: MockOutbox::new(),
    };

    for status in [AccountStatus::Pending, AccountStatus::Rejected] {
        let result = usecase
            .execute(
                admin_id,
                admin_id,
                StatusChangeInput {
                    new_status: Some(status),
                    new_is_active: None,
                },
            )
            .await;
        assert!(matches!(
            result,
            Err(AccountsServiceError::SelfActionForbidden)
        ));
    }
    assert_eq!(repo.stored(admin_id).status, AccountStatus::Active);
}

#[tokio::test]
async fn should_allow_admin_to_reconfirm_own_active_status() {
    let admin = admin_account();
    let admin_id = admin.id;
    let repo = MockAccountRepo::new(vec![admin]);
    let usecase = ApplyStatusChangeUseCase {
        repo,
        outbox: MockOutbox::new(),
    };

    let result = usecase
        .execute(
            admin_id,
            admin_id,
            StatusChangeInput {
                new_status: Some(AccountStatus::Active),
                new_is_active: None,
            },
        )
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn should_require_at_least_one_change_field() {
    let admin = admin_account();
    let target = pending_school_admin();
    let target_id = target.id;
    let usecase = ApplyStatusChangeUseCase {
        repo: MockAccountRepo::new(vec![admin.clone(), target]),
        outbox: MockOutbox::new(),
    };

    let result = usecase
        .execute(admin.id, target_id, StatusChangeInput::default())
        .await;
    assert!(matches!(result, Err(AccountsServiceError::MissingData)));
}

#[tokio::test]
async fn should_error_when_target_is_unknown() {
    let admin = admin_account();
    let usecase = ApplyStatusChangeUseCase {
        repo: MockAccountRepo::new(vec![admin.clone()]),
        outbox: MockOutbox::new(),
    };

    let result = usecase
        .execute(
            admin.id,
            Uuid::new_v4(),
            StatusChangeInput {
                new_status: Some(AccountStatus::Active),
                new_is_active: None,
            },
        )
        .await;
    assert!(matches!(result, Err(AccountsServiceError::AccountNotFound)));
}

#[tokio::test]
async fn should_apply_transition_even_when_outbox_is_down() {
    let admin = admin_account();
    let target = pending_school_admin();
    let target_id = target.id;
    let repo = MockAccountRepo::new(vec![admin.clone(), target]);
    let usecase = ApplyStatusChangeUseCase {
        repo: repo.clone(),
        outbox: MockOutbox::failing(),
    };

    let result = usecase
        .execute(
            admin.id,
            target_id,
            StatusChangeInput {
                new_status: Some(AccountStatus::Active),
                new_is_active: None,
            },
        )
        .await;

    assert!(result.is_ok());
    assert_eq!(repo.stored(target_id).status, AccountStatus::Active);
}
