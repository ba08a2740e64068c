//! Service orchestration tests for account pool operations.

use std::sync::Arc;

use crate::account::{
    adapters::memory::InMemoryAccountRepository,
    domain::{Account, AccountId, AccountProfile, AccountStatus},
    ports::{AccountRepository, AccountRepositoryError, AccountRepositoryResult},
    services::{AccountPoolError, AccountPoolService, EnrollAccountRequest},
};
use async_trait::async_trait;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = AccountPoolService<InMemoryAccountRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    AccountPoolService::new(
        Arc::new(InMemoryAccountRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Repository whose mutations always fail, for rollback verification.
#[derive(Debug, Clone, Default)]
struct FailingAccountRepository;

impl FailingAccountRepository {
    fn failure<T>() -> AccountRepositoryResult<T> {
        Err(AccountRepositoryError::persistence(std::io::Error::other(
            "storage offline",
        )))
    }
}

#[async_trait]
impl AccountRepository for FailingAccountRepository {
    async fn store(&self, _account: &Account) -> AccountRepositoryResult<()> {
        Self::failure()
    }

    async fn update(&self, _account: &Account) -> AccountRepositoryResult<()> {
        Self::failure()
    }

    async fn find_by_id(&self, _id: &AccountId) -> AccountRepositoryResult<Option<Account>> {
        Ok(None)
    }

    async fn list(&self) -> AccountRepositoryResult<Vec<Account>> {
        Ok(Vec::new())
    }

    async fn list_by_status(
        &self,
        _status: AccountStatus,
    ) -> AccountRepositoryResult<Vec<Account>> {
        Ok(Vec::new())
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn enroll_persists_and_is_retrievable(service: TestService) {
    let request = EnrollAccountRequest::new("7", "Grace loves tea")
        .with_phone_id("P-07")
        .with_sim_slot("slot 2")
        .with_note("new device");

    let enrolled = service
        .enroll(request)
        .await
        .expect("enrollment should succeed");
    let id = AccountId::new("7").expect("valid account id");
    let fetched = service.find(&id).await.expect("lookup should succeed");

    assert_eq!(fetched, Some(enrolled));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_label_is_rejected(service: TestService) {
    service
        .enroll(EnrollAccountRequest::new("7", "First persona"))
        .await
        .expect("first enrollment should succeed");

    let result = service
        .enroll(EnrollAccountRequest::new("7", "Second persona"))
        .await;

    assert!(matches!(
        result,
        Err(AccountPoolError::Repository(
            AccountRepositoryError::DuplicateAccount(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn roster_lists_newest_first(service: TestService) {
    for label in ["1", "2", "3"] {
        service
            .enroll(EnrollAccountRequest::new(label, format!("Persona {label}")))
            .await
            .expect("enrollment should succeed");
    }

    let roster = service.roster().await.expect("roster should load");

    let labels: Vec<&str> = roster.iter().map(|account| account.id().as_str()).collect();
    assert_eq!(labels, vec!["3", "2", "1"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn active_accounts_excludes_warming_and_abandoned(service: TestService) {
    let mut qualified = service
        .enroll(EnrollAccountRequest::new("a1", "Qualified persona"))
        .await
        .expect("enrollment should succeed");
    service
        .mark_qualified(&mut qualified)
        .await
        .expect("qualification should succeed");

    let mut written_off = service
        .enroll(EnrollAccountRequest::new("a2", "Abandoned persona"))
        .await
        .expect("enrollment should succeed");
    service
        .mark_abandoned(&mut written_off)
        .await
        .expect("abandonment should succeed");

    service
        .enroll(EnrollAccountRequest::new("a3", "Warming persona"))
        .await
        .expect("enrollment should succeed");

    let active = service
        .active_accounts()
        .await
        .expect("listing should succeed");

    let labels: Vec<&str> = active.iter().map(|account| account.id().as_str()).collect();
    assert_eq!(labels, vec!["a1"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_update_rolls_the_aggregate_back() {
    let service = AccountPoolService::new(Arc::new(FailingAccountRepository), Arc::new(DefaultClock));
    let clock = DefaultClock;
    let id = AccountId::new("7").expect("valid account id");
    let profile = AccountProfile::new("Grace loves tea").expect("valid profile");
    let mut account = Account::enroll(id, profile, &clock);
    let before = account.clone();

    let result = service.record_warming_views(&mut account, 240).await;

    assert!(matches!(
        result,
        Err(AccountPoolError::Repository(
            AccountRepositoryError::Persistence(_)
        ))
    ));
    assert_eq!(account, before);
}
