//! Store/fetch/update round trips against a real `PostgreSQL` database.

use eyre::{OptionExt, Result};
use missionflow::account::adapters::postgres::PostgresAccountRepository;
use missionflow::account::domain::{Account, AccountId, AccountProfile, AccountStatus};
use missionflow::account::ports::AccountRepository;
use missionflow::identity::domain::ActorEmail;
use missionflow::long_term::adapters::postgres::PostgresLongTermProductRepository;
use missionflow::long_term::domain::{LongTermProduct, SetupItem};
use missionflow::long_term::ports::LongTermProductRepository;
use missionflow::task::adapters::postgres::PostgresTaskRepository;
use missionflow::task::domain::{ChecklistItem, ProductName, ReviewOutcome, Task, TaskStatus};
use missionflow::task::ports::{TaskRepository, TaskRepositoryError};
use mockable::{Clock, DefaultClock};

use super::helpers::{test_pool, unique_label};

fn sample_account(label: &str) -> Result<Account> {
    let id = AccountId::new(label)?;
    let profile = AccountProfile::new("Grace loves tea")?.with_phone_id("P-07");
    Ok(Account::enroll(id, profile, &DefaultClock))
}

fn sample_task(label: &str) -> Result<Task> {
    let id = AccountId::new(label)?;
    let name = ProductName::new("Vitamin C Serum")?;
    let creator = ActorEmail::new("user_a@x.com")?;
    Ok(Task::new(id, name, creator, &DefaultClock))
}

fn promoted_product(label: &str) -> Result<LongTermProduct> {
    let clock = DefaultClock;
    let mut task = sample_task(label)?;
    for item in ChecklistItem::ALL {
        task.toggle_checklist(item, &clock);
    }
    task.publish(&clock)?;
    task.record_decision(ReviewOutcome::Promoted, &clock)?;
    Ok(LongTermProduct::promote_from(&task, &clock)?)
}

#[tokio::test(flavor = "multi_thread")]
async fn account_round_trip() -> Result<()> {
    let Some(pool) = test_pool()? else {
        return Ok(());
    };
    let repository = PostgresAccountRepository::new(pool);
    let mut account = sample_account(&unique_label("acct"))?;

    repository.store(&account).await?;
    account.record_warming_views(1200, &DefaultClock)?;
    account.mark_qualified(&DefaultClock)?;
    repository.update(&account).await?;

    let fetched = repository
        .find_by_id(account.id())
        .await?
        .ok_or_eyre("stored account should be found")?;
    assert_eq!(fetched.status(), AccountStatus::Active);
    assert_eq!(fetched.warming_view_count(), 1200);
    assert_eq!(fetched, account);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn task_round_trip_preserves_checklists_and_outcome() -> Result<()> {
    let Some(pool) = test_pool()? else {
        return Ok(());
    };
    let repository = PostgresTaskRepository::new(pool);
    let clock = DefaultClock;
    let mut task = sample_task(&unique_label("acct"))?;

    repository.store(&task).await?;
    for item in ChecklistItem::ALL {
        task.toggle_checklist(item, &clock);
    }
    task.publish(&clock)?;
    task.record_decision(ReviewOutcome::Promoted, &clock)?;
    repository.update(&task).await?;

    let fetched = repository
        .find_by_id(task.id())
        .await?
        .ok_or_eyre("stored mission should be found")?;
    assert_eq!(fetched.status(), TaskStatus::Published);
    assert_eq!(fetched.review_outcome(), Some(ReviewOutcome::Promoted));
    assert_eq!(fetched.mission_code(), task.mission_code());
    assert!(fetched.sop().is_complete());
    assert!(fetched.prep().is_complete());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn duplicate_task_ids_are_rejected() -> Result<()> {
    let Some(pool) = test_pool()? else {
        return Ok(());
    };
    let repository = PostgresTaskRepository::new(pool);
    let task = sample_task(&unique_label("acct"))?;

    repository.store(&task).await?;
    let result = repository.store(&task).await;

    assert!(matches!(
        result,
        Err(TaskRepositoryError::DuplicateTask(id)) if id == task.id()
    ));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn updating_a_missing_task_reports_not_found() -> Result<()> {
    let Some(pool) = test_pool()? else {
        return Ok(());
    };
    let repository = PostgresTaskRepository::new(pool);
    let task = sample_task(&unique_label("acct"))?;

    let result = repository.update(&task).await;

    assert!(matches!(result, Err(TaskRepositoryError::NotFound(_))));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn long_term_round_trip_preserves_setup_and_cadence() -> Result<()> {
    let Some(pool) = test_pool()? else {
        return Ok(());
    };
    let repository = PostgresLongTermProductRepository::new(pool);
    let clock = DefaultClock;
    let mut product = promoted_product(&unique_label("acct"))?;

    repository.store(&product).await?;
    product.toggle_setup(SetupItem::CommentLibrary, &clock);
    product.mark_daily_check(&clock);
    product.mark_weekly_cover(&clock);
    repository.update(&product).await?;

    let fetched = repository
        .find_by_id(product.id())
        .await?
        .ok_or_eyre("stored product should be found")?;
    assert!(fetched.setup().comment_library);
    assert!(!fetched.setup().seeded_reviews);
    let status = fetched.cadence_status(clock.utc());
    assert!(status.daily_check_done);
    assert!(status.weekly_cover_done);
    Ok(())
}
