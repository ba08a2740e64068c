//! End-to-end mission flow: enrollment through publication and review.

use missionflow::account::services::EnrollAccountRequest;
use missionflow::task::domain::{ChecklistItem, ReviewOutcome, TaskStatus};
use missionflow::task::services::CreateTaskRequest;
use rstest::rstest;

use super::helpers::{World, actor, decided_task, qualified_account, world};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn account_warming_feeds_the_mission_pool(world: World) {
    let mut account = world
        .pool
        .enroll(EnrollAccountRequest::new("7", "Grace loves tea").with_phone_id("P-07"))
        .await
        .expect("enrollment should succeed");
    world
        .pool
        .record_warming_views(&mut account, 1200)
        .await
        .expect("view count should record");
    world
        .pool
        .mark_qualified(&mut account)
        .await
        .expect("qualification should succeed");

    let active = world
        .pool
        .active_accounts()
        .await
        .expect("listing should succeed");

    assert_eq!(active.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_mission_walks_planning_ready_published(world: World) {
    qualified_account(&world, "7").await;
    let mut task = world
        .flow
        .create(CreateTaskRequest::new("7", "Vitamin C Serum", "user_a@x.com"))
        .await
        .expect("mission creation should succeed");
    assert_eq!(task.status(), TaskStatus::Planning);

    for item in ChecklistItem::ALL {
        world
            .flow
            .toggle_checklist(&mut task, item)
            .await
            .expect("toggle should persist");
    }
    assert_eq!(task.status(), TaskStatus::Ready);

    world
        .flow
        .publish(&mut task)
        .await
        .expect("ready mission should publish");

    assert_eq!(task.status(), TaskStatus::Published);
    assert!(task.published_at().is_some());
    let stored = world
        .flow
        .find(task.id())
        .await
        .expect("lookup should succeed")
        .expect("mission should exist");
    assert_eq!(stored, task);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn the_board_reflects_each_stage(world: World) {
    qualified_account(&world, "7").await;
    world
        .flow
        .create(CreateTaskRequest::new("7", "Fresh Serum", "user_a@x.com"))
        .await
        .expect("mission creation should succeed");
    decided_task(&world, "7", "Tested Serum", "user_a@x.com", ReviewOutcome::Drop).await;

    let board = world
        .flow
        .board(&actor("user_a@x.com"))
        .await
        .expect("board should build");

    assert_eq!(board.planning.len(), 1);
    assert!(board.ready.is_empty());
    assert_eq!(board.published.len(), 1);
    let card = board.published.first().expect("one published card");
    assert_eq!(card.task.review_outcome(), Some(ReviewOutcome::Drop));
    assert_eq!(
        card.account.as_ref().map(|a| a.display_name.as_str()),
        Some("Persona 7")
    );
}
