//! End-to-end decision routing: retests, promotions, and follow-up posts.

use missionflow::long_term::domain::SetupItem;
use missionflow::task::domain::{ReviewOutcome, TaskStatus};
use mockable::{Clock, DefaultClock};
use rstest::rstest;

use super::helpers::{World, actor, decided_task, qualified_account, world};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_retry_decision_spawns_a_fresh_mission(world: World) {
    qualified_account(&world, "7").await;
    let original = decided_task(
        &world,
        "7",
        "Vitamin C Serum",
        "user_a@x.com",
        ReviewOutcome::Retry,
    )
    .await;

    let retest = world
        .router
        .spawn_retest(&original)
        .await
        .expect("retest should spawn");

    assert_eq!(retest.status(), TaskStatus::Planning);
    assert_eq!(retest.mission_code(), original.mission_code());
    let board = world
        .flow
        .board(&actor("user_a@x.com"))
        .await
        .expect("board should build");
    assert_eq!(board.planning.len(), 1);
    assert_eq!(board.published.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_promotion_lands_on_the_operations_dashboard(world: World) {
    qualified_account(&world, "7").await;
    let task = decided_task(
        &world,
        "7",
        "Vitamin C Serum",
        "user_a@x.com",
        ReviewOutcome::Promoted,
    )
    .await;

    let mut product = world
        .router
        .promote(&task)
        .await
        .expect("promotion should succeed");
    world
        .ops
        .toggle_setup(&mut product, SetupItem::CommentLibrary)
        .await
        .expect("setup toggle should persist");
    world
        .ops
        .mark_daily_check(&mut product)
        .await
        .expect("daily mark should persist");

    let dashboard = world
        .ops
        .dashboard(&actor("user_a@x.com"))
        .await
        .expect("dashboard should build");

    assert_eq!(dashboard.products.len(), 1);
    let card = dashboard.products.first().expect("one product card");
    assert!(card.product.setup().comment_library);
    assert!(card.cadence.daily_check_done);
    assert!(!card.cadence.weekly_cover_done);
    assert_eq!(
        card.account.as_ref().map(|a| a.display_name.as_str()),
        Some("Persona 7")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn promotion_attribution_survives_a_supervisor_confirming(world: World) {
    // jack reviews and confirms; the record stays owned by its creator.
    qualified_account(&world, "7").await;
    let task = decided_task(
        &world,
        "7",
        "Vitamin C Serum",
        "user_a@x.com",
        ReviewOutcome::Promoted,
    )
    .await;

    let product = world
        .router
        .promote(&task)
        .await
        .expect("promotion should succeed");

    assert_eq!(product.creator().as_str(), "user_a@x.com");
    let own_view = world
        .ops
        .visible_products(&actor("user_a@x.com"))
        .await
        .expect("listing should succeed");
    assert_eq!(own_view.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn follow_up_posts_restart_the_lifecycle(world: World) {
    qualified_account(&world, "7").await;
    let task = decided_task(
        &world,
        "7",
        "Vitamin C Serum",
        "user_a@x.com",
        ReviewOutcome::Promoted,
    )
    .await;
    let product = world
        .router
        .promote(&task)
        .await
        .expect("promotion should succeed");

    let post = world
        .router
        .spawn_follow_up_post(&product)
        .await
        .expect("follow-up post should spawn");

    assert_eq!(post.status(), TaskStatus::Planning);
    assert_eq!(post.creator(), product.creator());
    // The new post derives its code for its own creation date.
    let today = DefaultClock.utc().format("%Y%m%d").to_string();
    assert!(post.mission_code().as_str().ends_with(&today));
}
