//! Creator scoping applied uniformly across missions and long-term
//! products.

use missionflow::task::domain::ReviewOutcome;
use missionflow::task::services::CreateTaskRequest;
use rstest::rstest;

use super::helpers::{World, actor, decided_task, qualified_account, world};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn operators_are_scoped_and_supervisors_are_not(world: World) {
    qualified_account(&world, "1").await;
    qualified_account(&world, "2").await;
    world
        .flow
        .create(CreateTaskRequest::new("1", "Serum A", "bob@x.com"))
        .await
        .expect("mission creation should succeed");
    world
        .flow
        .create(CreateTaskRequest::new("2", "Serum B", "alice@x.com"))
        .await
        .expect("mission creation should succeed");

    let bobs = world
        .flow
        .visible_tasks(&actor("bob@x.com"))
        .await
        .expect("listing should succeed");
    let jacks = world
        .flow
        .visible_tasks(&actor("jack@x.com"))
        .await
        .expect("listing should succeed");
    let admins = world
        .flow
        .visible_tasks(&actor("site-admin@corp.io"))
        .await
        .expect("listing should succeed");

    assert_eq!(bobs.len(), 1);
    assert_eq!(
        bobs.first().map(|task| task.creator().as_str()),
        Some("bob@x.com")
    );
    assert_eq!(jacks.len(), 2);
    assert_eq!(admins.len(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn long_term_products_follow_the_same_rule(world: World) {
    qualified_account(&world, "1").await;
    qualified_account(&world, "2").await;
    for (account, creator) in [("1", "bob@x.com"), ("2", "alice@x.com")] {
        let task = decided_task(
            &world,
            account,
            "Vitamin C Serum",
            creator,
            ReviewOutcome::Promoted,
        )
        .await;
        world
            .router
            .promote(&task)
            .await
            .expect("promotion should succeed");
    }

    let bobs = world
        .ops
        .visible_products(&actor("bob@x.com"))
        .await
        .expect("listing should succeed");
    let jacks = world
        .ops
        .visible_products(&actor("jack@x.com"))
        .await
        .expect("listing should succeed");

    assert_eq!(bobs.len(), 1);
    assert_eq!(jacks.len(), 2);
}
