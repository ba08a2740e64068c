//! Shared fixtures for in-memory end-to-end tests.

use std::sync::Arc;

use missionflow::account::adapters::memory::InMemoryAccountRepository;
use missionflow::account::services::{AccountPoolService, EnrollAccountRequest};
use missionflow::identity::domain::{Actor, ActorEmail};
use missionflow::long_term::adapters::memory::InMemoryLongTermProductRepository;
use missionflow::long_term::services::LongTermOpsService;
use missionflow::task::adapters::memory::InMemoryTaskRepository;
use missionflow::task::domain::{ChecklistItem, ReviewOutcome, Task};
use missionflow::task::services::{CreateTaskRequest, DecisionRouter, TaskFlowService};
use mockable::DefaultClock;
use rstest::fixture;

/// All services wired onto one shared set of in-memory repositories.
pub struct World {
    pub pool: AccountPoolService<InMemoryAccountRepository, DefaultClock>,
    pub flow: TaskFlowService<InMemoryTaskRepository, InMemoryAccountRepository, DefaultClock>,
    pub router:
        DecisionRouter<InMemoryTaskRepository, InMemoryLongTermProductRepository, DefaultClock>,
    pub ops: LongTermOpsService<
        InMemoryLongTermProductRepository,
        InMemoryAccountRepository,
        DefaultClock,
    >,
}

#[fixture]
pub fn world() -> World {
    let accounts = Arc::new(InMemoryAccountRepository::new());
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let products = Arc::new(InMemoryLongTermProductRepository::new());
    let clock = Arc::new(DefaultClock);

    World {
        pool: AccountPoolService::new(Arc::clone(&accounts), Arc::clone(&clock)),
        flow: TaskFlowService::new(
            Arc::clone(&tasks),
            Arc::clone(&accounts),
            Arc::clone(&clock),
        ),
        router: DecisionRouter::new(Arc::clone(&tasks), Arc::clone(&products), Arc::clone(&clock)),
        ops: LongTermOpsService::new(products, accounts, clock),
    }
}

pub fn actor(raw: &str) -> Actor {
    Actor::from_email(ActorEmail::new(raw).expect("valid email"))
}

/// Enrolls and qualifies an account ready for mission work.
pub async fn qualified_account(world: &World, label: &str) {
    let mut account = world
        .pool
        .enroll(EnrollAccountRequest::new(label, format!("Persona {label}")))
        .await
        .expect("enrollment should succeed");
    world
        .pool
        .mark_qualified(&mut account)
        .await
        .expect("qualification should succeed");
}

/// Runs a mission from creation through publication and its decision.
pub async fn decided_task(
    world: &World,
    account: &str,
    product: &str,
    creator: &str,
    outcome: ReviewOutcome,
) -> Task {
    let mut task = world
        .flow
        .create(CreateTaskRequest::new(account, product, creator))
        .await
        .expect("mission creation should succeed");
    for item in ChecklistItem::ALL {
        world
            .flow
            .toggle_checklist(&mut task, item)
            .await
            .expect("toggle should persist");
    }
    world
        .flow
        .publish(&mut task)
        .await
        .expect("ready mission should publish");
    world
        .flow
        .record_decision(&mut task, outcome)
        .await
        .expect("decision should record");
    task
}
