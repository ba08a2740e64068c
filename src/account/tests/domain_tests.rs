//! Domain-focused tests for account pool behaviour.

use crate::account::domain::{
    Account, AccountDomainError, AccountId, AccountProfile, AccountStatus,
    ParseAccountStatusError,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

fn warming_account(clock: &DefaultClock) -> Account {
    let id = AccountId::new("7").expect("valid account id");
    let profile = AccountProfile::new("Grace loves tea")
        .expect("valid profile")
        .with_phone_id("P-07")
        .with_note("new device");
    Account::enroll(id, profile, clock)
}

#[rstest]
#[case(AccountStatus::Warming, AccountStatus::Active, true)]
#[case(AccountStatus::Warming, AccountStatus::Abandoned, true)]
#[case(AccountStatus::Active, AccountStatus::Abandoned, false)]
#[case(AccountStatus::Active, AccountStatus::Warming, false)]
#[case(AccountStatus::Abandoned, AccountStatus::Active, false)]
#[case(AccountStatus::Abandoned, AccountStatus::Warming, false)]
fn status_transition_matrix(
    #[case] current: AccountStatus,
    #[case] target: AccountStatus,
    #[case] expected: bool,
) {
    assert_eq!(current.can_transition_to(target), expected);
}

#[rstest]
fn enroll_starts_warming_with_zero_views(clock: DefaultClock) {
    let account = warming_account(&clock);

    assert_eq!(account.status(), AccountStatus::Warming);
    assert_eq!(account.warming_view_count(), 0);
    assert_eq!(account.created_at(), account.updated_at());
    assert_eq!(account.profile().sim_slot(), AccountProfile::DEFAULT_SIM_SLOT);
}

#[rstest]
#[case("")]
#[case("   ")]
fn account_id_rejects_empty_labels(#[case] raw: &str) {
    assert_eq!(AccountId::new(raw), Err(AccountDomainError::EmptyAccountId));
}

#[rstest]
fn account_id_rejects_interior_whitespace() {
    let result = AccountId::new("pod 7");
    assert!(matches!(
        result,
        Err(AccountDomainError::AccountIdContainsWhitespace(_))
    ));
}

#[rstest]
fn profile_rejects_empty_display_name() {
    assert_eq!(
        AccountProfile::new("  "),
        Err(AccountDomainError::EmptyDisplayName)
    );
}

#[rstest]
fn warming_view_count_is_replaced_not_incremented(clock: DefaultClock) {
    let mut account = warming_account(&clock);

    account
        .record_warming_views(120, &clock)
        .expect("first view count should record");
    account
        .record_warming_views(95, &clock)
        .expect("second view count should record");

    assert_eq!(account.warming_view_count(), 95);
}

#[rstest]
fn view_counts_are_rejected_after_qualification(clock: DefaultClock) {
    let mut account = warming_account(&clock);
    account
        .mark_qualified(&clock)
        .expect("qualification should succeed");

    let result = account.record_warming_views(500, &clock);

    assert!(matches!(
        result,
        Err(AccountDomainError::ViewCountRequiresWarming { .. })
    ));
    assert_eq!(account.warming_view_count(), 0);
}

#[rstest]
fn qualification_is_one_way(clock: DefaultClock) {
    let mut account = warming_account(&clock);
    account
        .mark_qualified(&clock)
        .expect("qualification should succeed");

    let result = account.mark_abandoned(&clock);

    assert!(matches!(
        result,
        Err(AccountDomainError::InvalidStatusTransition { .. })
    ));
    assert_eq!(account.status(), AccountStatus::Active);
}

#[rstest]
fn abandoned_accounts_cannot_be_qualified(clock: DefaultClock) {
    let mut account = warming_account(&clock);
    account
        .mark_abandoned(&clock)
        .expect("abandonment should succeed");

    let result = account.mark_qualified(&clock);

    assert!(matches!(
        result,
        Err(AccountDomainError::InvalidStatusTransition { .. })
    ));
}

#[rstest]
#[case("warming", AccountStatus::Warming)]
#[case(" Active ", AccountStatus::Active)]
#[case("ABANDONED", AccountStatus::Abandoned)]
fn status_parses_from_storage_representation(
    #[case] raw: &str,
    #[case] expected: AccountStatus,
) {
    assert_eq!(AccountStatus::try_from(raw), Ok(expected));
}

#[rstest]
fn unknown_status_fails_to_parse() {
    assert_eq!(
        AccountStatus::try_from("dormant"),
        Err(ParseAccountStatusError("dormant".to_owned()))
    );
}
