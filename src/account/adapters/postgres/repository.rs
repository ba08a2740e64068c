//! `PostgreSQL` repository implementation for account pool storage.

use super::{
    models::{AccountChangeset, AccountRow, NewAccountRow},
    schema::accounts,
};
use crate::account::{
    domain::{Account, AccountId, AccountProfile, AccountStatus, PersistedAccountData},
    ports::{AccountRepository, AccountRepositoryError, AccountRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by account adapters.
pub type AccountPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed account repository.
#[derive(Debug, Clone)]
pub struct PostgresAccountRepository {
    pool: AccountPgPool,
}

impl PostgresAccountRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: AccountPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> AccountRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> AccountRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(AccountRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(AccountRepositoryError::persistence)?
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn store(&self, account: &Account) -> AccountRepositoryResult<()> {
        let account_id = account.id().clone();
        let new_row = to_new_row(account)?;

        self.run_blocking(move |connection| {
            diesel::insert_into(accounts::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        AccountRepositoryError::DuplicateAccount(account_id.clone())
                    }
                    _ => AccountRepositoryError::persistence(err),
                })?;

            Ok(())
        })
        .await
    }

    async fn update(&self, account: &Account) -> AccountRepositoryResult<()> {
        let account_id = account.id().clone();
        let changeset = to_changeset(account)?;

        self.run_blocking(move |connection| {
            let updated_rows = diesel::update(
                accounts::table.filter(accounts::id.eq(account_id.as_str().to_owned())),
            )
            .set(&changeset)
            .execute(connection)
            .map_err(AccountRepositoryError::persistence)?;

            if updated_rows == 0 {
                return Err(AccountRepositoryError::NotFound(account_id.clone()));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: &AccountId) -> AccountRepositoryResult<Option<Account>> {
        let lookup_id = id.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = accounts::table
                .filter(accounts::id.eq(&lookup_id))
                .select(AccountRow::as_select())
                .first::<AccountRow>(connection)
                .optional()
                .map_err(AccountRepositoryError::persistence)?;
            row.map(row_to_account).transpose()
        })
        .await
    }

    async fn list(&self) -> AccountRepositoryResult<Vec<Account>> {
        self.run_blocking(|connection| {
            let rows = accounts::table
                .order(accounts::created_at.desc())
                .select(AccountRow::as_select())
                .load::<AccountRow>(connection)
                .map_err(AccountRepositoryError::persistence)?;
            rows.into_iter().map(row_to_account).collect()
        })
        .await
    }

    async fn list_by_status(
        &self,
        status: AccountStatus,
    ) -> AccountRepositoryResult<Vec<Account>> {
        let status_value = status.as_str();
        self.run_blocking(move |connection| {
            let rows = accounts::table
                .filter(accounts::status.eq(status_value))
                .order(accounts::created_at.desc())
                .select(AccountRow::as_select())
                .load::<AccountRow>(connection)
                .map_err(AccountRepositoryError::persistence)?;
            rows.into_iter().map(row_to_account).collect()
        })
        .await
    }
}

fn to_new_row(account: &Account) -> AccountRepositoryResult<NewAccountRow> {
    let warming_view_count = i64::try_from(account.warming_view_count())
        .map_err(AccountRepositoryError::persistence)?;

    Ok(NewAccountRow {
        id: account.id().as_str().to_owned(),
        phone_id: account.profile().phone_id().to_owned(),
        sim_slot: account.profile().sim_slot().to_owned(),
        account_name: account.profile().display_name().to_owned(),
        status: account.status().as_str().to_owned(),
        warming_view_count,
        note: account.profile().note().map(str::to_owned),
        created_at: account.created_at(),
        updated_at: account.updated_at(),
    })
}

fn to_changeset(account: &Account) -> AccountRepositoryResult<AccountChangeset> {
    let warming_view_count = i64::try_from(account.warming_view_count())
        .map_err(AccountRepositoryError::persistence)?;

    Ok(AccountChangeset {
        phone_id: account.profile().phone_id().to_owned(),
        sim_slot: account.profile().sim_slot().to_owned(),
        account_name: account.profile().display_name().to_owned(),
        status: account.status().as_str().to_owned(),
        warming_view_count,
        note: account.profile().note().map(str::to_owned),
        updated_at: account.updated_at(),
    })
}

fn row_to_account(row: AccountRow) -> AccountRepositoryResult<Account> {
    let AccountRow {
        id,
        phone_id,
        sim_slot,
        account_name,
        status: persisted_status,
        warming_view_count,
        note,
        created_at,
        updated_at,
    } = row;

    let account_id = AccountId::new(id).map_err(AccountRepositoryError::persistence)?;
    let status = AccountStatus::try_from(persisted_status.as_str())
        .map_err(AccountRepositoryError::persistence)?;
    let views = u64::try_from(warming_view_count).map_err(AccountRepositoryError::persistence)?;

    let mut profile =
        AccountProfile::new(account_name).map_err(AccountRepositoryError::persistence)?;
    profile = profile.with_phone_id(phone_id).with_sim_slot(sim_slot);
    if let Some(note_text) = note {
        profile = profile.with_note(note_text);
    }

    let data = PersistedAccountData {
        id: account_id,
        profile,
        status,
        warming_view_count: views,
        created_at,
        updated_at,
    };
    Ok(Account::from_persisted(data))
}
