//! `PostgreSQL` repository implementation for long-term product storage.

use super::{
    models::{LongTermProductChangeset, LongTermProductRow, NewLongTermProductRow},
    schema::long_term_products,
};
use crate::account::domain::AccountId;
use crate::identity::domain::ActorEmail;
use crate::long_term::{
    domain::{
        LongTermProduct, LongTermProductId, PersistedLongTermProductData, SetupChecklist,
    },
    ports::{
        LongTermProductRepository, LongTermProductRepositoryError,
        LongTermProductRepositoryResult,
    },
};
use crate::task::domain::ProductName;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by long-term adapters.
pub type LongTermPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed long-term product repository.
#[derive(Debug, Clone)]
pub struct PostgresLongTermProductRepository {
    pool: LongTermPgPool,
}

impl PostgresLongTermProductRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: LongTermPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> LongTermProductRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> LongTermProductRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool
                .get()
                .map_err(LongTermProductRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(LongTermProductRepositoryError::persistence)?
    }
}

#[async_trait]
impl LongTermProductRepository for PostgresLongTermProductRepository {
    async fn store(&self, product: &LongTermProduct) -> LongTermProductRepositoryResult<()> {
        let product_id = product.id();
        let new_row = to_new_row(product);

        self.run_blocking(move |connection| {
            diesel::insert_into(long_term_products::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        LongTermProductRepositoryError::DuplicateProduct(product_id)
                    }
                    _ => LongTermProductRepositoryError::persistence(err),
                })?;

            Ok(())
        })
        .await
    }

    async fn update(&self, product: &LongTermProduct) -> LongTermProductRepositoryResult<()> {
        let product_id = product.id();
        let changeset = to_changeset(product);

        self.run_blocking(move |connection| {
            let updated_rows = diesel::update(
                long_term_products::table
                    .filter(long_term_products::id.eq(product_id.into_inner())),
            )
            .set(&changeset)
            .execute(connection)
            .map_err(LongTermProductRepositoryError::persistence)?;

            if updated_rows == 0 {
                return Err(LongTermProductRepositoryError::NotFound(product_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(
        &self,
        id: LongTermProductId,
    ) -> LongTermProductRepositoryResult<Option<LongTermProduct>> {
        self.run_blocking(move |connection| {
            let row = long_term_products::table
                .filter(long_term_products::id.eq(id.into_inner()))
                .select(LongTermProductRow::as_select())
                .first::<LongTermProductRow>(connection)
                .optional()
                .map_err(LongTermProductRepositoryError::persistence)?;
            row.map(row_to_product).transpose()
        })
        .await
    }

    async fn list(&self) -> LongTermProductRepositoryResult<Vec<LongTermProduct>> {
        self.run_blocking(|connection| {
            let rows = long_term_products::table
                .order(long_term_products::created_at.desc())
                .select(LongTermProductRow::as_select())
                .load::<LongTermProductRow>(connection)
                .map_err(LongTermProductRepositoryError::persistence)?;
            rows.into_iter().map(row_to_product).collect()
        })
        .await
    }
}

fn to_new_row(product: &LongTermProduct) -> NewLongTermProductRow {
    let setup = product.setup();

    NewLongTermProductRow {
        id: product.id().into_inner(),
        account_id: product.account_id().as_str().to_owned(),
        product_name: product.product_name().as_str().to_owned(),
        creator_email: product.creator().as_str().to_owned(),
        setup_library: setup.comment_library,
        setup_20_reviews: setup.seeded_reviews,
        last_daily_check: product.last_daily_check(),
        last_weekly_cover: product.last_weekly_cover(),
        created_at: product.created_at(),
        updated_at: product.updated_at(),
    }
}

fn to_changeset(product: &LongTermProduct) -> LongTermProductChangeset {
    let setup = product.setup();

    LongTermProductChangeset {
        setup_library: setup.comment_library,
        setup_20_reviews: setup.seeded_reviews,
        last_daily_check: product.last_daily_check(),
        last_weekly_cover: product.last_weekly_cover(),
        updated_at: product.updated_at(),
    }
}

fn row_to_product(
    row: LongTermProductRow,
) -> LongTermProductRepositoryResult<LongTermProduct> {
    let LongTermProductRow {
        id,
        account_id,
        product_name,
        creator_email,
        setup_library,
        setup_20_reviews,
        last_daily_check,
        last_weekly_cover,
        created_at,
        updated_at,
    } = row;

    let data = PersistedLongTermProductData {
        id: LongTermProductId::from_uuid(id),
        account_id: AccountId::new(account_id)
            .map_err(LongTermProductRepositoryError::persistence)?,
        product_name: ProductName::new(product_name)
            .map_err(LongTermProductRepositoryError::persistence)?,
        creator: ActorEmail::new(creator_email)
            .map_err(LongTermProductRepositoryError::persistence)?,
        setup: SetupChecklist {
            comment_library: setup_library,
            seeded_reviews: setup_20_reviews,
        },
        last_daily_check,
        last_weekly_cover,
        created_at,
        updated_at,
    };
    Ok(LongTermProduct::from_persisted(data))
}
