//! `PostgreSQL` repository implementation for mission storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::account::domain::AccountId;
use crate::identity::domain::ActorEmail;
use crate::task::{
    domain::{
        MissionCode, PersistedTaskData, PrepChecklist, ProductName, ReviewOutcome, SopChecklist,
        Task, TaskId, TaskStatus,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by mission adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed mission repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;

            Ok(())
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let changeset = to_changeset(task);

        self.run_blocking(move |connection| {
            let updated_rows =
                diesel::update(tasks::table.filter(tasks::id.eq(task_id.into_inner())))
                    .set(&changeset)
                    .execute(connection)
                    .map_err(TaskRepositoryError::persistence)?;

            if updated_rows == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .order(tasks::created_at.desc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    let sop = task.sop();
    let prep = task.prep();

    NewTaskRow {
        id: task.id().into_inner(),
        account_id: task.account_id().as_str().to_owned(),
        product_name: task.product_name().as_str().to_owned(),
        mission_code: task.mission_code().as_str().to_owned(),
        creator_email: task.creator().as_str().to_owned(),
        status: task.status().as_str().to_owned(),
        check_keywords: sop.keywords,
        check_copywriting: sop.copywriting,
        check_tags: sop.tags,
        check_cover: sop.cover,
        check_photos: sop.photos,
        check_archive: sop.archive,
        prep_detail_imgs: prep.detail_images,
        prep_100_titles: prep.hundred_titles,
        prep_note_screenshots: prep.note_screenshots,
        prep_comment_screenshots: prep.comment_screenshots,
        prep_final_excel: prep.final_spreadsheet,
        review_result: task
            .review_outcome()
            .map(|outcome| outcome.as_str().to_owned()),
        published_at: task.published_at(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn to_changeset(task: &Task) -> TaskChangeset {
    let sop = task.sop();
    let prep = task.prep();

    TaskChangeset {
        status: task.status().as_str().to_owned(),
        check_keywords: sop.keywords,
        check_copywriting: sop.copywriting,
        check_tags: sop.tags,
        check_cover: sop.cover,
        check_photos: sop.photos,
        check_archive: sop.archive,
        prep_detail_imgs: prep.detail_images,
        prep_100_titles: prep.hundred_titles,
        prep_note_screenshots: prep.note_screenshots,
        prep_comment_screenshots: prep.comment_screenshots,
        prep_final_excel: prep.final_spreadsheet,
        review_result: task
            .review_outcome()
            .map(|outcome| outcome.as_str().to_owned()),
        published_at: task.published_at(),
        updated_at: task.updated_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        account_id,
        product_name,
        mission_code,
        creator_email,
        status: persisted_status,
        check_keywords,
        check_copywriting,
        check_tags,
        check_cover,
        check_photos,
        check_archive,
        prep_detail_imgs,
        prep_100_titles,
        prep_note_screenshots,
        prep_comment_screenshots,
        prep_final_excel,
        review_result,
        published_at,
        created_at,
        updated_at,
    } = row;

    let status = TaskStatus::try_from(persisted_status.as_str())
        .map_err(TaskRepositoryError::persistence)?;
    let review_outcome = review_result
        .as_deref()
        .map(ReviewOutcome::try_from)
        .transpose()
        .map_err(TaskRepositoryError::persistence)?;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        account_id: AccountId::new(account_id).map_err(TaskRepositoryError::persistence)?,
        product_name: ProductName::new(product_name).map_err(TaskRepositoryError::persistence)?,
        mission_code: MissionCode::from_stored(mission_code),
        creator: ActorEmail::new(creator_email).map_err(TaskRepositoryError::persistence)?,
        status,
        sop: SopChecklist {
            keywords: check_keywords,
            copywriting: check_copywriting,
            tags: check_tags,
            cover: check_cover,
            photos: check_photos,
            archive: check_archive,
        },
        prep: PrepChecklist {
            detail_images: prep_detail_imgs,
            hundred_titles: prep_100_titles,
            note_screenshots: prep_note_screenshots,
            comment_screenshots: prep_comment_screenshots,
            final_spreadsheet: prep_final_excel,
        },
        review_outcome,
        published_at,
        created_at,
        updated_at,
    };
    Ok(Task::from_persisted(data))
}
