//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{DueDate, PersistedTaskData, Task, TaskId, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// Builds the shared connection pool for task persistence.
///
/// The pool is constructed once at application startup and injected into
/// [`PostgresTaskRepository::new`]; connection establishment and handle
/// reuse are serialized inside the pool, so concurrent first callers never
/// race into duplicate bootstrap.
///
/// # Errors
///
/// Returns [`PoolError`] when the store is unreachable or misconfigured.
pub fn build_pool(database_url: &str) -> Result<TaskPgPool, PoolError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder().build(manager)
}

/// `PostgreSQL`-backed task repository.
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
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()> {
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

    async fn replace(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let changeset = to_changeset(task);

        self.run_blocking(move |connection| {
            let updated = diesel::update(tasks::table.find(task_id.into_inner()))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if updated == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn fetch(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.into_inner())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list_recent_first(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .order((tasks::created_at.desc(), tasks::id.asc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn remove(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(tasks::table.find(id.into_inner()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(deleted > 0)
        })
        .await
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        title: task.title().as_str().to_owned(),
        description: task.description().map(str::to_owned),
        due_date: task.due_date().map(DueDate::date),
        completed: task.completed(),
        created_at: task.created_at(),
    }
}

fn to_changeset(task: &Task) -> TaskChangeset {
    TaskChangeset {
        title: task.title().as_str().to_owned(),
        description: task.description().map(str::to_owned),
        due_date: task.due_date().map(DueDate::date),
        completed: task.completed(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title: persisted_title,
        description,
        due_date,
        completed,
        created_at,
    } = row;

    let title = TaskTitle::new(persisted_title).map_err(TaskRepositoryError::persistence)?;
    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        title,
        description,
        due_date: due_date.map(DueDate::new),
        completed,
        created_at,
    };
    Ok(Task::from_persisted(data))
}
