//! Task persistence.
//!
//! Translates the five task operations into single-statement Postgres
//! queries. Ids and timestamps are assigned by the database; the rows come
//! back via `RETURNING` and are mapped into the domain shape.

use crate::error::AppError;
use crate::models::{CreateTask, Task, TaskRow, UpdateTask};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns every task, most recently updated first.
    pub async fn list_all(&self) -> Result<Vec<Task>, AppError> {
        let rows = sqlx::query_as::<_, TaskRow>(
            "SELECT id, title, description, done, created_at, updated_at \
             FROM tasks ORDER BY updated_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Task::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Task, AppError> {
        let row = sqlx::query_as::<_, TaskRow>(
            "SELECT id, title, description, done, created_at, updated_at \
             FROM tasks WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Task::from)
            .ok_or_else(|| AppError::NotFound(format!("Task {} not found", id)))
    }

    /// Persists a new task. `done` starts out false and the database
    /// assigns the id and both timestamps.
    pub async fn create(&self, input: CreateTask) -> Result<Task, AppError> {
        let row = sqlx::query_as::<_, TaskRow>(
            "INSERT INTO tasks (title, description) VALUES ($1, $2) \
             RETURNING id, title, description, done, created_at, updated_at",
        )
        .bind(input.title)
        .bind(input.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(Task::from(row))
    }

    /// Applies a partial update in a single statement. Absent fields keep
    /// their stored value, so the merge is atomic and `{}` only refreshes
    /// `updated_at`.
    pub async fn update(&self, id: Uuid, input: UpdateTask) -> Result<Task, AppError> {
        let row = sqlx::query_as::<_, TaskRow>(
            "UPDATE tasks \
             SET title = COALESCE($2, title), \
                 description = COALESCE($3, description), \
                 done = COALESCE($4, done), \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING id, title, description, done, created_at, updated_at",
        )
        .bind(id)
        .bind(input.title)
        .bind(input.description)
        .bind(input.done)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Task::from)
            .ok_or_else(|| AppError::NotFound(format!("Task {} not found", id)))
    }

    /// Hard-deletes a task.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Task {} not found", id)));
        }

        Ok(())
    }
}
