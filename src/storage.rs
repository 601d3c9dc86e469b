// storage.rs — SQLite-backed task store.
//
// One table, one row per operation. The database file is created on first
// startup; WAL mode keeps concurrent readers cheap and lets SQLite serialize
// the (rare) concurrent writers.

use anyhow::{Context as _, Result};
use chrono::Utc;
use sqlx::{sqlite::SqliteConnectOptions, SqlitePool};
use std::path::Path;

use crate::error::ApiError;
use crate::task::{NewTask, Status, Task, TaskPatch};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    status TEXT NOT NULL,
    createdAt TEXT NOT NULL
)";

#[derive(Clone)]
pub struct Storage {
    pool: SqlitePool,
}

impl Storage {
    pub async fn new(data_dir: &Path) -> Result<Self> {
        tokio::fs::create_dir_all(data_dir).await?;
        let db_path = data_dir.join("tasks.db");
        // filename() takes the path literally — no URL parsing, so data dirs
        // containing `?`, `#`, or percent-escapes work.
        let opts = SqliteConnectOptions::new()
            .filename(&db_path)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(opts).await?;
        sqlx::query(SCHEMA)
            .execute(&pool)
            .await
            .context("Failed to create tasks table")?;
        Ok(Self { pool })
    }

    /// Insert a new task and return the persisted row with its assigned id.
    ///
    /// The status value is already typed; the only validation left at this
    /// level is the non-empty-title rule, which applies to create only.
    pub async fn create_task(&self, new: NewTask) -> Result<Task, ApiError> {
        if new.title.is_empty() {
            return Err(ApiError::validation("Title is required"));
        }
        let created_at = Utc::now().to_rfc3339();
        let result = sqlx::query(
            "INSERT INTO tasks (title, description, status, createdAt) VALUES (?, ?, ?, ?)",
        )
        .bind(&new.title)
        .bind(&new.description)
        .bind(new.status)
        .bind(&created_at)
        .execute(&self.pool)
        .await?;
        self.get_task(result.last_insert_rowid()).await
    }

    /// All tasks, optionally narrowed to an exact status match.
    /// Order is storage-native — no ORDER BY.
    pub async fn list_tasks(&self, filter: Option<Status>) -> Result<Vec<Task>, ApiError> {
        let tasks = match filter {
            Some(status) => {
                sqlx::query_as("SELECT * FROM tasks WHERE status = ?")
                    .bind(status)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_as("SELECT * FROM tasks")
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(tasks)
    }

    pub async fn get_task(&self, id: i64) -> Result<Task, ApiError> {
        sqlx::query_as("SELECT * FROM tasks WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| ApiError::not_found("Task not found"))
    }

    /// Apply only the fields present in `patch`; absent fields keep their
    /// stored values. `createdAt` and `id` are immutable. The caller resolves
    /// `existing` via `get_task`, so a missing id is a NotFound before any
    /// field validation — one SELECT, one UPDATE per call.
    pub async fn update_task(&self, existing: Task, patch: TaskPatch) -> Result<Task, ApiError> {
        let task = Task {
            id: existing.id,
            title: patch.title.unwrap_or(existing.title),
            description: patch.description.unwrap_or(existing.description),
            status: patch.status.unwrap_or(existing.status),
            created_at: existing.created_at,
        };
        sqlx::query("UPDATE tasks SET title = ?, description = ?, status = ? WHERE id = ?")
            .bind(&task.title)
            .bind(&task.description)
            .bind(task.status)
            .bind(task.id)
            .execute(&self.pool)
            .await?;
        Ok(task)
    }

    /// Hard delete. No tombstone.
    pub async fn delete_task(&self, id: i64) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::not_found("Task not found"));
        }
        Ok(())
    }
}
