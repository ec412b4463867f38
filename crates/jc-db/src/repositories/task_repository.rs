use crate::repositories::row::{now_utc, parse_timestamp};
use crate::{DbError, Result};

use jc_core::{NewTask, Task, require_non_blank};

use sqlx::Row;
use sqlx::sqlite::{SqlitePool, SqliteRow};

pub struct TaskRepository {
    pool: SqlitePool,
}

impl TaskRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, draft: &NewTask) -> Result<Task> {
        require_non_blank(&draft.title, "title")?;

        let now = now_utc();
        let ts = now.timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO tasks (
                                   title, description, status, priority,
                                   project_id, sprint_id, created_at, updated_at
                                   ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.status)
        .bind(&draft.priority)
        .bind(draft.project_id)
        .bind(draft.sprint_id)
        .bind(ts)
        .bind(ts)
        .execute(&self.pool)
        .await?;

        Ok(Task {
            id: result.last_insert_rowid(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            status: draft.status.clone(),
            priority: draft.priority.clone(),
            project_id: draft.project_id,
            sprint_id: draft.sprint_id,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Task>> {
        let row = sqlx::query(
            r#"
                SELECT id, title, description, status, priority, project_id, sprint_id,
                       created_at, updated_at
                FROM tasks
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_task).transpose()
    }

    pub async fn find_by_project(&self, project_id: i64) -> Result<Vec<Task>> {
        let rows = sqlx::query(
            r#"
                SELECT id, title, description, status, priority, project_id, sprint_id,
                       created_at, updated_at
                FROM tasks
                WHERE project_id = ?
                ORDER BY id
            "#,
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_task).collect()
    }

    /// All tasks whose `sprint_id` equals the given sprint. This query is
    /// the source of the sprint's derived tasks view.
    pub async fn find_by_sprint(&self, sprint_id: i64) -> Result<Vec<Task>> {
        let rows = sqlx::query(
            r#"
                SELECT id, title, description, status, priority, project_id, sprint_id,
                       created_at, updated_at
                FROM tasks
                WHERE sprint_id = ?
                ORDER BY id
            "#,
        )
        .bind(sprint_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_task).collect()
    }

    /// Move the task into a sprint, or out of any sprint with `None`.
    /// This is the write side of the sprint/task association.
    pub async fn assign_to_sprint(&self, id: i64, sprint_id: Option<i64>) -> Result<Task> {
        let updated_at = now_utc();

        let result = sqlx::query(
            r#"
                UPDATE tasks
                SET sprint_id = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(sprint_id)
        .bind(updated_at.timestamp())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("task", id));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("task", id))
    }

    pub async fn update(&self, task: &Task) -> Result<Task> {
        require_non_blank(&task.title, "title")?;

        let updated_at = now_utc();

        let result = sqlx::query(
            r#"
                UPDATE tasks
                SET title = ?, description = ?, status = ?, priority = ?,
                    project_id = ?, sprint_id = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(&task.status)
        .bind(&task.priority)
        .bind(task.project_id)
        .bind(task.sprint_id)
        .bind(updated_at.timestamp())
        .bind(task.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("task", task.id));
        }

        Ok(Task {
            updated_at,
            ..task.clone()
        })
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("task", id));
        }

        Ok(())
    }
}

fn row_to_task(row: &SqliteRow) -> Result<Task> {
    Ok(Task {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        status: row.try_get("status")?,
        priority: row.try_get("priority")?,
        project_id: row.try_get("project_id")?,
        sprint_id: row.try_get("sprint_id")?,
        created_at: parse_timestamp(row.try_get("created_at")?, "tasks.created_at")?,
        updated_at: parse_timestamp(row.try_get("updated_at")?, "tasks.updated_at")?,
    })
}
