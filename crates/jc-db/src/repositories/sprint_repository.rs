use crate::repositories::row::{now_utc, parse_date, parse_status, parse_timestamp};
use crate::{DbError, Result, TaskRepository};

use jc_core::{NewSprint, Sprint, SprintStatus, SprintWithTasks, require_non_blank};

use sqlx::Row;
use sqlx::sqlite::{SqlitePool, SqliteRow};

pub struct SprintRepository {
    pool: SqlitePool,
}

impl SprintRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new sprint. The storage layer assigns the id; both
    /// timestamps are stamped here from one clock read, so
    /// `created_at == updated_at` at the creation instant.
    pub async fn create(&self, draft: &NewSprint) -> Result<Sprint> {
        require_non_blank(&draft.name, "name")?;

        let now = now_utc();
        let ts = now.timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO sprints (
                                     name, goal, start_date, end_date,
                                     status, project_id, created_at, updated_at
                                     ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.goal)
        .bind(draft.start_date.map(|d| d.to_string()))
        .bind(draft.end_date.map(|d| d.to_string()))
        .bind(draft.status.map(|s| s.as_str().to_string()))
        .bind(draft.project_id)
        .bind(ts)
        .bind(ts)
        .execute(&self.pool)
        .await?;

        Ok(Sprint {
            id: result.last_insert_rowid(),
            name: draft.name.clone(),
            goal: draft.goal.clone(),
            start_date: draft.start_date,
            end_date: draft.end_date,
            status: draft.status,
            project_id: draft.project_id,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Sprint>> {
        let row = sqlx::query(
            r#"
                SELECT id, name, goal, start_date, end_date, status, project_id,
                       created_at, updated_at
                FROM sprints
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_sprint).transpose()
    }

    pub async fn find_by_project(&self, project_id: i64) -> Result<Vec<Sprint>> {
        let rows = sqlx::query(
            r#"
                SELECT id, name, goal, start_date, end_date, status, project_id,
                       created_at, updated_at
                FROM sprints
                WHERE project_id = ?
                ORDER BY id
            "#,
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_sprint).collect()
    }

    pub async fn find_all(&self) -> Result<Vec<Sprint>> {
        let rows = sqlx::query(
            r#"
                SELECT id, name, goal, start_date, end_date, status, project_id,
                       created_at, updated_at
                FROM sprints
                ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_sprint).collect()
    }

    /// The sprint together with its derived tasks view: membership is read
    /// from each task's `sprint_id` foreign key, never from a stored
    /// collection on the sprint.
    pub async fn find_with_tasks(&self, id: i64) -> Result<Option<SprintWithTasks>> {
        let Some(sprint) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let tasks = TaskRepository::new(self.pool.clone())
            .find_by_sprint(id)
            .await?;

        Ok(Some(SprintWithTasks { sprint, tasks }))
    }

    /// Persist every mutable field. `created_at` is never written by this
    /// path; `updated_at` is refreshed.
    pub async fn update(&self, sprint: &Sprint) -> Result<Sprint> {
        require_non_blank(&sprint.name, "name")?;

        let updated_at = now_utc();

        let result = sqlx::query(
            r#"
                UPDATE sprints
                SET name = ?, goal = ?, start_date = ?, end_date = ?,
                    status = ?, project_id = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&sprint.name)
        .bind(&sprint.goal)
        .bind(sprint.start_date.map(|d| d.to_string()))
        .bind(sprint.end_date.map(|d| d.to_string()))
        .bind(sprint.status.map(|s| s.as_str().to_string()))
        .bind(sprint.project_id)
        .bind(updated_at.timestamp())
        .bind(sprint.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("sprint", sprint.id));
        }

        Ok(Sprint {
            updated_at,
            ..sprint.clone()
        })
    }

    /// Set or clear the status. Transitions are unconstrained: any of the
    /// three values, or none, may replace any other.
    pub async fn update_status(&self, id: i64, status: Option<SprintStatus>) -> Result<Sprint> {
        let updated_at = now_utc();

        let result = sqlx::query(
            r#"
                UPDATE sprints
                SET status = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(status.map(|s| s.as_str().to_string()))
        .bind(updated_at.timestamp())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("sprint", id));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("sprint", id))
    }

    /// Hard delete. Tasks that referenced the sprint are detached by the
    /// schema (`ON DELETE SET NULL`), never deleted with it.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM sprints WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("sprint", id));
        }

        Ok(())
    }
}

fn row_to_sprint(row: &SqliteRow) -> Result<Sprint> {
    Ok(Sprint {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        goal: row.try_get("goal")?,
        start_date: parse_date(row.try_get("start_date")?, "sprints.start_date")?,
        end_date: parse_date(row.try_get("end_date")?, "sprints.end_date")?,
        status: parse_status(row.try_get("status")?, "sprints.status")?,
        project_id: row.try_get("project_id")?,
        created_at: parse_timestamp(row.try_get("created_at")?, "sprints.created_at")?,
        updated_at: parse_timestamp(row.try_get("updated_at")?, "sprints.updated_at")?,
    })
}
