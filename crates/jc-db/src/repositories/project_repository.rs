use crate::repositories::row::{now_utc, parse_timestamp};
use crate::{DbError, Result};

use jc_core::{NewProject, Project, require_non_blank};

use sqlx::Row;
use sqlx::sqlite::{SqlitePool, SqliteRow};

pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, draft: &NewProject) -> Result<Project> {
        require_non_blank(&draft.name, "name")?;

        let now = now_utc();
        let ts = now.timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO projects (name, description, created_at, updated_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(ts)
        .bind(ts)
        .execute(&self.pool)
        .await?;

        Ok(Project {
            id: result.last_insert_rowid(),
            name: draft.name.clone(),
            description: draft.description.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Project>> {
        let row = sqlx::query(
            r#"
                SELECT id, name, description, created_at, updated_at
                FROM projects
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_project).transpose()
    }

    pub async fn find_all(&self) -> Result<Vec<Project>> {
        let rows = sqlx::query(
            r#"
                SELECT id, name, description, created_at, updated_at
                FROM projects
                ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_project).collect()
    }

    pub async fn update(&self, project: &Project) -> Result<Project> {
        require_non_blank(&project.name, "name")?;

        let updated_at = now_utc();

        let result = sqlx::query(
            r#"
                UPDATE projects
                SET name = ?, description = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&project.name)
        .bind(&project.description)
        .bind(updated_at.timestamp())
        .bind(project.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("project", project.id));
        }

        Ok(Project {
            updated_at,
            ..project.clone()
        })
    }

    /// Hard delete. The schema detaches sprints (`SET NULL`) and removes
    /// the project's tasks (`CASCADE`).
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("project", id));
        }

        Ok(())
    }
}

fn row_to_project(row: &SqliteRow) -> Result<Project> {
    Ok(Project {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        created_at: parse_timestamp(row.try_get("created_at")?, "projects.created_at")?,
        updated_at: parse_timestamp(row.try_get("updated_at")?, "projects.updated_at")?,
    })
}
