mod common;

use common::{create_test_pool, new_project, new_sprint, new_task};

use jc_core::NewTask;
use jc_db::{DbError, ProjectRepository, SprintRepository, TaskRepository};

use googletest::prelude::*;
use googletest::matchers::is_empty as empty;

#[tokio::test]
async fn given_valid_draft_when_created_then_assigned_id_and_round_trips() {
    // Given: A project to attach the task to
    let pool = create_test_pool().await;
    let project = ProjectRepository::new(pool.clone())
        .create(&new_project())
        .await
        .unwrap();

    let repo = TaskRepository::new(pool);

    // When
    let task = repo.create(&new_task(project.id)).await.unwrap();

    // Then
    assert_that!(task.id, gt(0));
    assert_that!(task.created_at, eq(task.updated_at));

    let found = repo.find_by_id(task.id).await.unwrap().unwrap();
    assert_that!(found.title, eq(&task.title));
    assert_that!(found.status, eq("todo"));
    assert_that!(found.priority, eq("medium"));
    assert_that!(found.project_id, eq(project.id));
    assert_that!(found.sprint_id, none());
}

#[tokio::test]
async fn given_blank_title_when_created_then_validation_error() {
    // Given
    let pool = create_test_pool().await;
    let project = ProjectRepository::new(pool.clone())
        .create(&new_project())
        .await
        .unwrap();
    let repo = TaskRepository::new(pool);

    // When
    let result = repo.create(&NewTask::new("   ", project.id)).await;

    // Then
    assert!(matches!(result, Err(DbError::Validation { .. })));
}

#[tokio::test]
async fn given_unknown_project_when_created_then_foreign_key_rejected() {
    // Given: No projects at all
    let pool = create_test_pool().await;
    let repo = TaskRepository::new(pool);

    // When: Creating a task against a project id that doesn't exist
    let result = repo.create(&new_task(999)).await;

    // Then: The constraint surfaces as a storage error
    assert!(matches!(result, Err(DbError::Sqlx { .. })));
}

#[tokio::test]
async fn given_tasks_in_two_projects_when_finding_by_project_then_scoped() {
    // Given
    let pool = create_test_pool().await;
    let projects = ProjectRepository::new(pool.clone());
    let project_a = projects.create(&new_project()).await.unwrap();
    let project_b = projects.create(&new_project()).await.unwrap();

    let repo = TaskRepository::new(pool);
    let task_a = repo.create(&new_task(project_a.id)).await.unwrap();
    repo.create(&new_task(project_b.id)).await.unwrap();

    // When
    let tasks = repo.find_by_project(project_a.id).await.unwrap();

    // Then
    assert_that!(tasks, len(eq(1)));
    assert_that!(tasks[0].id, eq(task_a.id));
}

#[tokio::test]
async fn given_task_when_assigned_to_sprint_then_foreign_key_moves() {
    // Given: A task outside any sprint
    let pool = create_test_pool().await;
    let project = ProjectRepository::new(pool.clone())
        .create(&new_project())
        .await
        .unwrap();
    let sprint = SprintRepository::new(pool.clone())
        .create(&new_sprint(project.id))
        .await
        .unwrap();

    let repo = TaskRepository::new(pool);
    let task = repo.create(&new_task(project.id)).await.unwrap();

    // When: Assigning it into the sprint
    let assigned = repo.assign_to_sprint(task.id, Some(sprint.id)).await.unwrap();

    // Then
    assert_that!(assigned.sprint_id, eq(Some(sprint.id)));
    assert!(assigned.updated_at >= task.updated_at);

    let members = repo.find_by_sprint(sprint.id).await.unwrap();
    assert_that!(members, len(eq(1)));

    // And: Clearing the assignment empties the sprint again
    let cleared = repo.assign_to_sprint(task.id, None).await.unwrap();
    assert_that!(cleared.sprint_id, none());
    assert_that!(repo.find_by_sprint(sprint.id).await.unwrap(), empty());
}

#[tokio::test]
async fn given_existing_task_when_updated_then_changes_persisted() {
    // Given
    let pool = create_test_pool().await;
    let project = ProjectRepository::new(pool.clone())
        .create(&new_project())
        .await
        .unwrap();
    let repo = TaskRepository::new(pool);
    let mut task = repo.create(&new_task(project.id)).await.unwrap();
    let created_at = task.created_at;

    // When
    task.title = "Review login flow".to_string();
    task.status = "in_progress".to_string();
    task.priority = "high".to_string();
    repo.update(&task).await.unwrap();

    // Then
    let found = repo.find_by_id(task.id).await.unwrap().unwrap();
    assert_that!(found.title, eq("Review login flow"));
    assert_that!(found.status, eq("in_progress"));
    assert_that!(found.priority, eq("high"));
    assert_that!(found.created_at, eq(created_at));
}

#[tokio::test]
async fn given_existing_task_when_deleted_then_gone() {
    // Given
    let pool = create_test_pool().await;
    let project = ProjectRepository::new(pool.clone())
        .create(&new_project())
        .await
        .unwrap();
    let repo = TaskRepository::new(pool);
    let task = repo.create(&new_task(project.id)).await.unwrap();

    // When
    repo.delete(task.id).await.unwrap();

    // Then
    assert_that!(repo.find_by_id(task.id).await.unwrap(), none());
    assert!(matches!(
        repo.delete(task.id).await,
        Err(DbError::NotFound { .. })
    ));
}
