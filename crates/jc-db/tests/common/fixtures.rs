#![allow(dead_code)]

use chrono::NaiveDate;
use jc_core::{NewProject, NewSprint, NewTask, SprintStatus};

/// Creates a test project draft
pub fn new_project() -> NewProject {
    NewProject {
        name: "Test Project".to_string(),
        description: Some("Test project description".to_string()),
    }
}

/// Creates a test sprint draft with sensible defaults
pub fn new_sprint(project_id: i64) -> NewSprint {
    NewSprint {
        name: "Test Sprint".to_string(),
        goal: Some("Test sprint goal".to_string()),
        start_date: NaiveDate::from_ymd_opt(2026, 8, 3),
        end_date: NaiveDate::from_ymd_opt(2026, 8, 17), // 2-week sprint
        status: Some(SprintStatus::Planning),
        project_id: Some(project_id),
    }
}

/// Creates a test task draft with sensible defaults
pub fn new_task(project_id: i64) -> NewTask {
    NewTask {
        title: "Test Task".to_string(),
        description: Some("Test description".to_string()),
        status: "todo".to_string(),
        priority: "medium".to_string(),
        project_id,
        sprint_id: None,
    }
}
