use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TASK_STATUS: &str = "todo";
pub const DEFAULT_TASK_PRIORITY: &str = "medium";

/// A unit of work inside a project. Sprint membership lives here, on the
/// task's `sprint_id` foreign key; the sprint side only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,

    pub title: String,
    pub description: Option<String>,

    // Workflow vocabulary is owned by the consuming layer
    pub status: String,
    pub priority: String,

    pub project_id: i64,
    pub sprint_id: Option<i64>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert draft for a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    pub project_id: i64,
    pub sprint_id: Option<i64>,
}

impl NewTask {
    pub fn new(title: impl Into<String>, project_id: i64) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: DEFAULT_TASK_STATUS.to_string(),
            priority: DEFAULT_TASK_PRIORITY.to_string(),
            project_id,
            sprint_id: None,
        }
    }
}
