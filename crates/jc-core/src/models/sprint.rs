//! Sprint entity - a time-boxed unit of work within a project.

use crate::{SprintStatus, Task};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A persisted sprint row. `id`, `created_at` and `updated_at` are assigned
/// by the storage layer; everything else is application data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprint {
    pub id: i64,

    pub name: String,
    pub goal: Option<String>,

    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,

    /// Absent until explicitly set; there is no stored default.
    pub status: Option<SprintStatus>,

    /// Optional owning project. The sprint does not manage the
    /// project's lifecycle.
    pub project_id: Option<i64>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Sprint {
    pub fn is_active(&self) -> bool {
        self.status == Some(SprintStatus::Active)
    }
}

/// Insert draft for a sprint. Built incrementally, then handed to the
/// repository, which assigns the id and both timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSprint {
    pub name: String,
    pub goal: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<SprintStatus>,
    pub project_id: Option<i64>,
}

impl NewSprint {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Read-side view of a sprint with its tasks. Task membership is derived
/// from each task's own `sprint_id` foreign key; the collection here is
/// materialized by a query, never maintained by assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SprintWithTasks {
    pub sprint: Sprint,
    pub tasks: Vec<Task>,
}
