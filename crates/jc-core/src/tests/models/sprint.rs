use crate::{NewSprint, Sprint, SprintStatus};

use chrono::{NaiveDate, Utc};

#[test]
fn test_new_sprint_defaults() {
    let draft = NewSprint::new("Sprint 12");

    assert_eq!(draft.name, "Sprint 12");
    assert_eq!(draft.goal, None);
    assert_eq!(draft.start_date, None);
    assert_eq!(draft.end_date, None);
    assert_eq!(draft.status, None);
    assert_eq!(draft.project_id, None);
}

#[test]
fn test_new_sprint_default_is_empty() {
    let draft = NewSprint::default();

    assert_eq!(draft.name, "");
    assert_eq!(draft.status, None);
}

#[test]
fn test_sprint_full_construction() {
    let now = Utc::now();
    let sprint = Sprint {
        id: 7,
        name: "Sprint 12".to_string(),
        goal: Some("Ship v2".to_string()),
        start_date: NaiveDate::from_ymd_opt(2026, 8, 3),
        end_date: NaiveDate::from_ymd_opt(2026, 8, 17),
        status: Some(SprintStatus::Planning),
        project_id: Some(1),
        created_at: now,
        updated_at: now,
    };

    assert_eq!(sprint.id, 7);
    assert_eq!(sprint.status, Some(SprintStatus::Planning));
    assert!(!sprint.is_active());
}

#[test]
fn test_sprint_is_active() {
    let now = Utc::now();
    let mut sprint = Sprint {
        id: 1,
        name: "Sprint 1".to_string(),
        goal: None,
        start_date: None,
        end_date: None,
        status: None,
        project_id: None,
        created_at: now,
        updated_at: now,
    };

    assert!(!sprint.is_active());

    sprint.status = Some(SprintStatus::Active);
    assert!(sprint.is_active());

    sprint.status = Some(SprintStatus::Completed);
    assert!(!sprint.is_active());
}
