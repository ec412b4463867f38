use crate::NewTask;
use crate::models::task::{DEFAULT_TASK_PRIORITY, DEFAULT_TASK_STATUS};

#[test]
fn test_new_task_defaults() {
    let draft = NewTask::new("Fix login redirect", 3);

    assert_eq!(draft.title, "Fix login redirect");
    assert_eq!(draft.project_id, 3);
    assert_eq!(draft.sprint_id, None);
    assert_eq!(draft.status, DEFAULT_TASK_STATUS);
    assert_eq!(draft.priority, DEFAULT_TASK_PRIORITY);
}
