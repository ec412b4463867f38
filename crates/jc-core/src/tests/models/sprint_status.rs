use crate::{CoreError, SprintStatus};

use std::str::FromStr;

#[test]
fn test_as_str_round_trip() {
    for status in [
        SprintStatus::Planning,
        SprintStatus::Active,
        SprintStatus::Completed,
    ] {
        let parsed = SprintStatus::from_str(status.as_str()).unwrap();
        assert_eq!(parsed, status);
    }
}

#[test]
fn test_from_str_valid_values() {
    assert_eq!(
        SprintStatus::from_str("planning").unwrap(),
        SprintStatus::Planning
    );
    assert_eq!(
        SprintStatus::from_str("active").unwrap(),
        SprintStatus::Active
    );
    assert_eq!(
        SprintStatus::from_str("completed").unwrap(),
        SprintStatus::Completed
    );
}

#[test]
fn test_from_str_rejects_unknown_values() {
    for value in ["", "PLANNING", "done", "cancelled", "Active "] {
        let result = SprintStatus::from_str(value);
        assert!(matches!(
            result,
            Err(CoreError::InvalidSprintStatus { .. })
        ));
    }
}
