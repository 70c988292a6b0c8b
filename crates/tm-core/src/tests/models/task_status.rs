use crate::{TaskPriority, TaskStatus};

use std::str::FromStr;

#[test]
fn test_task_status_as_str() {
    assert_eq!(TaskStatus::Todo.as_str(), "todo");
    assert_eq!(TaskStatus::InProgress.as_str(), "in-progress");
    assert_eq!(TaskStatus::Review.as_str(), "review");
    assert_eq!(TaskStatus::Done.as_str(), "done");
}

#[test]
fn test_task_status_from_str() {
    assert_eq!(
        TaskStatus::from_str("in-progress").unwrap(),
        TaskStatus::InProgress
    );
    assert_eq!(TaskStatus::from_str("done").unwrap(), TaskStatus::Done);
    assert!(TaskStatus::from_str("in_progress").is_err());
    assert!(TaskStatus::from_str("backlog").is_err());
}

#[test]
fn test_task_status_serde_uses_wire_form() {
    let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
    assert_eq!(json, "\"in-progress\"");

    let parsed: TaskStatus = serde_json::from_str("\"review\"").unwrap();
    assert_eq!(parsed, TaskStatus::Review);
}

#[test]
fn test_task_status_default_is_todo() {
    assert_eq!(TaskStatus::default(), TaskStatus::Todo);
}

#[test]
fn test_task_priority_round_trip_through_str() {
    for priority in TaskPriority::ALL {
        assert_eq!(TaskPriority::from_str(priority.as_str()).unwrap(), priority);
    }
    assert!(TaskPriority::from_str("critical").is_err());
}
