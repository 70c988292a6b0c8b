use crate::{NewTask, NewTeam, TaskPriority, TaskStatus};

use uuid::Uuid;

#[test]
fn test_new_team_seeds_creator_as_member() {
    let creator = Uuid::new_v4();
    let team = NewTeam::new("Ops".to_string(), String::new(), creator);

    assert_eq!(team.members, vec![creator]);
    assert_eq!(team.created_by, creator);
}

#[test]
fn test_new_task_defaults_to_personal_todo() {
    let user = Uuid::new_v4();
    let task = NewTask::new("Title".to_string(), "Body".to_string(), user, user);

    assert!(task.team_id.is_none());
    assert_eq!(task.status, TaskStatus::Todo);
    assert_eq!(task.priority, TaskPriority::Medium);
}
