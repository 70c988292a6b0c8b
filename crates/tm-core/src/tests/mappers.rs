use crate::mappers::{
    AVATAR_FALLBACK_URL, task_insert, team_insert, to_created_team, to_task, to_team, to_user,
};
use crate::{
    NewTask, NewTeam, ProfileRow, TaskPriority, TaskRow, TaskStatus, TeamMemberRow, TeamRow,
    UserRole,
};

use chrono::{TimeZone, Utc};
use googletest::prelude::*;
use serde_json::json;
use uuid::Uuid;

fn team_row(created_by: Uuid) -> TeamRow {
    TeamRow {
        id: Uuid::new_v4(),
        name: "Ops".to_string(),
        description: Some("Operations".to_string()),
        created_by,
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
    }
}

#[test]
fn given_profile_without_avatar_when_mapped_then_uses_generated_avatar() {
    let row = ProfileRow {
        id: Uuid::new_v4(),
        name: "Maria".to_string(),
        email: "maria@example.com".to_string(),
        role: UserRole::Member,
        avatar: None,
    };

    let user = to_user(row);

    assert_that!(user.avatar, eq(&format!("{}Maria", AVATAR_FALLBACK_URL)));
}

#[test]
fn given_profile_with_empty_avatar_when_mapped_then_uses_generated_avatar() {
    let row = ProfileRow {
        id: Uuid::new_v4(),
        name: "Pedro".to_string(),
        email: "pedro@example.com".to_string(),
        role: UserRole::Member,
        avatar: Some(String::new()),
    };

    let user = to_user(row);

    assert_that!(user.avatar, ends_with("seed=Pedro"));
}

#[test]
fn given_profile_with_avatar_when_mapped_then_keeps_it() {
    let row = ProfileRow {
        id: Uuid::new_v4(),
        name: "Admin".to_string(),
        email: "admin@example.com".to_string(),
        role: UserRole::Admin,
        avatar: Some("https://cdn.example.com/a.png".to_string()),
    };

    let user = to_user(row);

    assert_that!(user.avatar.as_str(), eq("https://cdn.example.com/a.png"));
    assert_that!(user.is_admin(), eq(true));
}

#[test]
fn given_memberships_for_several_teams_when_mapped_then_only_own_members_in_order() {
    let creator = Uuid::new_v4();
    let second = Uuid::new_v4();
    let row = team_row(creator);
    let other_team = Uuid::new_v4();
    let memberships = vec![
        TeamMemberRow {
            team_id: row.id,
            user_id: creator,
        },
        TeamMemberRow {
            team_id: other_team,
            user_id: Uuid::new_v4(),
        },
        TeamMemberRow {
            team_id: row.id,
            user_id: second,
        },
    ];

    let team = to_team(row, &memberships);

    assert_that!(team.members, elements_are![eq(&creator), eq(&second)]);
    assert_that!(team.description.as_str(), eq("Operations"));
}

#[test]
fn given_inserted_team_row_when_mapped_as_created_then_members_is_creator_only() {
    let creator = Uuid::new_v4();

    let team = to_created_team(team_row(creator));

    assert_that!(team.members, elements_are![eq(&creator)]);
}

#[test]
fn given_task_json_with_null_due_date_when_mapped_then_due_date_is_none() {
    let user = Uuid::new_v4();
    let row: TaskRow = serde_json::from_value(json!({
        "id": Uuid::new_v4(),
        "title": "Fix login",
        "description": null,
        "assignee_id": user,
        "team_id": null,
        "status": "in-progress",
        "priority": "high",
        "created_by": user,
        "created_at": "2024-05-02T10:15:00.123456+00:00",
        "due_date": null
    }))
    .unwrap();

    let task = to_task(row);

    assert_that!(task.due_date, none());
    assert_that!(task.team_id, none());
    assert_that!(task.description.as_str(), eq(""));
    assert_that!(task.status, eq(TaskStatus::InProgress));
    assert_that!(task.priority, eq(TaskPriority::High));
    assert!(task.is_personal());
}

#[test]
fn given_task_json_with_due_date_when_mapped_then_due_date_is_parsed() {
    let user = Uuid::new_v4();
    let row: TaskRow = serde_json::from_value(json!({
        "id": Uuid::new_v4(),
        "title": "Ship",
        "description": "Ship it",
        "assignee_id": user,
        "team_id": Uuid::new_v4(),
        "status": "todo",
        "priority": "low",
        "created_by": user,
        "created_at": "2024-05-02T10:15:00Z",
        "due_date": "2024-06-01T00:00:00Z"
    }))
    .unwrap();

    let task = to_task(row);

    assert_that!(
        task.due_date,
        some(eq(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()))
    );
}

#[test]
fn given_task_json_missing_required_field_when_deserialized_then_fails() {
    let result: std::result::Result<TaskRow, _> = serde_json::from_value(json!({
        "id": Uuid::new_v4(),
        "title": "No assignee",
        "status": "todo",
        "priority": "low",
        "created_by": Uuid::new_v4(),
        "created_at": "2024-05-02T10:15:00Z"
    }));

    assert!(result.is_err());
}

#[test]
fn test_task_insert_copies_every_field() {
    let user = Uuid::new_v4();
    let team = Uuid::new_v4();
    let mut task = NewTask::new("T".to_string(), "D".to_string(), user, user);
    task.team_id = Some(team);
    task.status = TaskStatus::Review;

    let insert = task_insert(&task);

    assert_eq!(insert.team_id, Some(team));
    assert_eq!(insert.status, TaskStatus::Review);
    assert_eq!(insert.assignee_id, user);
}

#[test]
fn test_task_insert_serializes_absent_team_as_null() {
    let user = Uuid::new_v4();
    let insert = task_insert(&NewTask::new("T", "D", user, user));

    let value = serde_json::to_value(&insert).unwrap();

    assert!(value["team_id"].is_null());
    assert!(value["due_date"].is_null());
    assert_eq!(value["status"], "todo");
}

#[test]
fn test_team_insert_drops_members() {
    let creator = Uuid::new_v4();
    let mut team = NewTeam::new("Ops", "", creator);
    team.members.push(Uuid::new_v4());

    let value = serde_json::to_value(team_insert(&team)).unwrap();

    assert!(value.get("members").is_none());
    assert_eq!(value["created_by"], json!(creator));
}
