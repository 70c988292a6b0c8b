//! Conversions between store rows and entities.
//!
//! Rows are already typed by the time they reach these functions, so every
//! mapper is total. A row missing a required column fails when the store
//! deserializes it, not here.

use crate::{
    NewTask, NewTeam, ProfileRow, Task, TaskInsert, TaskRow, Team, TeamInsert, TeamMemberRow,
    TeamRow, User,
};

use uuid::Uuid;

/// Generated avatar used when a profile has none
pub const AVATAR_FALLBACK_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";

pub fn to_user(row: ProfileRow) -> User {
    let avatar = match row.avatar {
        Some(avatar) if !avatar.is_empty() => avatar,
        _ => format!("{}{}", AVATAR_FALLBACK_URL, row.name),
    };

    User {
        id: row.id,
        name: row.name,
        email: row.email,
        role: row.role,
        avatar,
    }
}

/// Build a team from its row and the membership rows, keeping only the
/// memberships that belong to it.
pub fn to_team(row: TeamRow, memberships: &[TeamMemberRow]) -> Team {
    let members = memberships
        .iter()
        .filter(|m| m.team_id == row.id)
        .map(|m| m.user_id)
        .collect();

    Team {
        id: row.id,
        name: row.name,
        description: row.description.unwrap_or_default(),
        members,
        created_by: row.created_by,
        created_at: row.created_at,
    }
}

pub fn to_task(row: TaskRow) -> Task {
    Task {
        id: row.id,
        title: row.title,
        description: row.description.unwrap_or_default(),
        assignee_id: row.assignee_id,
        team_id: row.team_id,
        status: row.status,
        priority: row.priority,
        created_by: row.created_by,
        created_at: row.created_at,
        due_date: row.due_date,
    }
}

pub fn task_insert(task: &NewTask) -> TaskInsert {
    TaskInsert {
        title: task.title.clone(),
        description: task.description.clone(),
        assignee_id: task.assignee_id,
        team_id: task.team_id,
        status: task.status,
        priority: task.priority,
        created_by: task.created_by,
        due_date: task.due_date,
    }
}

/// Members are not part of the insert; the store's trigger adds the creator.
pub fn team_insert(team: &NewTeam) -> TeamInsert {
    TeamInsert {
        name: team.name.clone(),
        description: team.description.clone(),
        created_by: team.created_by,
    }
}

pub fn team_member_insert(team_id: Uuid, user_id: Uuid) -> TeamMemberRow {
    TeamMemberRow { team_id, user_id }
}

/// A freshly inserted team row: the creator is its only member.
pub fn to_created_team(row: TeamRow) -> Team {
    let creator = row.created_by;
    let mut team = to_team(row, &[]);
    team.members = vec![creator];
    team
}
