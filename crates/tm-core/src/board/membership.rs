use crate::{Task, Team, User};

use uuid::Uuid;

pub fn teams_of_user(teams: &[Team], user_id: Uuid) -> Vec<&Team> {
    teams.iter().filter(|t| t.has_member(user_id)).collect()
}

/// Users belonging to a team, in user-list order
pub fn members_of_team<'a>(users: &'a [User], team: &Team) -> Vec<&'a User> {
    users.iter().filter(|u| team.has_member(u.id)).collect()
}

/// Candidates for the add-member action
pub fn users_not_in_team<'a>(users: &'a [User], team: &Team) -> Vec<&'a User> {
    users.iter().filter(|u| !team.has_member(u.id)).collect()
}

pub fn tasks_of_team(tasks: &[Task], team_id: Uuid) -> Vec<&Task> {
    tasks.iter().filter(|t| t.team_id == Some(team_id)).collect()
}

pub fn tasks_assigned_to(tasks: &[Task], user_id: Uuid) -> Vec<&Task> {
    tasks.iter().filter(|t| t.assignee_id == user_id).collect()
}

pub fn tasks_created_by(tasks: &[Task], user_id: Uuid) -> Vec<&Task> {
    tasks.iter().filter(|t| t.created_by == user_id).collect()
}
