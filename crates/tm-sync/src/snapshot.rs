use tm_core::{Task, TaskStatus, Team, User};

use serde::Serialize;
use uuid::Uuid;

/// Immutable view of the collections held by the team store.
/// Every change produces a new snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub teams: Vec<Team>,
    pub users: Vec<User>,
    pub tasks: Vec<Task>,
}

impl Snapshot {
    pub fn new(teams: Vec<Team>, users: Vec<User>, tasks: Vec<Task>) -> Self {
        Self {
            teams,
            users,
            tasks,
        }
    }

    pub fn with_task(&self, task: Task) -> Self {
        let mut next = self.clone();
        next.tasks.push(task);
        next
    }

    /// Only the matching task's status changes; order is kept
    pub fn with_task_status(&self, task_id: Uuid, status: TaskStatus) -> Self {
        let mut next = self.clone();
        for task in next.tasks.iter_mut().filter(|t| t.id == task_id) {
            task.status = status;
        }
        next
    }

    pub fn with_team(&self, team: Team) -> Self {
        let mut next = self.clone();
        next.teams.push(team);
        next
    }

    /// Append `user_id` to the team's members unless already there
    pub fn with_member(&self, team_id: Uuid, user_id: Uuid) -> Self {
        let mut next = self.clone();
        for team in next.teams.iter_mut().filter(|t| t.id == team_id) {
            if !team.has_member(user_id) {
                team.members.push(user_id);
            }
        }
        next
    }

    pub fn team(&self, team_id: Uuid) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    pub fn task(&self, task_id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    pub fn user(&self, user_id: Uuid) -> Option<&User> {
        self.users.iter().find(|u| u.id == user_id)
    }
}
