use std::fmt;

/// One remote store call, used to target failure injection and to label logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    SelectProfiles,
    SelectProfile,
    SelectTeams,
    SelectTeamMembers,
    SelectTasks,
    InsertTask,
    UpdateTaskStatus,
    InsertTeam,
    InsertTeamMember,
}

impl StoreOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SelectProfiles => "select_profiles",
            Self::SelectProfile => "select_profile",
            Self::SelectTeams => "select_teams",
            Self::SelectTeamMembers => "select_team_members",
            Self::SelectTasks => "select_tasks",
            Self::InsertTask => "insert_task",
            Self::UpdateTaskStatus => "update_task_status",
            Self::InsertTeam => "insert_team",
            Self::InsertTeamMember => "insert_team_member",
        }
    }

    /// Table the operation reads or writes
    pub fn table(&self) -> &'static str {
        match self {
            Self::SelectProfiles | Self::SelectProfile => "profiles",
            Self::SelectTeams | Self::InsertTeam => "teams",
            Self::SelectTeamMembers | Self::InsertTeamMember => "team_members",
            Self::SelectTasks | Self::InsertTask | Self::UpdateTaskStatus => "tasks",
        }
    }
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
