use crate::{
    AuthCommands, CliError, Commands, ConsoleNotifier, FilterArgs, Result as CliErrorResult,
    TaskCommands, TeamCommands, UserCommands,
};

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, info};
use serde::Serialize;
use serde_json::{Value, json};
use tm_auth::{GoTrueProvider, IdentityProvider, SessionFile};
use tm_config::Config;
use tm_core::{
    DashboardStats, KanbanBoard, NewTask, NewTeam, TaskFilter, TaskPriority, TaskStatus, User,
    members_of_team, tasks_assigned_to, tasks_created_by, tasks_of_team, teams_of_user,
    users_not_in_team,
};
use tm_store::RestStore;
use tm_sync::{ContextView, Notifier, TeamContext};
use uuid::Uuid;

/// Wires the configured backend into a team context and runs commands
pub struct App {
    config: Config,
    identity: Arc<GoTrueProvider>,
    notifier: Arc<dyn Notifier>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let mut identity =
            GoTrueProvider::new(&config.backend.auth_url(), &config.backend.anon_key);
        if let Some(path) = config.session_path() {
            debug!("Session file: {}", path.display());
            identity = identity.with_session_file(SessionFile::new(path));
        }

        Self {
            config,
            identity: Arc::new(identity),
            notifier: Arc::new(ConsoleNotifier::new()),
        }
    }

    /// Context bound to the stored session's access token, not loaded yet
    async fn context(&self) -> CliErrorResult<TeamContext> {
        let session = self.identity.get_session().await?;
        let store = RestStore::new(&self.config.backend.rest_url(), &self.config.backend.anon_key)
            .with_access_token(session.as_ref().map(|s| s.access_token.as_str()));

        let identity: Arc<dyn IdentityProvider> = self.identity.clone();
        Ok(TeamContext::new(
            identity,
            Arc::new(store),
            Arc::clone(&self.notifier),
        ))
    }

    /// Context with the current user resolved and all data loaded
    async fn loaded_context(&self) -> CliErrorResult<(TeamContext, ContextView)> {
        let context = self.context().await?;
        context.load().await?;
        let view = context
            .view()
            .await
            .ok_or_else(|| CliError::not_ready())?;
        Ok((context, view))
    }

    pub async fn run(&self, command: Commands) -> CliErrorResult<Value> {
        match command {
            Commands::Auth { action } => self.run_auth(action).await,
            Commands::Task { action } => self.run_task(action).await,
            Commands::Team { action } => self.run_team(action).await,
            Commands::User { action } => self.run_user(action).await,
            Commands::Board(filter) => {
                let filter = task_filter(&filter)?;
                let (_, view) = self.loaded_context().await?;
                to_json(&KanbanBoard::build(&view.tasks, &filter))
            }
            Commands::Dashboard(filter) => {
                let filter = task_filter(&filter)?;
                let (_, view) = self.loaded_context().await?;
                to_json(&DashboardStats::compute(&view.tasks, &filter))
            }
        }
    }

    async fn run_auth(&self, action: AuthCommands) -> CliErrorResult<Value> {
        match action {
            AuthCommands::Register {
                email,
                password,
                name,
            } => {
                let context = self.context().await?;
                let session = context.sign_up(&email, &password, &name).await?;
                Ok(json!({
                    "user_id": session.as_ref().map(|s| s.user_id()),
                    "email": email,
                    "confirmed": session.is_some(),
                    "profile": context.current_user().await,
                }))
            }
            AuthCommands::Login { email, password } => {
                let context = self.context().await?;
                let session = context.sign_in(&email, &password).await?;
                info!("Signed in as {}", session.user_id());
                Ok(json!({
                    "user_id": session.user_id(),
                    "email": session.user.email,
                    "expires_at": session.expires_at,
                    "profile": context.current_user().await,
                }))
            }
            AuthCommands::Logout => {
                let context = self.context().await?;
                context.sign_out().await?;
                Ok(json!({ "signed_out": true }))
            }
            AuthCommands::Whoami => {
                let (_, view) = self.loaded_context().await?;
                to_json(&view.current_user)
            }
        }
    }

    async fn run_task(&self, action: TaskCommands) -> CliErrorResult<Value> {
        match action {
            TaskCommands::List { filter } => {
                let filter = task_filter(&filter)?;
                let (_, view) = self.loaded_context().await?;
                to_json(&filter.apply(&view.tasks))
            }
            TaskCommands::Create {
                title,
                description,
                assignee_id,
                team_id,
                status,
                priority,
                due_date,
            } => {
                let assignee_id = parse_uuid("assignee-id", &assignee_id)?;
                let team_id = team_id
                    .as_deref()
                    .map(|id| parse_uuid("team-id", id))
                    .transpose()?;
                let status = status
                    .as_deref()
                    .map(str::parse::<TaskStatus>)
                    .transpose()?;
                let priority = priority
                    .as_deref()
                    .map(str::parse::<TaskPriority>)
                    .transpose()?;
                let due_date = due_date.as_deref().map(parse_due_date).transpose()?;

                let (context, view) = self.loaded_context().await?;
                let creator = signed_in(&view)?;

                let mut task = NewTask::new(title, description, assignee_id, creator.id);
                task.team_id = team_id;
                task.status = status.unwrap_or_default();
                task.priority = priority.unwrap_or_default();
                task.due_date = due_date;

                to_json(&context.add_task(task).await?)
            }
            TaskCommands::Status { id, status } => {
                let task_id = parse_uuid("id", &id)?;
                let status: TaskStatus = status.parse()?;

                let (context, view) = self.loaded_context().await?;
                if !view.tasks.iter().any(|t| t.id == task_id) {
                    return Err(CliError::not_found("Task", task_id));
                }
                context.update_task_status(task_id, status).await?;

                let snapshot = context.team_store().snapshot().await;
                let task = snapshot
                    .task(task_id)
                    .ok_or_else(|| CliError::not_found("Task", task_id))?;
                to_json(task)
            }
        }
    }

    async fn run_user(&self, action: UserCommands) -> CliErrorResult<Value> {
        match action {
            UserCommands::List => {
                let (_, view) = self.loaded_context().await?;
                to_json(&view.users)
            }
            UserCommands::Show { id } => {
                let user_id = parse_uuid("id", &id)?;
                let (_, view) = self.loaded_context().await?;
                let user = view
                    .users
                    .iter()
                    .find(|u| u.id == user_id)
                    .ok_or_else(|| CliError::not_found("User", user_id))?;

                Ok(json!({
                    "user": user,
                    "teams": teams_of_user(&view.teams, user_id),
                    "assigned_tasks": tasks_assigned_to(&view.tasks, user_id),
                    "created_tasks": tasks_created_by(&view.tasks, user_id),
                }))
            }
        }
    }

    async fn run_team(&self, action: TeamCommands) -> CliErrorResult<Value> {
        match action {
            TeamCommands::List => {
                let (_, view) = self.loaded_context().await?;
                to_json(&view.teams)
            }
            TeamCommands::Show { id } => {
                let team_id = parse_uuid("id", &id)?;
                let (_, view) = self.loaded_context().await?;
                let team = view
                    .teams
                    .iter()
                    .find(|t| t.id == team_id)
                    .ok_or_else(|| CliError::not_found("Team", team_id))?;

                Ok(json!({
                    "team": team,
                    "members": members_of_team(&view.users, team),
                    "available_users": users_not_in_team(&view.users, team),
                    "tasks": tasks_of_team(&view.tasks, team_id),
                }))
            }
            TeamCommands::Create { name, description } => {
                let (context, view) = self.loaded_context().await?;
                let creator = signed_in(&view)?;

                let team = context
                    .create_team(NewTeam::new(name, description, creator.id))
                    .await?;
                to_json(&team)
            }
            TeamCommands::AddMember { team_id, user_id } => {
                let team_id = parse_uuid("team-id", &team_id)?;
                let user_id = parse_uuid("user-id", &user_id)?;

                let (context, _) = self.loaded_context().await?;
                context.add_user_to_team(team_id, user_id).await?;

                let snapshot = context.team_store().snapshot().await;
                let team = snapshot
                    .team(team_id)
                    .ok_or_else(|| CliError::not_found("Team", team_id))?;
                to_json(team)
            }
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> CliErrorResult<Value> {
    Ok(serde_json::to_value(value)?)
}

fn signed_in(view: &ContextView) -> CliErrorResult<&User> {
    view.current_user
        .as_ref()
        .ok_or_else(|| CliError::not_signed_in())
}

#[track_caller]
pub(crate) fn parse_uuid(name: &str, value: &str) -> CliErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| CliError::invalid_argument(name, e.to_string()))
}

/// Accepts RFC 3339 timestamps and plain dates (midnight UTC)
pub(crate) fn parse_due_date(value: &str) -> CliErrorResult<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            CliError::invalid_argument("due-date", format!("expected RFC 3339 or YYYY-MM-DD, got {value}"))
        })
}

pub(crate) fn task_filter(args: &FilterArgs) -> CliErrorResult<TaskFilter> {
    let team_id = args
        .team_id
        .as_deref()
        .map(|id| parse_uuid("team-id", id))
        .transpose()?;
    let assignee_id = args
        .assignee_id
        .as_deref()
        .map(|id| parse_uuid("assignee-id", id))
        .transpose()?;

    Ok(TaskFilter::new(team_id, assignee_id))
}
