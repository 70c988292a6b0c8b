use crate::error::NO_ROWS;
use crate::{RemoteStore, Result as StoreErrorResult, StoreError, StoreOperation};

use std::panic::Location;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, header::ACCEPT};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use tm_core::{ProfileRow, TaskInsert, TaskRow, TaskStatus, TeamInsert, TeamMemberRow, TeamRow};
use uuid::Uuid;

/// Media type asking PostgREST for a single object instead of an array
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Remote store backed by the PostgREST API (`<project>/rest/v1`)
pub struct RestStore {
    pub base_url: String,
    anon_key: String,
    access_token: RwLock<Option<String>>,
    client: ReqwestClient,
}

/// PostgREST error body
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Option<String>,
    #[serde(default)]
    hint: Option<String>,
}

impl RestStore {
    /// # Arguments
    /// * `rest_url` - REST API root (e.g., "https://abc.example.co/rest/v1")
    /// * `anon_key` - Public API key sent as the `apikey` header
    pub fn new(rest_url: &str, anon_key: &str) -> Self {
        Self {
            base_url: rest_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            access_token: RwLock::new(None),
            client: ReqwestClient::new(),
        }
    }

    /// Run requests as a signed-in user instead of the anonymous role
    pub fn with_access_token(self, access_token: Option<&str>) -> Self {
        self.set_access_token(access_token);
        self
    }

    /// Token sent as the bearer; `None` means the anonymous role
    pub fn access_token(&self) -> Option<String> {
        self.access_token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Build a table request carrying the API key and bearer token
    fn request(&self, method: Method, operation: StoreOperation) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, operation.table());
        debug!("{} {} ({})", method, url, operation);

        let bearer = self.access_token().unwrap_or_else(|| self.anon_key.clone());
        self.client
            .request(method, &url)
            .header("apikey", &self.anon_key)
            .bearer_auth(bearer)
    }

    /// Execute request and turn non-success statuses into `StoreError::Api`
    async fn execute(&self, req: RequestBuilder) -> StoreErrorResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let body: ApiErrorBody = serde_json::from_str(&text).unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                code: body.code.unwrap_or_else(|| status.as_u16().to_string()),
                message: body.message.unwrap_or_default(),
                details: body.details,
                hint: body.hint,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }

    async fn fetch<T: DeserializeOwned>(&self, req: RequestBuilder) -> StoreErrorResult<T> {
        let value = self.execute(req).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn select_all<T: DeserializeOwned>(
        &self,
        operation: StoreOperation,
    ) -> StoreErrorResult<Vec<T>> {
        let req = self
            .request(Method::GET, operation)
            .query(&[("select", "*")]);
        self.fetch(req).await
    }

    /// Insert one row and read back its stored representation
    async fn insert_returning<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        operation: StoreOperation,
        body: &B,
    ) -> StoreErrorResult<T> {
        let req = self
            .request(Method::POST, operation)
            .query(&[("select", "*")])
            .header("Prefer", "return=representation")
            .header(ACCEPT, SINGLE_OBJECT)
            .json(body);
        self.fetch(req).await
    }
}

#[async_trait]
impl RemoteStore for RestStore {
    async fn select_profiles(&self) -> StoreErrorResult<Vec<ProfileRow>> {
        self.select_all(StoreOperation::SelectProfiles).await
    }

    async fn select_profile(&self, id: Uuid) -> StoreErrorResult<Option<ProfileRow>> {
        let filter = format!("eq.{}", id);
        let req = self
            .request(Method::GET, StoreOperation::SelectProfile)
            .query(&[("select", "*"), ("id", filter.as_str())])
            .header(ACCEPT, SINGLE_OBJECT);

        match self.fetch(req).await {
            Ok(row) => Ok(Some(row)),
            Err(e) if e.code() == Some(NO_ROWS) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn select_teams(&self) -> StoreErrorResult<Vec<TeamRow>> {
        self.select_all(StoreOperation::SelectTeams).await
    }

    async fn select_team_members(&self) -> StoreErrorResult<Vec<TeamMemberRow>> {
        self.select_all(StoreOperation::SelectTeamMembers).await
    }

    async fn select_tasks(&self) -> StoreErrorResult<Vec<TaskRow>> {
        self.select_all(StoreOperation::SelectTasks).await
    }

    async fn insert_task(&self, task: &TaskInsert) -> StoreErrorResult<TaskRow> {
        self.insert_returning(StoreOperation::InsertTask, task).await
    }

    async fn update_task_status(&self, id: Uuid, status: TaskStatus) -> StoreErrorResult<()> {
        #[derive(Serialize)]
        struct StatusUpdate {
            status: TaskStatus,
        }

        let filter = format!("eq.{}", id);
        let req = self
            .request(Method::PATCH, StoreOperation::UpdateTaskStatus)
            .query(&[("id", filter.as_str())])
            .json(&StatusUpdate { status });
        self.execute(req).await?;
        Ok(())
    }

    async fn insert_team(&self, team: &TeamInsert) -> StoreErrorResult<TeamRow> {
        self.insert_returning(StoreOperation::InsertTeam, team).await
    }

    async fn insert_team_member(&self, member: &TeamMemberRow) -> StoreErrorResult<()> {
        let req = self
            .request(Method::POST, StoreOperation::InsertTeamMember)
            .json(member);
        self.execute(req).await?;
        Ok(())
    }

    fn set_access_token(&self, access_token: Option<&str>) {
        *self
            .access_token
            .write()
            .unwrap_or_else(PoisonError::into_inner) = access_token.map(String::from);
    }
}
