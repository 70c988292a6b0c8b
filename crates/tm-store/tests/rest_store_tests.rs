//! Integration tests for the PostgREST store using a wiremock server

use tm_core::{TaskInsert, TaskPriority, TaskStatus, TeamInsert, TeamMemberRow, UserRole};
use tm_store::{RemoteStore, RestStore, StoreError};

use serde_json::json;
use uuid::Uuid;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path, query_param},
};

const USER_ID: &str = "00000000-0000-0000-0000-0000000000aa";
const TEAM_ID: &str = "00000000-0000-0000-0000-0000000000bb";
const TASK_ID: &str = "00000000-0000-0000-0000-0000000000cc";

fn store(server: &MockServer) -> RestStore {
    RestStore::new(&format!("{}/rest/v1", server.uri()), "anon")
        .with_access_token(Some("user-jwt"))
}

#[tokio::test]
async fn test_select_teams_sends_keys_and_parses_rows() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/teams"))
        .and(query_param("select", "*"))
        .and(header("apikey", "anon"))
        .and(header("authorization", "Bearer user-jwt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": TEAM_ID,
                "name": "Core",
                "description": null,
                "created_by": USER_ID,
                "created_at": "2024-05-01T09:00:00+00:00"
            }
        ])))
        .mount(&mock_server)
        .await;

    let teams = store(&mock_server).select_teams().await.unwrap();

    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].name, "Core");
    assert_eq!(teams[0].description, None);
    assert_eq!(teams[0].created_by.to_string(), USER_ID);
}

#[tokio::test]
async fn test_anonymous_store_sends_anon_key_as_bearer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/team_members"))
        .and(header("authorization", "Bearer anon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "team_id": TEAM_ID, "user_id": USER_ID }
        ])))
        .mount(&mock_server)
        .await;

    let store = RestStore::new(&format!("{}/rest/v1", mock_server.uri()), "anon");
    let members = store.select_team_members().await.unwrap();

    assert_eq!(members.len(), 1);
    assert_eq!(members[0].user_id.to_string(), USER_ID);
}

#[tokio::test]
async fn test_access_token_swapped_after_construction_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/tasks"))
        .and(header("authorization", "Bearer fresh-jwt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/tasks"))
        .and(header("authorization", "Bearer anon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = RestStore::new(&format!("{}/rest/v1", mock_server.uri()), "anon");
    store.set_access_token(Some("fresh-jwt"));
    store.select_tasks().await.unwrap();
    assert_eq!(store.access_token().as_deref(), Some("fresh-jwt"));

    store.set_access_token(None);
    store.select_tasks().await.unwrap();
    assert_eq!(store.access_token(), None);
}

#[tokio::test]
async fn test_select_profile_requests_single_object() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .and(query_param("id", format!("eq.{}", USER_ID)))
        .and(header("accept", "application/vnd.pgrst.object+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": USER_ID,
            "name": "Maria",
            "email": "maria@example.com",
            "role": "admin",
            "avatar": null
        })))
        .mount(&mock_server)
        .await;

    let profile = store(&mock_server)
        .select_profile(Uuid::parse_str(USER_ID).unwrap())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(profile.name, "Maria");
    assert_eq!(profile.role, UserRole::Admin);
    assert_eq!(profile.avatar, None);
}

#[tokio::test]
async fn test_select_profile_without_row_returns_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(406).set_body_json(json!({
            "code": "PGRST116",
            "details": "The result contains 0 rows",
            "hint": null,
            "message": "JSON object requested, multiple (or no) rows returned"
        })))
        .mount(&mock_server)
        .await;

    let profile = store(&mock_server)
        .select_profile(Uuid::parse_str(USER_ID).unwrap())
        .await
        .unwrap();

    assert!(profile.is_none());
}

#[tokio::test]
async fn test_insert_task_asks_for_representation() {
    let mock_server = MockServer::start().await;
    let user = Uuid::parse_str(USER_ID).unwrap();
    let insert = TaskInsert {
        title: "Write docs".to_string(),
        description: "Getting started".to_string(),
        assignee_id: user,
        team_id: None,
        status: TaskStatus::InProgress,
        priority: TaskPriority::Low,
        created_by: user,
        due_date: None,
    };

    Mock::given(method("POST"))
        .and(path("/rest/v1/tasks"))
        .and(header("prefer", "return=representation"))
        .and(body_json(json!({
            "title": "Write docs",
            "description": "Getting started",
            "assignee_id": USER_ID,
            "team_id": null,
            "status": "in-progress",
            "priority": "low",
            "created_by": USER_ID,
            "due_date": null
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": TASK_ID,
            "title": "Write docs",
            "description": "Getting started",
            "assignee_id": USER_ID,
            "team_id": null,
            "status": "in-progress",
            "priority": "low",
            "created_by": USER_ID,
            "created_at": "2024-05-02T10:15:00.123456+00:00",
            "due_date": null
        })))
        .mount(&mock_server)
        .await;

    let row = store(&mock_server).insert_task(&insert).await.unwrap();

    assert_eq!(row.id.to_string(), TASK_ID);
    assert_eq!(row.status, TaskStatus::InProgress);
    assert_eq!(row.due_date, None);
}

#[tokio::test]
async fn test_update_task_status_patches_by_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/tasks"))
        .and(query_param("id", format!("eq.{}", TASK_ID)))
        .and(body_json(json!({ "status": "done" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = store(&mock_server)
        .update_task_status(Uuid::parse_str(TASK_ID).unwrap(), TaskStatus::Done)
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_insert_team_returns_stored_row() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/teams"))
        .and(body_json(json!({
            "name": "Ops",
            "description": "",
            "created_by": USER_ID
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": TEAM_ID,
            "name": "Ops",
            "description": "",
            "created_by": USER_ID,
            "created_at": "2024-05-01T09:00:00+00:00"
        })))
        .mount(&mock_server)
        .await;

    let row = store(&mock_server)
        .insert_team(&TeamInsert {
            name: "Ops".to_string(),
            description: String::new(),
            created_by: Uuid::parse_str(USER_ID).unwrap(),
        })
        .await
        .unwrap();

    assert_eq!(row.id.to_string(), TEAM_ID);
    assert_eq!(row.description.as_deref(), Some(""));
}

#[tokio::test]
async fn test_duplicate_member_surfaces_api_error_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/team_members"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "code": "23505",
            "details": "Key (team_id, user_id) already exists.",
            "hint": null,
            "message": "duplicate key value violates unique constraint \"team_members_pkey\""
        })))
        .mount(&mock_server)
        .await;

    let err = store(&mock_server)
        .insert_team_member(&TeamMemberRow {
            team_id: Uuid::parse_str(TEAM_ID).unwrap(),
            user_id: Uuid::parse_str(USER_ID).unwrap(),
        })
        .await
        .unwrap_err();

    assert!(err.is_unique_violation());
    match err {
        StoreError::Api {
            status,
            details,
            hint,
            ..
        } => {
            assert_eq!(status, 409);
            assert_eq!(
                details.as_deref(),
                Some("Key (team_id, user_id) already exists.")
            );
            assert_eq!(hint, None);
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_without_body_uses_status_as_code() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/tasks"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let err = store(&mock_server).select_tasks().await.unwrap_err();

    assert_eq!(err.code(), Some("502"));
    assert_eq!(err.user_message(), "");
}

#[tokio::test]
async fn test_row_missing_required_column_is_json_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": USER_ID, "name": "Maria" }
        ])))
        .mount(&mock_server)
        .await;

    let err = store(&mock_server).select_profiles().await.unwrap_err();

    assert!(matches!(err, StoreError::Json { .. }));
}
