//! Testes de rota do gateway contra um HubSpot simulado

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use config::{Config, File, FileFormat};
use httpmock::prelude::*;
use httpmock::Method::PATCH;
use hubspot_crm_gateway::{build_router, config::Settings, AppState};
use serde_json::{json, Value};
use tokio_test::{assert_err, assert_ok};
use tower::ServiceExt;

fn settings(server: &MockServer, static_token: &str, with_oauth: bool) -> Settings {
    let mut toml = format!(
        r#"
        [server]
        host = "127.0.0.1"
        port = 0

        [hubspot]
        account_id = "42"
        base_url = "{}"
        static_token = "{}"
        "#,
        server.url("/crm/v3"),
        static_token
    );

    if with_oauth {
        toml.push_str(&format!(
            r#"
            [oauth]
            client_id = "cid"
            client_secret = "secret"
            redirect_url = "http://localhost/auth/hubspot/callback"
            setup_url = "https://app.hubspot.com/oauth/authorize?client_id=cid"
            base_url = "{}"
            "#,
            server.url("/oauth/v1")
        ));
    }

    let builder = Config::builder().add_source(File::from_str(&toml, FileFormat::Toml));
    Settings::from_builder(builder, |_| None).unwrap()
}

fn app(settings: Settings) -> Router {
    let state = AppState::from_settings(settings).unwrap();
    build_router(Arc::new(state))
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, "Bearer per-call")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let server = MockServer::start_async().await;
    let response = app(settings(&server, "", false))
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["crm"]["auth_mode"], "oauth_per_request");
    assert_eq!(body["oauth_enabled"], false);
}

#[tokio::test]
async fn test_oauth_routes_unavailable_without_credentials() {
    let server = MockServer::start_async().await;
    let response = app(settings(&server, "", false))
        .oneshot(Request::get("/auth/hubspot").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = json_body(response).await;
    assert_eq!(body["status"], 503);
}

#[tokio::test]
async fn test_start_oauth_flow_redirects_to_setup_url() {
    let server = MockServer::start_async().await;
    let response = app(settings(&server, "", true))
        .oneshot(Request::get("/auth/hubspot").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION],
        "https://app.hubspot.com/oauth/authorize?client_id=cid"
    );
}

#[tokio::test]
async fn test_oauth_callback_exchanges_code_and_introspects() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/oauth/v1/token")
                .body_contains("grant_type=authorization_code")
                .body_contains("code=abc");
            then.status(200).json_body(json!({
                "access_token": "A",
                "refresh_token": "R",
                "expires_in": 1800
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/oauth/v1/refresh-tokens/R");
            then.status(200).json_body(json!({"user": "u@x.io", "user_id": 555}));
        })
        .await;

    let response = app(settings(&server, "", true))
        .oneshot(
            Request::get("/auth/hubspot/callback?code=abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["tokens"]["access_token"], "A");
    assert_eq!(body["tokens"]["refresh_token"], "R");
    assert!(body["tokens"]["expires_at"].is_string());
    assert_eq!(body["user"]["user"], "u@x.io");
    assert_eq!(body["user"]["user_id"], 555);
}

#[tokio::test]
async fn test_oauth_callback_with_error_param() {
    let server = MockServer::start_async().await;
    let response = app(settings(&server, "", true))
        .oneshot(
            Request::get("/auth/hubspot/callback?error=access_denied")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_revoke_returns_no_content() {
    let server = MockServer::start_async().await;
    let revoked = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/oauth/v1/refresh-tokens/R");
            then.status(204);
        })
        .await;

    let response = app(settings(&server, "", true))
        .oneshot(json_request("POST", "/auth/hubspot/revoke", json!({"refresh_token": "R"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    revoked.assert_async().await;
}

#[tokio::test]
async fn test_refresh_rejects_blank_token() {
    let server = MockServer::start_async().await;
    let response = app(settings(&server, "", true))
        .oneshot(json_request("POST", "/auth/hubspot/refresh", json!({"refresh_token": " "})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_object_forwards_bearer_and_query() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/crm/v3/objects/0-1/123")
                .header("authorization", "Bearer per-call")
                .query_param("properties", "email,firstname");
            then.status(200).json_body(json!({
                "id": "123",
                "properties": {"email": "jane@example.com", "firstname": "Jane"}
            }));
        })
        .await;

    let response = app(settings(&server, "", false))
        .oneshot(
            Request::get("/crm/objects/0-1/123?properties=email,firstname")
                .header(header::AUTHORIZATION, "Bearer per-call")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["id"], "123");
    assert_eq!(body["properties"]["firstname"], "Jane");
}

#[tokio::test]
async fn test_get_object_without_any_token_is_unauthorized() {
    let server = MockServer::start_async().await;
    let response = app(settings(&server, "", false))
        .oneshot(Request::get("/crm/objects/0-1/123").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_static_token_mode() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/crm/v3/owners/77")
                .header("authorization", "Bearer pat-static");
            then.status(200).json_body(json!({"id": "77", "email": "o@x.io"}));
        })
        .await;

    let router = app(settings(&server, "pat-static", false));

    let ok = router
        .clone()
        .oneshot(Request::get("/crm/owners/77").body(Body::empty()).unwrap())
        .await;
    let ok = assert_ok!(ok);
    assert_eq!(ok.status(), StatusCode::OK);
    mock.assert_async().await;

    // um token por requisição em modo estático é conflito de autenticação
    let conflict = router
        .oneshot(
            Request::get("/crm/owners/77")
                .header(header::AUTHORIZATION, "Bearer per-call")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(conflict.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_batch_read_count_mismatch_is_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/crm/v3/objects/0-1/batch/read");
            then.status(200).json_body(json!({"results": [{"id": "1"}]}));
        })
        .await;

    let response = app(settings(&server, "", false))
        .oneshot(json_request(
            "POST",
            "/crm/objects/0-1/batch/read",
            json!({"ids": ["1", "2"], "properties": ["email"]}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn test_batch_read_empty_ids_is_bad_request() {
    let server = MockServer::start_async().await;
    let response = app(settings(&server, "", false))
        .oneshot(json_request(
            "POST",
            "/crm/objects/0-1/batch/read",
            json!({"ids": []}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_object_returns_created() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/crm/v3/objects/2-141027484")
                .json_body(json!({
                    "properties": {"hour": "Session 1"},
                    "associations": [{
                        "to": {"id": "501"},
                        "types": [{"associationCategory": "USER_DEFINED", "associationTypeId": 291}]
                    }]
                }));
            then.status(201).json_body(json!({"id": "8"}));
        })
        .await;

    let response = app(settings(&server, "", false))
        .oneshot(json_request(
            "POST",
            "/crm/objects/2-141027484",
            json!({
                "properties": {"hour": "Session 1"},
                "associations": [{
                    "to": {"id": "501"},
                    "types": [{"associationCategory": "USER_DEFINED", "associationTypeId": 291}]
                }]
            }),
        ))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_update_object_upstream_server_error_is_bad_gateway() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(PATCH).path("/crm/v3/objects/0-1/123");
            then.status(500).body("boom");
        })
        .await;

    let response = app(settings(&server, "", false))
        .oneshot(json_request(
            "PATCH",
            "/crm/objects/0-1/123",
            json!({"properties": {"city": "Lyon"}}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn test_app_state_rejects_missing_account_id() {
    let builder = Config::builder().add_source(File::from_str(
        r#"
        [server]
        host = "127.0.0.1"
        port = 0

        [hubspot]
        account_id = ""
        "#,
        FileFormat::Toml,
    ));
    let settings = Settings::from_builder(builder, |_| None).unwrap();

    assert_err!(AppState::from_settings(settings));
}
