use crate::api::handlers::{AppState, api_routes};
use crate::auth::jwt::JwtService;
use crate::core::models::{ChannelAddRestriction, Policy};
use crate::tests::{create_test_service, fixture, seeded_api, ship};
use axum::Router;
use axum::body::{Body, to_bytes};
use http::{Request, StatusCode, header};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

async fn test_app() -> (Router, Arc<JwtService>) {
    let (group, association) = fixture(Policy::open(), ChannelAddRestriction::AdminsOnly);
    let service = create_test_service(seeded_api(&group, &association).await);
    let jwt = Arc::new(JwtService::new("test-secret".to_string()));
    let state = AppState {
        service: Arc::new(service),
        jwt: jwt.clone(),
    };
    (api_routes(state), jwt)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn authed(method: &str, uri: &str, token: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json");
    match body {
        Some(body) => builder.body(Body::from(body.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

#[tokio::test]
async fn test_get_settings_requires_token() {
    let (app, _) = test_app().await;
    let request = Request::builder()
        .uri("/groups/~zod/my-group/settings")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].as_str().unwrap().contains("Missing Authorization header"));
}

#[tokio::test]
async fn test_get_settings_for_host() {
    let (app, jwt) = test_app().await;
    let token = jwt.generate_token(&ship("~zod")).unwrap();
    let (status, body) = send(&app, authed("GET", "/groups/~zod/my-group/settings", &token, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Old");
    assert_eq!(body["isPrivate"], false);
    assert_eq!(body["adminMetadataRestriction"], true);
}

#[tokio::test]
async fn test_settings_are_hidden_from_members() {
    let (app, jwt) = test_app().await;
    let token = jwt.generate_token(&ship("~nec")).unwrap();
    let (status, body) = send(&app, authed("GET", "/groups/~zod/my-group/settings", &token, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Group settings not found");

    let submit = json!({ "fields": { "title": "Hijacked" } });
    let (status, _) = send(
        &app,
        authed("POST", "/groups/~zod/my-group/settings", &token, Some(submit)),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_submit_settings_toggles_privacy() {
    let (app, jwt) = test_app().await;
    let token = jwt.generate_token(&ship("~bus")).unwrap();
    let submit = json!({
        "fields": {
            "title": "New",
            "description": "",
            "color": "#00ff00",
            "isPrivate": true,
            "picture": "",
            "adminMetadataRestriction": false
        }
    });
    let (status, body) = send(
        &app,
        authed("POST", "/groups/~zod/my-group/settings", &token, Some(submit)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!({ "state": "success" }));
    assert_eq!(body["policy"], json!({ "invite": { "pending": [] } }));

    let (_, logs) = send(&app, authed("GET", "/logs", &token, None)).await;
    assert_eq!(logs.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_submit_settings_rejects_blank_title() {
    let (app, jwt) = test_app().await;
    let token = jwt.generate_token(&ship("~zod")).unwrap();
    let submit = json!({ "fields": { "title": "" } });
    let (status, body) = send(
        &app,
        authed("POST", "/groups/~zod/my-group/settings", &token, Some(submit)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Group must have a name");
}

#[tokio::test]
async fn test_no_route_issues_tokens() {
    let (app, _) = test_app().await;
    let request = Request::builder()
        .method("POST")
        .uri("/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "ship": "~zod" }).to_string()))
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let (app, _) = test_app().await;
    let forged = JwtService::new("guessed-secret".to_string())
        .generate_token(&ship("~zod"))
        .unwrap();
    let submit = json!({ "fields": { "title": "Hijacked", "isPrivate": true } });
    let (status, body) = send(
        &app,
        authed("POST", "/groups/~zod/my-group/settings", &forged, Some(submit)),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid token"));
}

#[tokio::test]
async fn test_issued_token_round_trips_ship() {
    let jwt = JwtService::new("test-secret".to_string());
    let token = jwt.generate_token(&ship("zod")).unwrap();
    let claims = jwt.validate_token(&token).unwrap();
    assert_eq!(claims.ship().unwrap(), ship("~zod"));
}
