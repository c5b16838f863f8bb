use crate::{
    api::models::*,
    auth::jwt::JwtService,
    core::{
        errors::SettingsError,
        models::{AppLog, EditableFields, Resource, Ship},
        services::SettingsService,
    },
    infrastructure::{api::in_memory::InMemoryGroupApi, logging::in_memory::InMemoryLogging},
};
use axum::{
    Extension, Json, Router,
    extract::{Path, Request, State},
    middleware::{self, Next},
    response::IntoResponse,
    routing::get,
};
use http::header;
use std::sync::Arc;

pub type AppService = SettingsService<InMemoryGroupApi, InMemoryLogging>;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AppService>,
    pub jwt: Arc<JwtService>,
}

/// Resolves the bearer token to the viewer ship.
async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<impl IntoResponse, ApiResponseError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| SettingsError::InvalidToken("Missing Authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| SettingsError::InvalidToken("Invalid Authorization header".to_string()))?;

    let viewer = state.jwt.validate_token(token)?.ship()?;
    req.extensions_mut().insert(viewer);
    Ok(next.run(req).await)
}

pub fn api_routes(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route(
            "/groups/{ship}/{name}/settings",
            get(get_settings).post(submit_settings),
        )
        .route("/logs", get(get_app_logs))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    // Tokens are issued out of band; there is no route that mints one.
    Router::new().merge(protected_routes).with_state(state)
}

fn group_resource(ship: &str, name: &str) -> Result<Resource, SettingsError> {
    Resource::from_path(&format!("/ship/{}/{}", ship, name))
}

async fn get_settings(
    State(state): State<AppState>,
    Extension(viewer): Extension<Ship>,
    Path((ship, name)): Path<(String, String)>,
) -> Result<Json<EditableFields>, ApiResponseError> {
    let resource = group_resource(&ship, &name)?;
    let panel = state
        .service
        .load_settings(&viewer, &resource)
        .await?
        .ok_or_else(|| SettingsError::Unauthorized(viewer.to_string()))?;
    Ok(Json(panel.initial().clone()))
}

async fn submit_settings(
    State(state): State<AppState>,
    Extension(viewer): Extension<Ship>,
    Path((ship, name)): Path<(String, String)>,
    Json(req): Json<SubmitSettingsRequest>,
) -> Result<Json<SubmitSettingsResponse>, ApiResponseError> {
    let resource = group_resource(&ship, &name)?;
    let panel = state
        .service
        .load_settings(&viewer, &resource)
        .await?
        .ok_or_else(|| SettingsError::Unauthorized(viewer.to_string()))?;
    let previous = req.previous.unwrap_or_else(|| panel.initial().clone());
    let report = state.service.submit_fields(&panel, &previous, &req.fields).await?;
    Ok(Json(SubmitSettingsResponse {
        status: panel.status(),
        policy: report.policy_changed,
    }))
}

async fn get_app_logs(State(state): State<AppState>) -> Result<Json<Vec<AppLog>>, ApiResponseError> {
    let logs = state.service.get_app_logs().await?;
    Ok(Json(logs))
}
