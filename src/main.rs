use group_settings::api::handlers::{AppState, api_routes};
use group_settings::auth::jwt::JwtService;
use group_settings::config::CONFIG;
use group_settings::core::models::{Association, ChannelAddRestriction, Group, Metadata, Policy, Resource, RoleTag, Ship};
use group_settings::core::services::SettingsService;
use group_settings::infrastructure::{api::in_memory::InMemoryGroupApi, logging::in_memory::InMemoryLogging};
use http::{Method, header};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Seed one open and one invite-only group hosted by `host`.
async fn seed_groups(api: &InMemoryGroupApi, host: &Ship) {
    for (name, title, policy) in [
        ("lounge", "Lounge", Policy::open()),
        ("council", "Council", Policy::invite_only()),
    ] {
        let resource = Resource::new(host.clone(), name);
        let mut group = Group::new(resource.to_path(), policy);
        group.grant(RoleTag::Admin, host.clone());
        api.insert_group(group).await;
        api.insert_association(Association {
            group: resource.to_path(),
            resource: resource.to_path(),
            app_name: CONFIG.metadata_app_name.clone(),
            metadata: Metadata {
                title: title.to_string(),
                description: String::new(),
                color: "000000".to_string(),
                picture: String::new(),
                vip: ChannelAddRestriction::AdminsOnly,
                date_created: chrono::Utc::now().to_rfc3339(),
                creator: Some(host.clone()),
                preview: false,
                hidden: false,
            },
        })
        .await;
        info!("Seeded {}", resource);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter(CONFIG.log_level.as_str()).init();
    info!("Starting with {:?}", *CONFIG);

    let api = InMemoryGroupApi::new();
    let host = Ship::parse(&CONFIG.host_ship)?;
    seed_groups(&api, &host).await;

    let jwt = Arc::new(JwtService::new(CONFIG.jwt_secret.clone()));
    info!("Bearer token for {}: {}", host, jwt.generate_token(&host)?);

    let state = AppState {
        service: Arc::new(SettingsService::new(api, InMemoryLogging::new())),
        jwt,
    };

    let app = api_routes(state)
        .route("/", axum::routing::get(|| async { "OK" }))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([127, 0, 0, 1], CONFIG.port));
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
