use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    config::AppConfig,
    database::{AppDatabase, MemberStore},
    handlers::*,
    jobs::notification::push_message::{FcmClient, PushGateway},
    swagger::ApiDoc,
};

/// Everything an invocation needs, built once from the config at startup
pub struct AppState {
    pub store: Arc<dyn MemberStore>,
    pub gateway: Arc<dyn PushGateway>,
    pub reminder_window_mins: u32,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::new();
        let store = AppDatabase::new(config, client.clone())?;
        let gateway = FcmClient::new(&config.service_account, client)?;
        Ok(Self {
            store: Arc::new(store),
            gateway: Arc::new(gateway),
            reminder_window_mins: config.reminder_window_mins,
        })
    }
}

pub fn build_app(state: Arc<AppState>) -> Router {
    tracing::debug!("Initializing the app");
    let api_routes = Router::new()
        .route("/ping", get(ping_handler))
        .route(
            "/send-push-notification",
            post(send_push_notification_handler),
        );
    Router::new()
        .route("/", get(default_route_handler))
        .nest("/api/v1", api_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(global_404_handler)
        .layer(TraceLayer::new_for_http())
}
