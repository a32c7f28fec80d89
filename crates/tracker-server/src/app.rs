use axum::{
    extract::State,
    http::{header, HeaderValue, Method},
    response::Redirect,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracker_db::AppState;
use tracker_reports::service;

use crate::api::{
    self,
    error::{report_error, ApiError},
};
use crate::config::ServerConfig;

#[derive(Serialize)]
struct ApiStatus {
    status: &'static str,
    version: &'static str,
}

pub fn build_app(state: Arc<AppState>, config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .nest("/api", api::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors(&config.cors_origins))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .with_state(state)
}

fn cors(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any);

    if origins.is_empty() {
        return layer;
    }
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();
    tracing::info!("CORS allowed origins: {:?}", origins);
    layer.allow_origin(AllowOrigin::list(origins))
}

async fn healthz() -> Json<ApiStatus> {
    Json(ApiStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /, redirecting to the most recent published Top Ten
async fn index(State(state): State<Arc<AppState>>) -> Result<Redirect, ApiError> {
    let list = service::most_recent_top_ten(&state.db)
        .await
        .map_err(report_error)?;
    Ok(Redirect::temporary(&format!("/api/albums/{}", list.year)))
}
