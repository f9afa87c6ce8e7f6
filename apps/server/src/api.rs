use std::{path::Path, sync::Arc};

use crate::{
    config::Config,
    error::ErrorBody,
    main_lib::AppState,
    models::{Contact, ContactCreated, ContactRequest},
};
use axum::{
    http::{HeaderValue, StatusCode},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

mod contacts;
mod health;

#[derive(OpenApi)]
#[openapi(
    paths(health::healthz, contacts::submit_contact, contacts::list_contacts),
    components(schemas(ContactRequest, ContactCreated, Contact, ErrorBody)),
    tags((name = "contactbox"))
)]
pub struct ApiDoc;

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allow.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins = config
        .cors_allow
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect::<Vec<_>>();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Static files from the configured directory; unknown paths get `index.html`.
fn static_service(config: &Config) -> ServeDir<ServeFile> {
    let static_dir = Path::new(&config.static_dir);
    let index_file = static_dir.join("index.html");
    if !index_file.exists() {
        tracing::warn!("Landing page not found at {}", index_file.display());
    }
    ServeDir::new(static_dir).fallback(ServeFile::new(index_file))
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let openapi = ApiDoc::openapi();

    let api = Router::new()
        .merge(health::router())
        .merge(contacts::router());

    Router::new()
        .nest("/api", api)
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .fallback_service(static_service(config))
        .with_state(state)
        .layer(cors_layer(config))
        // Propagate must sit inside Set so it sees the generated id.
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
}
