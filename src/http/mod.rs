//! REST surface over the reservation engine.

mod dto;
mod error;
mod handlers;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method, StatusCode},
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::warn;

use crate::app_system::AppConfig;
use crate::reservation::ReservationEngine;

pub use error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub engine: ReservationEngine,
}

impl AppState {
    pub fn new(engine: ReservationEngine) -> Self {
        Self { engine }
    }
}

pub fn build_router(state: AppState, config: &AppConfig) -> Router {
    let routes = Router::new()
        .route("/", get(handlers::index))
        .route("/collection/clubs", get(handlers::list_clubs))
        .route("/collection/clubs/search", get(handlers::search_clubs))
        .route("/collection/clubs/{club_id}/updateSpace", put(handlers::update_space))
        .route("/collection/orders", post(handlers::create_order))
        .with_state(state);

    with_middleware(routes, config)
}

/// Tracing, the request timeout (408) and CORS, applied to every route.
fn with_middleware(router: Router, config: &AppConfig) -> Router {
    router
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout(),
        ))
        .layer(cors_layer(config))
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::OPTIONS,
            Method::POST,
            Method::PUT,
        ])
        .allow_headers([CONTENT_TYPE]);

    match config.cors_origins() {
        None => layer.allow_origin(Any),
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!(origin = %origin, "Ignoring unparsable CORS origin");
                        None
                    }
                })
                .collect();
            layer.allow_origin(origins)
        }
    }
}
