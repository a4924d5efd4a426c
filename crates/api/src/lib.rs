pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::{Router, middleware::map_response, routing::get};
use state::AppState;
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    let cors = middleware::cors::service_cors(&state.settings.app.cors_origins);

    // Service routes
    let service = Router::new()
        .route("/", get(routes::service::root))
        .route("/health", get(routes::service::health_check))
        .route("/transcript/{video_id}", get(routes::transcript::full))
        .route(
            "/transcript/{video_id}/segments",
            get(routes::transcript::segments),
        )
        .layer(cors);

    // Single-function handler, CORS headers on every response
    let function = Router::new()
        .route(
            "/api/transcript",
            get(routes::function::transcript).options(routes::function::preflight),
        )
        .layer(map_response(middleware::cors::function_cors));

    Router::new()
        .merge(service)
        .merge(function)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
