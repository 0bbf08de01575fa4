use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::predict;
use super::state::AppState;
use super::welcome;

/// Create the application router.
///
/// CORS is wide open on purpose: the service fronts early integrations from
/// arbitrary origins, and the API key is the only gate. `very_permissive`
/// mirrors the request origin so credentialed cross-origin calls work.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome::welcome))
        .route("/predict", post(predict::predict_species))
        .with_state(state)
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}
