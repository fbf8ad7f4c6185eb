//! Router assembly: fixed routes plus the registry-backed fallback.

use crate::handlers::gateway::{dispatch, healthz, meta_routes};
use crate::state::AppState;
use axum::{routing::get, Router};

/// GET /healthz, GET /__meta/routes, and GET <any configured path> via the
/// fallback dispatcher. Non-GET methods on dynamic paths get 405 from the
/// method router.
pub fn gateway_routes(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/__meta/routes", get(meta_routes))
        .fallback_service(get(dispatch).with_state(state.clone()))
        .with_state(state)
}
