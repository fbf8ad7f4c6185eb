//! Shared application state for all routes. The registry is republished on
//! reload so new endpoints are available without restart.

use crate::registry::RouteRegistry;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub registry: Arc<RouteRegistry>,
}
