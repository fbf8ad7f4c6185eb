//! Gateway handlers: health, route introspection, and the dynamic dispatcher.
//! Dispatch resolves the request path against the registry per request; the
//! axum router itself is never rebuilt or mutated on reload.

use crate::error::AppError;
use crate::service::fetch_rows;
use crate::state::AppState;
use axum::{
    extract::State,
    http::Uri,
    Json,
};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
pub struct HealthBody {
    pub status: &'static str,
}

pub async fn healthz() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

/// Introspection: each active path -> its query text and API->DB mapping.
pub async fn meta_routes(State(state): State<AppState>) -> Json<Value> {
    let table = state.registry.snapshot();
    let mut out = serde_json::Map::with_capacity(table.len());
    for entry in table.iter() {
        let mapping: serde_json::Map<String, Value> = entry
            .mapping
            .iter()
            .map(|(api, db)| (api.clone(), Value::String(db.clone())))
            .collect();
        out.insert(
            entry.path.clone(),
            serde_json::json!({ "query": entry.query, "mapping": mapping }),
        );
    }
    Json(Value::Object(out))
}

/// Fallback for every path not claimed by a fixed route. Looks the path up in
/// the active table and runs its query; misses are 404, query failures 500.
pub async fn dispatch(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Json<Vec<Value>>, AppError> {
    let path = uri.path();
    let entry = state
        .registry
        .lookup(path)
        .ok_or_else(|| AppError::NotFound(path.to_string()))?;
    match fetch_rows(&state.pool, &entry).await {
        Ok(rows) => Ok(Json(rows)),
        Err(e) => {
            tracing::error!(path = %path, error = %e, "query failed");
            Err(e)
        }
    }
}
