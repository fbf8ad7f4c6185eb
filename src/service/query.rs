//! Execute a route's query and map the result set.

use crate::error::AppError;
use crate::service::row::map_row;
use crate::table::RouteEntry;
use serde_json::Value;
use sqlx::PgPool;

/// Run the entry's query verbatim (no parameters) on a connection scoped to
/// this call and map every returned row. All-or-nothing: any connection,
/// execution, or decode failure fails the whole request; no retries. The
/// connection is returned to the pool on every exit path when the guard
/// drops.
pub async fn fetch_rows(pool: &PgPool, entry: &RouteEntry) -> Result<Vec<Value>, AppError> {
    tracing::debug!(path = %entry.path, sql = %entry.query, "query");
    let mut conn = pool.acquire().await?;
    let rows = sqlx::query(&entry.query).fetch_all(&mut *conn).await?;
    Ok(rows.iter().map(|r| map_row(r, &entry.mapping)).collect())
}
