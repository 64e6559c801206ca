//! `GET /health`: liveness plus the state this service depends on at
//! startup (schema version and the owner account new collections get).

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use palette_core::types::DbId;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database is unreachable or behind.
    pub status: &'static str,
    pub version: &'static str,
    pub database: DatabaseHealth,
    pub owner: OwnerAccount,
    /// Where the collection routes are mounted.
    pub collections_path: String,
}

#[derive(Debug, Serialize)]
pub struct DatabaseHealth {
    pub reachable: bool,
    /// `None` when the migration table could not be read.
    pub migrations_applied: Option<i64>,
    pub migrations_known: usize,
}

#[derive(Debug, Serialize)]
pub struct OwnerAccount {
    pub id: DbId,
    pub username: String,
}

async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let reachable = palette_db::health_check(&state.pool).await.is_ok();
    let migrations_applied = match palette_db::applied_migrations(&state.pool).await {
        Ok(n) => Some(n),
        Err(e) => {
            tracing::warn!(error = %e, "Could not read migration state");
            None
        }
    };
    let migrations_known = palette_db::known_migrations();

    let up_to_date = migrations_applied
        .and_then(|n| usize::try_from(n).ok())
        .is_some_and(|n| n >= migrations_known);
    let (code, status) = if reachable && up_to_date {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    let body = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        database: DatabaseHealth {
            reachable,
            migrations_applied,
            migrations_known,
        },
        owner: OwnerAccount {
            id: state.owner_id,
            username: state.config.owner_username.clone(),
        },
        collections_path: format!("{}/collections", state.config.api_base_path),
    };

    (code, Json(body))
}

/// Health lives at the root regardless of `API_BASE_PATH`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
