use std::sync::Arc;

use palette_core::types::DbId;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Handlers open one `Session` per request from it.
    pub pool: palette_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Account stamped into `user_id` on every created collection.
    pub owner_id: DbId,
}
