pub mod color_collections;
pub mod health;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree, mounted at the configured base path.
///
/// ```text
/// /collections                     list, create
/// /collections/{collection_id}     get, update, delete
///
/// /users                           register
/// /users/{user_id}                 get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/collections", color_collections::router())
        .nest("/users", users::router())
}
