//! Route definitions for color collections.

use axum::routing::get;
use axum::Router;

use crate::handlers::color_collections;
use crate::state::AppState;

/// Color collection routes mounted at `/collections`.
///
/// ```text
/// GET    /                  -> list_collections
/// POST   /                  -> create_collection
/// GET    /{collection_id}   -> get_collection
/// PUT    /{collection_id}   -> update_collection
/// DELETE /{collection_id}   -> delete_collection
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(color_collections::list_collections).post(color_collections::create_collection),
        )
        .route(
            "/{collection_id}",
            get(color_collections::get_collection)
                .put(color_collections::update_collection)
                .delete(color_collections::delete_collection),
        )
}
