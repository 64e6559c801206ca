//! Handlers for color collections.
//!
//! Each handler opens one [`Session`] after its inputs are parsed. Writes
//! commit before responding; reads let the session drop.

use axum::extract::State;
use axum::Json;
use palette_core::error::CoreError;
use palette_core::types::DbId;
use palette_db::models::color_collection::{
    ColorCollection, CreateColorCollection, UpdateColorCollection,
};
use palette_db::repositories::ColorCollectionRepo;
use palette_db::Session;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /collections
///
/// Create a collection owned by the configured owner account.
pub async fn create_collection(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateColorCollection>,
) -> AppResult<Json<ColorCollection>> {
    let mut session = Session::begin(&state.pool).await?;
    let collection = ColorCollectionRepo::create(session.conn(), state.owner_id, &input).await?;
    session.commit().await?;

    tracing::info!(
        collection_id = collection.id,
        user_id = collection.user_id,
        name = %collection.name,
        "Color collection created",
    );

    Ok(Json(collection))
}

/// GET /collections
///
/// List every collection, unfiltered and unpaginated.
pub async fn list_collections(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ColorCollection>>> {
    let mut session = Session::begin(&state.pool).await?;
    let collections = ColorCollectionRepo::list(session.conn()).await?;

    Ok(Json(collections))
}

/// GET /collections/{collection_id}
pub async fn get_collection(
    State(state): State<AppState>,
    AppPath(collection_id): AppPath<DbId>,
) -> AppResult<Json<ColorCollection>> {
    let mut session = Session::begin(&state.pool).await?;
    let collection = ColorCollectionRepo::find_by_id(session.conn(), collection_id)
        .await?
        .ok_or(AppError::Core(CoreError::collection_not_found(collection_id)))?;

    Ok(Json(collection))
}

/// PUT /collections/{collection_id}
///
/// Overwrite only the fields present in the body.
pub async fn update_collection(
    State(state): State<AppState>,
    AppPath(collection_id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateColorCollection>,
) -> AppResult<Json<ColorCollection>> {
    let mut session = Session::begin(&state.pool).await?;
    let collection = ColorCollectionRepo::update(session.conn(), collection_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::collection_not_found(collection_id)))?;
    session.commit().await?;

    tracing::info!(collection_id, "Color collection updated");

    Ok(Json(collection))
}

/// DELETE /collections/{collection_id}
pub async fn delete_collection(
    State(state): State<AppState>,
    AppPath(collection_id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let mut session = Session::begin(&state.pool).await?;
    let deleted = ColorCollectionRepo::delete(session.conn(), collection_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::collection_not_found(collection_id)));
    }
    session.commit().await?;

    tracing::info!(collection_id, "Color collection deleted");

    Ok(Json(MessageResponse {
        message: "Color collection deleted",
    }))
}
