//! Account registration and lookup.
//!
//! Registration only stores the account; no endpoint issues tokens or
//! gates other routes on them.

use axum::extract::State;
use axum::Json;
use palette_core::error::CoreError;
use palette_core::types::DbId;
use palette_db::models::user::{CreateUser, NewUser, UserResponse};
use palette_db::repositories::UserRepo;
use palette_db::Session;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

/// POST /users
///
/// Register an account. Duplicate usernames are rejected with 409 by the
/// `uq_users_username` constraint.
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateUser>,
) -> AppResult<Json<UserResponse>> {
    if input.username.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "username must not be empty".to_string(),
        )));
    }

    let password_hash = hash_password(&input.password)?;

    let mut session = Session::begin(&state.pool).await?;
    let user = UserRepo::create(
        session.conn(),
        &NewUser {
            username: input.username,
            password_hash: Some(password_hash),
        },
    )
    .await?;
    session.commit().await?;

    tracing::info!(user_id = user.id, username = %user.username, "User registered");

    Ok(Json(UserResponse::from(user)))
}

/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<DbId>,
) -> AppResult<Json<UserResponse>> {
    let mut session = Session::begin(&state.pool).await?;
    let user = UserRepo::find_by_id(session.conn(), user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;

    Ok(Json(UserResponse::from(user)))
}
