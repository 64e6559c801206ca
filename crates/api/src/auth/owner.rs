//! Owner account bootstrap.
//!
//! Collections require a `user_id`, but no endpoint authenticates callers.
//! At startup the server makes sure the configured owner account exists and
//! every created collection is stamped with its id. Nothing filters or
//! checks by owner.

use palette_core::types::DbId;
use palette_db::models::user::NewUser;
use palette_db::repositories::UserRepo;
use palette_db::{DbPool, Session};

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};

/// Return the id of `username`, creating the account if it does not exist.
///
/// A password, when given, is only used for a freshly created account; an
/// existing account keeps its stored hash.
pub async fn ensure_owner(pool: &DbPool, username: &str, password: Option<&str>) -> AppResult<DbId> {
    let mut session = Session::begin(pool).await?;
    if let Some(user) = UserRepo::find_by_username(session.conn(), username).await? {
        tracing::debug!(user_id = user.id, username, "Owner account found");
        return Ok(user.id);
    }

    let password_hash = password.map(hash_password).transpose()?;

    let new_user = NewUser {
        username: username.to_string(),
        password_hash,
    };

    let created = UserRepo::create(session.conn(), &new_user).await;
    match created {
        Ok(user) => {
            session.commit().await?;
            tracing::info!(user_id = user.id, username, "Owner account created");
            Ok(user.id)
        }
        Err(err) if is_unique_violation(&err) => {
            // Another instance created it between our lookup and insert.
            drop(session);
            let mut session = Session::begin(pool).await?;
            let user = UserRepo::find_by_username(session.conn(), username)
                .await?
                .ok_or(AppError::Database(err))?;
            Ok(user.id)
        }
        Err(err) => Err(err.into()),
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .and_then(|db_err| db_err.code())
        .is_some_and(|code| code == "23505")
}
