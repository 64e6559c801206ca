//! Repository for the `color_collections` table.

use palette_core::types::DbId;
use sqlx::PgConnection;

use crate::models::color_collection::{
    ColorCollection, CreateColorCollection, UpdateColorCollection,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, tags, colors";

/// Provides CRUD operations for color collections.
pub struct ColorCollectionRepo;

impl ColorCollectionRepo {
    /// Insert a new collection owned by `user_id`, returning the created row.
    pub async fn create(
        conn: &mut PgConnection,
        user_id: DbId,
        input: &CreateColorCollection,
    ) -> Result<ColorCollection, sqlx::Error> {
        let query = format!(
            "INSERT INTO color_collections (user_id, name, tags, colors)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ColorCollection>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.tags)
            .bind(&input.colors)
            .fetch_one(conn)
            .await
    }

    /// List every collection regardless of owner, oldest first.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<ColorCollection>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM color_collections ORDER BY id");
        sqlx::query_as::<_, ColorCollection>(&query)
            .fetch_all(conn)
            .await
    }

    /// Find a collection by its ID.
    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<ColorCollection>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM color_collections WHERE id = $1");
        sqlx::query_as::<_, ColorCollection>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Partially update a collection.
    ///
    /// Uses `COALESCE` so only provided fields are changed. Returns `None`
    /// if no row with the given `id` exists.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &UpdateColorCollection,
    ) -> Result<Option<ColorCollection>, sqlx::Error> {
        let query = format!(
            "UPDATE color_collections SET
                name = COALESCE($2, name),
                tags = COALESCE($3, tags),
                colors = COALESCE($4, colors)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ColorCollection>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.tags)
            .bind(&input.colors)
            .fetch_optional(conn)
            .await
    }

    /// Permanently delete a collection.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM color_collections WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
