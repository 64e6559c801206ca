//! Color collection model and DTOs.

use palette_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `color_collections` table.
///
/// Serialized field-for-field as the API response.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ColorCollection {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub tags: Vec<String>,
    pub colors: Vec<String>,
}

/// DTO for creating a collection. `tags` and `colors` default to empty.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateColorCollection {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
}

/// DTO for partially updating a collection.
///
/// `None` leaves the column untouched; `Some(vec![])` clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateColorCollection {
    pub name: Option<String>,
    pub tags: Option<Vec<String>>,
    pub colors: Option<Vec<String>>,
}
