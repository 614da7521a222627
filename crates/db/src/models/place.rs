//! Place model and DTOs.

use agenda_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `places` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Place {
    pub id: DbId,
    pub name: String,
    pub address: Option<String>,
    pub notes: Option<String>,
    #[serde(rename = "owner")]
    pub owner_id: DbId,
}

/// DTO for creating a new place.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlace {
    pub name: String,
    pub address: Option<String>,
    pub notes: Option<String>,
}

/// DTO for updating an existing place. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePlace {
    pub name: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}
