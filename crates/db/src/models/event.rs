//! Event model and DTOs.
//!
//! Timestamps serialize as `start`/`end` on the wire; the columns are
//! `start_at`/`end_at` (`end` is reserved in SQL).

use agenda_core::listing;
use agenda_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "start")]
    pub start_at: Timestamp,
    #[serde(rename = "end")]
    pub end_at: Timestamp,
    pub all_day: bool,
    pub status: String,
    pub priority: String,
    #[serde(rename = "category")]
    pub category_id: Option<DbId>,
    #[serde(rename = "place")]
    pub place_id: Option<DbId>,
    #[serde(rename = "owner")]
    pub owner_id: DbId,
    pub created_at: Timestamp,
}

/// DTO for creating a new event.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "start")]
    pub start_at: Timestamp,
    #[serde(rename = "end")]
    pub end_at: Timestamp,
    pub all_day: Option<bool>,
    pub status: Option<String>,
    pub priority: Option<String>,
    #[serde(rename = "category")]
    pub category_id: Option<DbId>,
    #[serde(rename = "place")]
    pub place_id: Option<DbId>,
}

/// DTO for updating an existing event. All fields are optional; unspecified
/// fields keep their stored value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEvent {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "start")]
    pub start_at: Option<Timestamp>,
    #[serde(rename = "end")]
    pub end_at: Option<Timestamp>,
    pub all_day: Option<bool>,
    pub status: Option<String>,
    pub priority: Option<String>,
    #[serde(rename = "category")]
    pub category_id: Option<DbId>,
    #[serde(rename = "place")]
    pub place_id: Option<DbId>,
}

/// Raw listing row: event columns plus the joined category name.
#[derive(Debug, Clone, FromRow)]
pub struct EventListingRow {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub start_at: Timestamp,
    pub end_at: Timestamp,
    pub all_day: bool,
    pub status: String,
    pub priority: String,
    pub category_id: Option<DbId>,
    pub category_name: Option<String>,
    pub place_id: Option<DbId>,
    pub owner_id: DbId,
    pub created_at: Timestamp,
}

/// Event enriched with the denormalized category label for listings.
#[derive(Debug, Clone, Serialize)]
pub struct EventOverview {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "start")]
    pub start_at: Timestamp,
    #[serde(rename = "end")]
    pub end_at: Timestamp,
    pub all_day: bool,
    pub status: String,
    pub priority: String,
    #[serde(rename = "category")]
    pub category_id: Option<DbId>,
    /// `"CategoryName (CategoryID)"`, or `"-"` when no category is set.
    pub category_label: String,
    #[serde(rename = "place")]
    pub place_id: Option<DbId>,
    #[serde(rename = "owner")]
    pub owner_id: DbId,
    pub created_at: Timestamp,
}

impl From<EventListingRow> for EventOverview {
    fn from(row: EventListingRow) -> Self {
        let category_label = listing::category_label(
            row.category_name
                .as_deref()
                .zip(row.category_id),
        );
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            start_at: row.start_at,
            end_at: row.end_at,
            all_day: row.all_day,
            status: row.status,
            priority: row.priority,
            category_id: row.category_id,
            category_label,
            place_id: row.place_id,
            owner_id: row.owner_id,
            created_at: row.created_at,
        }
    }
}
