//! Reminder model and DTOs.
//!
//! The timestamp field is named `when` on the wire (per the API contract)
//! and `remind_at` in Rust and SQL, since `when` is a reserved word in both.

use agenda_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reminders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reminder {
    pub id: DbId,
    #[serde(rename = "event")]
    pub event_id: DbId,
    #[serde(rename = "when")]
    pub remind_at: Timestamp,
    pub message: Option<String>,
    pub sent: bool,
}

/// DTO for creating a new reminder under `/events/{event_id}/reminders`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReminder {
    #[serde(rename = "when")]
    pub remind_at: Timestamp,
    pub message: Option<String>,
    pub sent: Option<bool>,
}

/// DTO for updating an existing reminder. All fields are optional; the
/// reminder can be re-pointed at a different event.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReminder {
    #[serde(rename = "event")]
    pub event_id: Option<DbId>,
    #[serde(rename = "when")]
    pub remind_at: Option<Timestamp>,
    pub message: Option<String>,
    pub sent: Option<bool>,
}
