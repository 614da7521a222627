//! Handlers for reminders.
//!
//! Creation and per-event listing are nested under
//! `/events/{event_id}/reminders`; the flat `/reminders` routes cover
//! cross-event listing and item access. A reminder has no owner column, so
//! every operation resolves ownership through the parent event first.

use agenda_core::error::CoreError;
use agenda_core::reminder::{self, ReminderPayload};
use agenda_core::types::DbId;
use agenda_core::validation::FieldErrors;
use agenda_db::models::reminder::{CreateReminder, UpdateReminder};
use agenda_db::repositories::{EventRepo, ReminderRepo};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the flat reminder listing.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Case-insensitive substring match over the message and the event title.
    pub search: Option<String>,
    pub sent: Option<bool>,
}

// ---------------------------------------------------------------------------
// GET /events/{event_id}/reminders
// ---------------------------------------------------------------------------

/// List the reminders of one event, soonest first.
pub async fn list_for_event(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    // Distinguish an unknown event from an event with no reminders.
    if EventRepo::find_by_id(&state.pool, auth.user_id, event_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        }));
    }

    let items = ReminderRepo::list_for_event(&state.pool, auth.user_id, event_id).await?;
    tracing::debug!(event_id, count = items.len(), "Listed event reminders");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /events/{event_id}/reminders
// ---------------------------------------------------------------------------

/// Create a reminder under an event.
pub async fn create_reminder(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
    Json(input): Json<CreateReminder>,
) -> AppResult<impl IntoResponse> {
    let event_end = EventRepo::end_at(&state.pool, auth.user_id, event_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        }))?;

    let mut errors = FieldErrors::new();
    reminder::validate(
        &ReminderPayload {
            message: input.message.as_deref(),
            remind_at: Some(input.remind_at),
            event_end: Some(event_end),
        },
        &mut errors,
    );
    errors.into_result()?;

    let created = ReminderRepo::create(&state.pool, event_id, &input).await?;
    tracing::info!(id = created.id, event_id, "Reminder created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /reminders
// ---------------------------------------------------------------------------

/// List all of the authenticated user's reminders across events.
pub async fn list_reminders(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let items = ReminderRepo::list(
        &state.pool,
        auth.user_id,
        params.search.as_deref(),
        params.sent,
    )
    .await?;
    tracing::debug!(count = items.len(), "Listed reminders");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// GET /reminders/{id}
// ---------------------------------------------------------------------------

/// Get a single reminder by ID.
pub async fn get_reminder(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let r = ReminderRepo::find_by_id(&state.pool, auth.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Reminder",
            id,
        }))?;
    Ok(Json(DataResponse { data: r }))
}

// ---------------------------------------------------------------------------
// PUT /reminders/{id}
// ---------------------------------------------------------------------------

/// Update a reminder, optionally re-pointing it at a different event.
/// The remind-after-end rule is checked against the effective target event.
pub async fn update_reminder(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateReminder>,
) -> AppResult<impl IntoResponse> {
    let stored = ReminderRepo::find_by_id(&state.pool, auth.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Reminder",
            id,
        }))?;

    let mut errors = FieldErrors::new();

    let target_event = input.event_id.unwrap_or(stored.event_id);
    let event_end = EventRepo::end_at(&state.pool, auth.user_id, target_event).await?;
    if input.event_id.is_some() && event_end.is_none() {
        errors.add("event", "unknown event");
    }

    reminder::validate(
        &ReminderPayload {
            message: input.message.as_deref(),
            remind_at: Some(input.remind_at.unwrap_or(stored.remind_at)),
            event_end,
        },
        &mut errors,
    );
    errors.into_result()?;

    let updated = ReminderRepo::update(&state.pool, auth.user_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Reminder",
            id,
        }))?;
    tracing::info!(id = updated.id, "Reminder updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /reminders/{id}
// ---------------------------------------------------------------------------

/// Delete a reminder.
pub async fn delete_reminder(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ReminderRepo::delete(&state.pool, auth.user_id, id).await?;
    if deleted {
        tracing::info!(id, "Reminder deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Reminder",
            id,
        }))
    }
}
