//! Handlers for the `/events` resource.
//!
//! Update validation resolves each field from the incoming payload with a
//! fallback to the stored row, so cross-field rules (start/end ordering)
//! always see the effective values of the record being written.

use agenda_core::error::CoreError;
use agenda_core::event::{self, EventPayload};
use agenda_core::types::DbId;
use agenda_core::validation::FieldErrors;
use agenda_db::models::event::{CreateEvent, UpdateEvent};
use agenda_db::repositories::{CategoryRepo, EventFilter, EventRepo, PlaceRepo};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for listing events. Mirrors the filterable columns of
/// the event listing (owner scoping is implicit).
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub category: Option<DbId>,
    pub all_day: Option<bool>,
    /// Case-insensitive substring match over title and description.
    pub search: Option<String>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that the referenced category and place exist in the owner's scope,
/// recording a field error for each dangling reference.
async fn check_references(
    state: &AppState,
    owner_id: DbId,
    category_id: Option<DbId>,
    place_id: Option<DbId>,
    errors: &mut FieldErrors,
) -> AppResult<()> {
    if let Some(category_id) = category_id {
        if CategoryRepo::find_by_id(&state.pool, owner_id, category_id)
            .await?
            .is_none()
        {
            errors.add("category", "unknown category");
        }
    }
    if let Some(place_id) = place_id {
        if PlaceRepo::find_by_id(&state.pool, owner_id, place_id)
            .await?
            .is_none()
        {
            errors.add("place", "unknown place");
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// GET /events
// ---------------------------------------------------------------------------

/// List the authenticated user's events with the denormalized category
/// label, narrowed by the filter parameters.
pub async fn list_events(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = EventFilter {
        status: params.status,
        priority: params.priority,
        category_id: params.category,
        all_day: params.all_day,
        search: params.search,
    };
    let items = EventRepo::list(&state.pool, auth.user_id, &filter).await?;
    tracing::debug!(count = items.len(), "Listed events");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /events
// ---------------------------------------------------------------------------

/// Create a new event.
pub async fn create_event(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(mut input): Json<CreateEvent>,
) -> AppResult<impl IntoResponse> {
    let mut errors = FieldErrors::new();
    let title = event::validate(
        &EventPayload {
            title: Some(&input.title),
            start_at: Some(input.start_at),
            end_at: Some(input.end_at),
            status: input.status.as_deref(),
            priority: input.priority.as_deref(),
        },
        &mut errors,
    );
    check_references(&state, auth.user_id, input.category_id, input.place_id, &mut errors)
        .await?;
    errors.into_result()?;

    if let Some(title) = title {
        input.title = title;
    }

    let created = EventRepo::create(&state.pool, auth.user_id, &input).await?;
    tracing::info!(id = created.id, title = %created.title, "Event created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /events/{id}
// ---------------------------------------------------------------------------

/// Get a single event by ID.
pub async fn get_event(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let e = EventRepo::find_by_id(&state.pool, auth.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }))?;
    Ok(Json(DataResponse { data: e }))
}

// ---------------------------------------------------------------------------
// PUT /events/{id}
// ---------------------------------------------------------------------------

/// Update an existing event. Unspecified fields keep their stored value;
/// the start/end ordering rule is checked against the effective pair.
pub async fn update_event(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateEvent>,
) -> AppResult<impl IntoResponse> {
    let stored = EventRepo::find_by_id(&state.pool, auth.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }))?;

    let mut errors = FieldErrors::new();
    let title = event::validate(
        &EventPayload {
            title: input.title.as_deref(),
            start_at: Some(input.start_at.unwrap_or(stored.start_at)),
            end_at: Some(input.end_at.unwrap_or(stored.end_at)),
            status: input.status.as_deref(),
            priority: input.priority.as_deref(),
        },
        &mut errors,
    );
    check_references(&state, auth.user_id, input.category_id, input.place_id, &mut errors)
        .await?;
    errors.into_result()?;

    if title.is_some() {
        input.title = title;
    }

    let updated = EventRepo::update(&state.pool, auth.user_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }))?;
    tracing::info!(id = updated.id, "Event updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /events/{id}
// ---------------------------------------------------------------------------

/// Delete an event along with its reminders.
pub async fn delete_event(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = EventRepo::delete(&state.pool, auth.user_id, id).await?;
    if deleted {
        tracing::info!(id, "Event deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }))
    }
}
