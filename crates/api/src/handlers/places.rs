//! Handlers for the `/places` resource.

use agenda_core::error::CoreError;
use agenda_core::place::{self, PlacePayload};
use agenda_core::types::DbId;
use agenda_core::validation::{FieldErrors, NON_FIELD};
use agenda_db::models::place::{CreatePlace, UpdatePlace};
use agenda_db::repositories::PlaceRepo;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for listing places.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Case-insensitive substring match over the name.
    pub search: Option<String>,
}

// ---------------------------------------------------------------------------
// GET /places
// ---------------------------------------------------------------------------

/// List the authenticated user's places.
pub async fn list_places(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let items = PlaceRepo::list(&state.pool, auth.user_id, params.search.as_deref()).await?;
    tracing::debug!(count = items.len(), "Listed places");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /places
// ---------------------------------------------------------------------------

/// Create a new place.
pub async fn create_place(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(mut input): Json<CreatePlace>,
) -> AppResult<impl IntoResponse> {
    let mut errors = FieldErrors::new();
    let name = place::validate(
        &PlacePayload {
            name: Some(&input.name),
            address: input.address.as_deref(),
        },
        &mut errors,
    );

    if let Some(ref name) = name {
        if PlaceRepo::name_taken(&state.pool, auth.user_id, name, None).await? {
            errors.add(NON_FIELD, "The fields owner and name must make a unique set");
        }
    }
    errors.into_result()?;

    if let Some(name) = name {
        input.name = name;
    }

    let created = PlaceRepo::create(&state.pool, auth.user_id, &input).await?;
    tracing::info!(id = created.id, name = %created.name, "Place created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /places/{id}
// ---------------------------------------------------------------------------

/// Get a single place by ID.
pub async fn get_place(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let p = PlaceRepo::find_by_id(&state.pool, auth.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Place",
            id,
        }))?;
    Ok(Json(DataResponse { data: p }))
}

// ---------------------------------------------------------------------------
// PUT /places/{id}
// ---------------------------------------------------------------------------

/// Update an existing place. Unspecified fields keep their stored value.
pub async fn update_place(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdatePlace>,
) -> AppResult<impl IntoResponse> {
    let mut errors = FieldErrors::new();
    let name = place::validate(
        &PlacePayload {
            name: input.name.as_deref(),
            address: input.address.as_deref(),
        },
        &mut errors,
    );

    if let Some(ref name) = name {
        if PlaceRepo::name_taken(&state.pool, auth.user_id, name, Some(id)).await? {
            errors.add(NON_FIELD, "The fields owner and name must make a unique set");
        }
    }
    errors.into_result()?;

    if name.is_some() {
        input.name = name;
    }

    let updated = PlaceRepo::update(&state.pool, auth.user_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Place",
            id,
        }))?;
    tracing::info!(id = updated.id, "Place updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /places/{id}
// ---------------------------------------------------------------------------

/// Delete a place. Events referencing it keep existing with a cleared place.
pub async fn delete_place(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PlaceRepo::delete(&state.pool, auth.user_id, id).await?;
    if deleted {
        tracing::info!(id, "Place deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Place",
            id,
        }))
    }
}
