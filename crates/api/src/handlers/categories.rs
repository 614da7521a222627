//! Handlers for the `/categories` resource.

use agenda_core::category::{self, CategoryPayload};
use agenda_core::error::CoreError;
use agenda_core::types::DbId;
use agenda_core::validation::{FieldErrors, NON_FIELD};
use agenda_db::models::category::{CreateCategory, UpdateCategory};
use agenda_db::repositories::CategoryRepo;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for listing categories.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Case-insensitive substring match over the name.
    pub search: Option<String>,
}

// ---------------------------------------------------------------------------
// GET /categories
// ---------------------------------------------------------------------------

/// List the authenticated user's categories.
pub async fn list_categories(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let items = CategoryRepo::list(&state.pool, auth.user_id, params.search.as_deref()).await?;
    tracing::debug!(count = items.len(), "Listed categories");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /categories
// ---------------------------------------------------------------------------

/// Create a new category.
pub async fn create_category(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(mut input): Json<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    let mut errors = FieldErrors::new();
    let name = category::validate(
        &CategoryPayload {
            name: Some(&input.name),
            color: input.color.as_deref(),
        },
        &mut errors,
    );

    if let Some(ref name) = name {
        if CategoryRepo::name_taken(&state.pool, auth.user_id, name, None).await? {
            errors.add(NON_FIELD, "The fields owner and name must make a unique set");
        }
    }
    errors.into_result()?;

    if let Some(name) = name {
        input.name = name;
    }

    let created = CategoryRepo::create(&state.pool, auth.user_id, &input).await?;
    tracing::info!(id = created.id, name = %created.name, "Category created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /categories/{id}
// ---------------------------------------------------------------------------

/// Get a single category by ID.
pub async fn get_category(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let c = CategoryRepo::find_by_id(&state.pool, auth.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    Ok(Json(DataResponse { data: c }))
}

// ---------------------------------------------------------------------------
// PUT /categories/{id}
// ---------------------------------------------------------------------------

/// Update an existing category. Unspecified fields keep their stored value.
pub async fn update_category(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateCategory>,
) -> AppResult<impl IntoResponse> {
    let mut errors = FieldErrors::new();
    let name = category::validate(
        &CategoryPayload {
            name: input.name.as_deref(),
            color: input.color.as_deref(),
        },
        &mut errors,
    );

    if let Some(ref name) = name {
        if CategoryRepo::name_taken(&state.pool, auth.user_id, name, Some(id)).await? {
            errors.add(NON_FIELD, "The fields owner and name must make a unique set");
        }
    }
    errors.into_result()?;

    if name.is_some() {
        input.name = name;
    }

    let updated = CategoryRepo::update(&state.pool, auth.user_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    tracing::info!(id = updated.id, "Category updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /categories/{id}
// ---------------------------------------------------------------------------

/// Delete a category. Events referencing it keep existing with a cleared
/// category.
pub async fn delete_category(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CategoryRepo::delete(&state.pool, auth.user_id, id).await?;
    if deleted {
        tracing::info!(id, "Category deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))
    }
}
