//! Repository for the `places` table.

use agenda_core::types::DbId;
use sqlx::PgPool;

use crate::models::place::{CreatePlace, Place, UpdatePlace};

const COLUMNS: &str = "id, name, address, notes, owner_id";

/// Provides owner-scoped CRUD operations for places.
pub struct PlaceRepo;

impl PlaceRepo {
    /// Insert a new place, returning the created row.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreatePlace,
    ) -> Result<Place, sqlx::Error> {
        let query = format!(
            "INSERT INTO places (name, address, notes, owner_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Place>(&query)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.notes)
            .bind(owner_id)
            .fetch_one(pool)
            .await
    }

    /// Find a place by ID within the owner's scope.
    pub async fn find_by_id(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
    ) -> Result<Option<Place>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM places WHERE id = $1 AND owner_id = $2");
        sqlx::query_as::<_, Place>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Whether the owner already has a place with this name, excluding
    /// `exclude_id` (the row being updated, if any).
    pub async fn name_taken(
        pool: &PgPool,
        owner_id: DbId,
        name: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        let row: Option<(DbId,)> = sqlx::query_as(
            "SELECT id FROM places \
             WHERE owner_id = $1 AND name = $2 AND ($3::bigint IS NULL OR id <> $3)",
        )
        .bind(owner_id)
        .bind(name)
        .bind(exclude_id)
        .fetch_optional(pool)
        .await?;
        Ok(row.is_some())
    }

    /// List the owner's places, optionally narrowed by a name search.
    pub async fn list(
        pool: &PgPool,
        owner_id: DbId,
        search: Option<&str>,
    ) -> Result<Vec<Place>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM places \
             WHERE owner_id = $1 AND ($2::text IS NULL OR name ILIKE '%' || $2 || '%') \
             ORDER BY name ASC"
        );
        sqlx::query_as::<_, Place>(&query)
            .bind(owner_id)
            .bind(search)
            .fetch_all(pool)
            .await
    }

    /// Update a place. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
        input: &UpdatePlace,
    ) -> Result<Option<Place>, sqlx::Error> {
        let query = format!(
            "UPDATE places SET \
                name = COALESCE($3, name), \
                address = COALESCE($4, address), \
                notes = COALESCE($5, notes) \
             WHERE id = $1 AND owner_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Place>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a place. Events referencing it keep existing with their place
    /// reference nulled (ON DELETE SET NULL).
    pub async fn delete(pool: &PgPool, owner_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM places WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
