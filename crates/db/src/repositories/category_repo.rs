//! Repository for the `categories` table.

use agenda_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{Category, CreateCategory, UpdateCategory};

const COLUMNS: &str = "id, name, description, color, owner_id";

/// Provides owner-scoped CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, returning the created row.
    ///
    /// The compound `uq_categories_owner_name` constraint rejects duplicate
    /// names per owner even when two requests race past the pre-check.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateCategory,
    ) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, description, color, owner_id) \
             VALUES ($1, $2, COALESCE($3, '#000000'), $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.color)
            .bind(owner_id)
            .fetch_one(pool)
            .await
    }

    /// Find a category by ID within the owner's scope.
    pub async fn find_by_id(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1 AND owner_id = $2");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Whether the owner already has a category with this name, excluding
    /// `exclude_id` (the row being updated, if any).
    pub async fn name_taken(
        pool: &PgPool,
        owner_id: DbId,
        name: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        let row: Option<(DbId,)> = sqlx::query_as(
            "SELECT id FROM categories \
             WHERE owner_id = $1 AND name = $2 AND ($3::bigint IS NULL OR id <> $3)",
        )
        .bind(owner_id)
        .bind(name)
        .bind(exclude_id)
        .fetch_optional(pool)
        .await?;
        Ok(row.is_some())
    }

    /// List the owner's categories, optionally narrowed by a name search.
    pub async fn list(
        pool: &PgPool,
        owner_id: DbId,
        search: Option<&str>,
    ) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories \
             WHERE owner_id = $1 AND ($2::text IS NULL OR name ILIKE '%' || $2 || '%') \
             ORDER BY name ASC"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(owner_id)
            .bind(search)
            .fetch_all(pool)
            .await
    }

    /// Update a category. Only non-`None` fields are applied.
    ///
    /// Returns `None` if the id does not exist in the owner's scope.
    pub async fn update(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET \
                name = COALESCE($3, name), \
                description = COALESCE($4, description), \
                color = COALESCE($5, color) \
             WHERE id = $1 AND owner_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.color)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category. Events referencing it keep existing with their
    /// category reference nulled (ON DELETE SET NULL).
    pub async fn delete(pool: &PgPool, owner_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
