//! Repository for the `events` table.

use agenda_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::event::{CreateEvent, Event, EventListingRow, EventOverview, UpdateEvent};

const COLUMNS: &str = "id, title, description, start_at, end_at, all_day, status, priority, \
     category_id, place_id, owner_id, created_at";

/// Listing filters, mirroring the filterable columns in
/// `agenda_core::listing` (owner scoping is implicit).
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub category_id: Option<DbId>,
    pub all_day: Option<bool>,
    /// Case-insensitive substring match over title and description.
    pub search: Option<String>,
}

/// Provides owner-scoped CRUD operations for events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event, returning the created row.
    ///
    /// `created_at` is assigned by the database and immutable afterwards.
    /// The `ck_events_start_before_end` constraint is the structural
    /// backstop for the start/end ordering rule.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateEvent,
    ) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events \
                (title, description, start_at, end_at, all_day, status, priority, \
                 category_id, place_id, owner_id) \
             VALUES ($1, $2, $3, $4, COALESCE($5, FALSE), COALESCE($6, 'planned'), \
                     COALESCE($7, 'medium'), $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.start_at)
            .bind(input.end_at)
            .bind(input.all_day)
            .bind(&input.status)
            .bind(&input.priority)
            .bind(input.category_id)
            .bind(input.place_id)
            .bind(owner_id)
            .fetch_one(pool)
            .await
    }

    /// Find an event by ID within the owner's scope.
    pub async fn find_by_id(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1 AND owner_id = $2");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// List the owner's events with the denormalized category label,
    /// narrowed by the given filters, ordered by start time.
    pub async fn list(
        pool: &PgPool,
        owner_id: DbId,
        filter: &EventFilter,
    ) -> Result<Vec<EventOverview>, sqlx::Error> {
        let query = "SELECT e.id, e.title, e.description, e.start_at, e.end_at, e.all_day, \
                    e.status, e.priority, e.category_id, c.name AS category_name, \
                    e.place_id, e.owner_id, e.created_at \
             FROM events e \
             LEFT JOIN categories c ON c.id = e.category_id \
             WHERE e.owner_id = $1 \
               AND ($2::text IS NULL OR e.status = $2) \
               AND ($3::text IS NULL OR e.priority = $3) \
               AND ($4::bigint IS NULL OR e.category_id = $4) \
               AND ($5::boolean IS NULL OR e.all_day = $5) \
               AND ($6::text IS NULL \
                    OR e.title ILIKE '%' || $6 || '%' \
                    OR e.description ILIKE '%' || $6 || '%') \
             ORDER BY e.start_at ASC";
        let rows = sqlx::query_as::<_, EventListingRow>(query)
            .bind(owner_id)
            .bind(&filter.status)
            .bind(&filter.priority)
            .bind(filter.category_id)
            .bind(filter.all_day)
            .bind(&filter.search)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(EventOverview::from).collect())
    }

    /// Update an event. Only non-`None` fields are applied; `created_at`
    /// is never touched.
    pub async fn update(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET \
                title = COALESCE($3, title), \
                description = COALESCE($4, description), \
                start_at = COALESCE($5, start_at), \
                end_at = COALESCE($6, end_at), \
                all_day = COALESCE($7, all_day), \
                status = COALESCE($8, status), \
                priority = COALESCE($9, priority), \
                category_id = COALESCE($10, category_id), \
                place_id = COALESCE($11, place_id) \
             WHERE id = $1 AND owner_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.start_at)
            .bind(input.end_at)
            .bind(input.all_day)
            .bind(&input.status)
            .bind(&input.priority)
            .bind(input.category_id)
            .bind(input.place_id)
            .fetch_optional(pool)
            .await
    }

    /// The end timestamp of an event, if it exists in the owner's scope.
    /// Used by reminder validation.
    pub async fn end_at(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
    ) -> Result<Option<Timestamp>, sqlx::Error> {
        let row: Option<(Timestamp,)> =
            sqlx::query_as("SELECT end_at FROM events WHERE id = $1 AND owner_id = $2")
                .bind(id)
                .bind(owner_id)
                .fetch_optional(pool)
                .await?;
        Ok(row.map(|(end_at,)| end_at))
    }

    /// Delete an event. Its reminders are removed by the cascading foreign
    /// key.
    pub async fn delete(pool: &PgPool, owner_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
