//! Repository for the `reminders` table.
//!
//! Reminders carry no owner column; scoping goes through the parent event
//! (`JOIN events e ON e.id = r.event_id AND e.owner_id = $n`).

use agenda_core::types::DbId;
use sqlx::PgPool;

use crate::models::reminder::{CreateReminder, Reminder, UpdateReminder};

const COLUMNS: &str = "r.id, r.event_id, r.remind_at, r.message, r.sent";

/// Provides event-scoped CRUD operations for reminders.
pub struct ReminderRepo;

impl ReminderRepo {
    /// Insert a new reminder for an event. The caller has already verified
    /// that the event belongs to the requesting owner.
    pub async fn create(
        pool: &PgPool,
        event_id: DbId,
        input: &CreateReminder,
    ) -> Result<Reminder, sqlx::Error> {
        let query = "INSERT INTO reminders (event_id, remind_at, message, sent) \
             VALUES ($1, $2, $3, COALESCE($4, FALSE)) \
             RETURNING id, event_id, remind_at, message, sent";
        sqlx::query_as::<_, Reminder>(query)
            .bind(event_id)
            .bind(input.remind_at)
            .bind(&input.message)
            .bind(input.sent)
            .fetch_one(pool)
            .await
    }

    /// Find a reminder by ID within the owner's scope.
    pub async fn find_by_id(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
    ) -> Result<Option<Reminder>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reminders r \
             JOIN events e ON e.id = r.event_id \
             WHERE r.id = $1 AND e.owner_id = $2"
        );
        sqlx::query_as::<_, Reminder>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// List the reminders of one event, soonest first.
    pub async fn list_for_event(
        pool: &PgPool,
        owner_id: DbId,
        event_id: DbId,
    ) -> Result<Vec<Reminder>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reminders r \
             JOIN events e ON e.id = r.event_id \
             WHERE r.event_id = $1 AND e.owner_id = $2 \
             ORDER BY r.remind_at ASC"
        );
        sqlx::query_as::<_, Reminder>(&query)
            .bind(event_id)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// List all of the owner's reminders across events, optionally narrowed
    /// by a search over the message and the event title.
    pub async fn list(
        pool: &PgPool,
        owner_id: DbId,
        search: Option<&str>,
        sent: Option<bool>,
    ) -> Result<Vec<Reminder>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reminders r \
             JOIN events e ON e.id = r.event_id \
             WHERE e.owner_id = $1 \
               AND ($2::text IS NULL \
                    OR r.message ILIKE '%' || $2 || '%' \
                    OR e.title ILIKE '%' || $2 || '%') \
               AND ($3::boolean IS NULL OR r.sent = $3) \
             ORDER BY r.remind_at ASC"
        );
        sqlx::query_as::<_, Reminder>(&query)
            .bind(owner_id)
            .bind(search)
            .bind(sent)
            .fetch_all(pool)
            .await
    }

    /// Update a reminder. Only non-`None` fields are applied. The owner
    /// scope is checked against the reminder's *current* event; re-pointing
    /// to another owner's event is rejected by the handler before this call.
    pub async fn update(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
        input: &UpdateReminder,
    ) -> Result<Option<Reminder>, sqlx::Error> {
        let query = "UPDATE reminders r SET \
                event_id = COALESCE($3, r.event_id), \
                remind_at = COALESCE($4, r.remind_at), \
                message = COALESCE($5, r.message), \
                sent = COALESCE($6, r.sent) \
             FROM events e \
             WHERE r.id = $1 AND e.id = r.event_id AND e.owner_id = $2 \
             RETURNING r.id, r.event_id, r.remind_at, r.message, r.sent";
        sqlx::query_as::<_, Reminder>(query)
            .bind(id)
            .bind(owner_id)
            .bind(input.event_id)
            .bind(input.remind_at)
            .bind(&input.message)
            .bind(input.sent)
            .fetch_optional(pool)
            .await
    }

    /// Delete a reminder within the owner's scope.
    pub async fn delete(pool: &PgPool, owner_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM reminders r \
             USING events e \
             WHERE r.id = $1 AND e.id = r.event_id AND e.owner_id = $2",
        )
        .bind(id)
        .bind(owner_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
