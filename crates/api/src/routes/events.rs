//! Route definitions for events and their nested reminders.
//!
//! ```text
//! GET    /                         list_events
//! POST   /                         create_event
//! GET    /{id}                     get_event
//! PUT    /{id}                     update_event
//! DELETE /{id}                     delete_event
//! GET    /{event_id}/reminders     list_for_event
//! POST   /{event_id}/reminders     create_reminder
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::{events, reminders};
use crate::state::AppState;

/// Event routes — mounted at `/events`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(events::list_events).post(events::create_event))
        .route(
            "/{id}",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        )
        .route(
            "/{event_id}/reminders",
            get(reminders::list_for_event).post(reminders::create_reminder),
        )
}
