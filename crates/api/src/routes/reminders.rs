//! Route definitions for the flat reminder surface.
//!
//! Creation goes through `/events/{event_id}/reminders`; these routes cover
//! cross-event listing and item access.
//!
//! ```text
//! GET    /          list_reminders
//! GET    /{id}      get_reminder
//! PUT    /{id}      update_reminder
//! DELETE /{id}      delete_reminder
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::reminders;
use crate::state::AppState;

/// Reminder routes — mounted at `/reminders`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(reminders::list_reminders))
        .route(
            "/{id}",
            get(reminders::get_reminder)
                .put(reminders::update_reminder)
                .delete(reminders::delete_reminder),
        )
}
