pub mod auth;
pub mod categories;
pub mod events;
pub mod health;
pub mod places;
pub mod reminders;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                  register (public)
/// /auth/login                     login (public)
///
/// /categories                     list, create
/// /categories/{id}                get, update, delete
///
/// /places                         list, create
/// /places/{id}                    get, update, delete
///
/// /events                         list, create (?status, priority, category, all_day, search)
/// /events/{id}                    get, update, delete
/// /events/{event_id}/reminders    list, create
///
/// /reminders                      list (?search, sent)
/// /reminders/{id}                 get, update, delete
/// ```
///
/// Everything outside `/auth` requires a Bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/categories", categories::router())
        .nest("/places", places::router())
        .nest("/events", events::router())
        .nest("/reminders", reminders::router())
}
