//! Route definitions for places.
//!
//! ```text
//! GET    /          list_places
//! POST   /          create_place
//! GET    /{id}      get_place
//! PUT    /{id}      update_place
//! DELETE /{id}      delete_place
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::places;
use crate::state::AppState;

/// Place routes — mounted at `/places`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(places::list_places).post(places::create_place))
        .route(
            "/{id}",
            get(places::get_place)
                .put(places::update_place)
                .delete(places::delete_place),
        )
}
