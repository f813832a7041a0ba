//! Route definitions for the `/usuarios` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/usuarios`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /nome/{name}   -> search_by_name
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(user::list).post(user::create))
        .route("/nome/{name}", get(user::search_by_name))
        .route(
            "/{id}",
            get(user::get_by_id)
                .put(user::update)
                .delete(user::delete),
        )
}
