//! Route definitions for the `/contextos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::context;
use crate::state::AppState;

/// Routes mounted at `/contextos`.
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
        .route("/", get(context::list).post(context::create))
        .route("/nome/{name}", get(context::search_by_name))
        .route(
            "/{id}",
            get(context::get_by_id)
                .put(context::update)
                .delete(context::delete),
        )
}
