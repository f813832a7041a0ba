pub mod context;
pub mod health;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /contextos                    list, create
/// /contextos/{id}               get, update, soft delete
/// /contextos/nome/{name}        name search
///
/// /usuarios                     list, create
/// /usuarios/{id}                get, update, soft delete
/// /usuarios/nome/{name}         name search
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/contextos", context::router())
        .nest("/usuarios", user::router())
}
