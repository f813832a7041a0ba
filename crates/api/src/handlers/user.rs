//! Handlers for the `/usuarios` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use roster_core::types::DbId;
use roster_db::models::user::{CreateUser, UpdateUser, UserView};
use roster_db::services::UserService;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::ListParams;
use crate::state::AppState;

/// POST /api/v1/usuarios
///
/// The body must carry at least one `context_ids` entry.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateUser>,
) -> AppResult<(StatusCode, Json<UserView>)> {
    let user = UserService::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/v1/usuarios?page=&limit=
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListParams>,
) -> AppResult<Json<Vec<UserView>>> {
    let page = params.page_request(&state.config)?;
    let users = UserService::list(&state.pool, &page).await?;
    Ok(Json(users))
}

/// GET /api/v1/usuarios/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<UserView>> {
    let user = UserService::get_by_id(&state.pool, id).await?;
    Ok(Json(user))
}

/// GET /api/v1/usuarios/nome/{name}?page=&limit=
pub async fn search_by_name(
    State(state): State<AppState>,
    AppPath(name): AppPath<String>,
    AppQuery(params): AppQuery<ListParams>,
) -> AppResult<Json<Vec<UserView>>> {
    let page = params.page_request(&state.config)?;
    let users = UserService::get_by_name(&state.pool, &name, &page).await?;
    Ok(Json(users))
}

/// PUT /api/v1/usuarios/{id}
///
/// A non-empty `context_ids` replaces the user's contexts; omit it (or send
/// `[]`) to leave them as they are.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateUser>,
) -> AppResult<Json<UserView>> {
    let user = UserService::update(&state.pool, id, &input).await?;
    Ok(Json(user))
}

/// DELETE /api/v1/usuarios/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    UserService::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
