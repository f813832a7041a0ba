//! Handlers for the `/contextos` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use roster_core::types::DbId;
use roster_db::models::context::{ContextView, CreateContext, UpdateContext};
use roster_db::services::ContextService;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::ListParams;
use crate::state::AppState;

/// POST /api/v1/contextos
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateContext>,
) -> AppResult<(StatusCode, Json<ContextView>)> {
    let context = ContextService::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(context)))
}

/// GET /api/v1/contextos?page=&limit=
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListParams>,
) -> AppResult<Json<Vec<ContextView>>> {
    let page = params.page_request(&state.config)?;
    let contexts = ContextService::list(&state.pool, &page).await?;
    Ok(Json(contexts))
}

/// GET /api/v1/contextos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ContextView>> {
    let context = ContextService::get_by_id(&state.pool, id).await?;
    Ok(Json(context))
}

/// GET /api/v1/contextos/nome/{name}?page=&limit=
pub async fn search_by_name(
    State(state): State<AppState>,
    AppPath(name): AppPath<String>,
    AppQuery(params): AppQuery<ListParams>,
) -> AppResult<Json<Vec<ContextView>>> {
    let page = params.page_request(&state.config)?;
    let contexts = ContextService::get_by_name(&state.pool, &name, &page).await?;
    Ok(Json(contexts))
}

/// PUT /api/v1/contextos/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateContext>,
) -> AppResult<Json<ContextView>> {
    let context = ContextService::update(&state.pool, id, &input).await?;
    Ok(Json(context))
}

/// DELETE /api/v1/contextos/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    ContextService::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
