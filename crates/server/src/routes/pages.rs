use axum::extract::{Path, Query, State};
use axum::Json;
use tracing::info;

use service::pages::{self, NewPage};

use crate::errors::ApiError;
use crate::routes::{PageQuery, ServerState};

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<models::page::Model>>, ApiError> {
    let pagination = query.into_pagination()?;
    let rows = pages::list_pages(&state.db, pagination).await?;
    Ok(Json(rows))
}

pub async fn get_by_slug(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
) -> Result<Json<models::page::Model>, ApiError> {
    match pages::get_page_by_slug(&state.db, &slug).await? {
        Some(page) => Ok(Json(page)),
        None => Err(ApiError::not_found("page")),
    }
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewPage>,
) -> Result<Json<models::page::Model>, ApiError> {
    let created = pages::create_page(&state.db, input).await?;
    info!(id = created.id, slug = %created.slug, "created page");
    Ok(Json(created))
}
