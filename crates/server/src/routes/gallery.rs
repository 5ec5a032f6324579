use axum::extract::{Query, State};
use axum::Json;
use tracing::info;

use service::gallery::{self, NewGalleryItem};

use crate::errors::ApiError;
use crate::routes::{PageQuery, ServerState};

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<models::gallery_item::Model>>, ApiError> {
    let pagination = query.into_pagination()?;
    let rows = gallery::list_gallery_items(&state.db, pagination).await?;
    Ok(Json(rows))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewGalleryItem>,
) -> Result<Json<models::gallery_item::Model>, ApiError> {
    let created = gallery::create_gallery_item(&state.db, input).await?;
    info!(id = created.id, title = %created.title, "created gallery item");
    Ok(Json(created))
}
