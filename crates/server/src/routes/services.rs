use axum::extract::{Query, State};
use axum::Json;
use tracing::info;

use service::services::{self, NewService, ServiceView};

use crate::errors::ApiError;
use crate::routes::{PageQuery, ServerState};

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<ServiceView>>, ApiError> {
    let pagination = query.into_pagination()?;
    let rows = services::list_services(&state.db, pagination).await?;
    Ok(Json(rows))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewService>,
) -> Result<Json<ServiceView>, ApiError> {
    let created = services::create_service(&state.db, input).await?;
    info!(id = created.id, title = %created.title, "created service");
    Ok(Json(created))
}
