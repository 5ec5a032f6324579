use axum::extract::{Query, State};
use axum::Json;
use tracing::info;

use service::products::{self, NewProduct, ProductView};

use crate::errors::ApiError;
use crate::routes::{PageQuery, ServerState};

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<ProductView>>, ApiError> {
    let pagination = query.into_pagination()?;
    let rows = products::list_products(&state.db, pagination).await?;
    Ok(Json(rows))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewProduct>,
) -> Result<Json<ProductView>, ApiError> {
    // NaN fails this comparison too
    if !(input.price > 0.0) {
        return Err(ApiError::bad_request("price must be positive"));
    }
    let created = products::create_product(&state.db, input).await?;
    info!(id = created.id, name = %created.name, "created product");
    Ok(Json(created))
}
