use axum::extract::{Query, State};
use axum::Json;
use tracing::info;

use service::faqs::{self, NewFaq};

use crate::errors::ApiError;
use crate::routes::{PageQuery, ServerState};

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<models::faq::Model>>, ApiError> {
    let pagination = query.into_pagination()?;
    let rows = faqs::list_faqs(&state.db, pagination).await?;
    Ok(Json(rows))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewFaq>,
) -> Result<Json<models::faq::Model>, ApiError> {
    let created = faqs::create_faq(&state.db, input).await?;
    info!(id = created.id, "created faq");
    Ok(Json(created))
}
