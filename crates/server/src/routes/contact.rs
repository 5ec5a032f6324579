use axum::extract::{Query, State};
use axum::Json;
use tracing::info;

use service::contact::{self, NewContactMessage};

use crate::errors::ApiError;
use crate::routes::{PageQuery, ServerState};

fn is_plausible_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, host)) => !local.is_empty() && !host.is_empty(),
        None => false,
    }
}

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<models::contact_message::Model>>, ApiError> {
    let pagination = query.into_pagination()?;
    let rows = contact::list_contact_messages(&state.db, pagination).await?;
    Ok(Json(rows))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewContactMessage>,
) -> Result<Json<models::contact_message::Model>, ApiError> {
    if !is_plausible_email(&input.email) {
        return Err(ApiError::bad_request("invalid email"));
    }
    let created = contact::create_contact_message(&state.db, input).await?;
    info!(id = created.id, "received contact message");
    Ok(Json(created))
}
