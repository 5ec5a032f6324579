use axum::extract::{Path, Query, State};
use axum::Json;
use tracing::info;

use service::blog::{self, NewBlogPost};

use crate::errors::ApiError;
use crate::routes::{PageQuery, ServerState};

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<models::blog_post::Model>>, ApiError> {
    let pagination = query.into_pagination()?;
    let rows = blog::list_blog_posts(&state.db, pagination).await?;
    Ok(Json(rows))
}

pub async fn get_by_slug(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
) -> Result<Json<models::blog_post::Model>, ApiError> {
    match blog::get_blog_post_by_slug(&state.db, &slug).await? {
        Some(post) => Ok(Json(post)),
        None => Err(ApiError::not_found("blog post")),
    }
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewBlogPost>,
) -> Result<Json<models::blog_post::Model>, ApiError> {
    let created = blog::create_blog_post(&state.db, input).await?;
    info!(id = created.id, slug = %created.slug, published = created.is_published, "created blog post");
    Ok(Json(created))
}
