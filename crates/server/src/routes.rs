use axum::{routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use common::pagination::Pagination;
use common::types::Health;

use crate::errors::ApiError;

pub mod blog;
pub mod contact;
pub mod faqs;
pub mod gallery;
pub mod pages;
pub mod products;
pub mod services;

/// Shared handler state: the injected store handle.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Pagination query input as recognized at the transport boundary.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl PageQuery {
    /// Enforce the input contract: page >= 1, limit in 1..=100. Out-of-range
    /// values are a validation failure, not something to clamp.
    pub fn into_pagination(self) -> Result<Pagination, ApiError> {
        if self.page == Some(0) {
            return Err(ApiError::bad_request("page must be >= 1"));
        }
        match self.limit {
            Some(0) => return Err(ApiError::bad_request("limit must be >= 1")),
            Some(l) if l > 100 => return Err(ApiError::bad_request("limit must be <= 100")),
            _ => {}
        }
        Ok(Pagination {
            page: self.page.unwrap_or(1),
            limit: self.limit.unwrap_or(10),
        })
    }
}

/// Build the full application router.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/pages", get(pages::list).post(pages::create))
        .route("/api/pages/:slug", get(pages::get_by_slug))
        .route("/api/services", get(services::list).post(services::create))
        .route("/api/products", get(products::list).post(products::create))
        .route("/api/gallery", get(gallery::list).post(gallery::create))
        .route("/api/blog", get(blog::list).post(blog::create))
        .route("/api/blog/:slug", get(blog::get_by_slug))
        .route("/api/faqs", get(faqs::list).post(faqs::create))
        .route("/api/contact", get(contact::list).post(contact::create))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
