//! Static page operations.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde::Deserialize;

use common::pagination::Pagination;
use models::page;

use crate::errors::ServiceError;
use crate::listing::{self, Listing, Order};

/// Input for creating a page, as delivered by the transport boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPage {
    pub slug: String,
    pub title: String,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub content: String,
    #[serde(default = "default_published")]
    pub is_published: bool,
}

fn default_published() -> bool {
    true
}

/// Persist a new page. Identity and timestamps are assigned here, never by
/// the caller; a duplicate slug surfaces as [`ServiceError::Conflict`].
pub async fn create_page(db: &DatabaseConnection, input: NewPage) -> Result<page::Model, ServiceError> {
    let now = Utc::now();
    let am = page::ActiveModel {
        slug: Set(input.slug),
        title: Set(input.title),
        meta_title: Set(input.meta_title),
        meta_description: Set(input.meta_description),
        content: Set(input.content),
        is_published: Set(input.is_published),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(ServiceError::from_db)
}

/// List published pages, newest first.
pub async fn list_pages(
    db: &DatabaseConnection,
    pagination: Pagination,
) -> Result<Vec<page::Model>, ServiceError> {
    Listing::<page::Entity>::new(Order::Recency(page::Column::CreatedAt))
        .visible_when(page::Column::IsPublished)
        .fetch(db, pagination)
        .await
}

/// Fetch a published page by slug. Unpublished pages are invisible here,
/// even on an exact slug match.
pub async fn get_page_by_slug(
    db: &DatabaseConnection,
    slug: &str,
) -> Result<Option<page::Model>, ServiceError> {
    listing::find_visible_by_slug::<page::Entity>(db, page::Column::Slug, page::Column::IsPublished, slug)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use uuid::Uuid;

    fn input(slug: &str, published: bool) -> NewPage {
        NewPage {
            slug: slug.to_string(),
            title: "About us".into(),
            meta_title: None,
            meta_description: None,
            content: "body".into(),
            is_published: published,
        }
    }

    async fn all_pages(db: &DatabaseConnection) -> Result<Vec<page::Model>, anyhow::Error> {
        let mut rows = Vec::new();
        let mut page = 1;
        loop {
            let batch = list_pages(db, Pagination { page, limit: 100 }).await?;
            if batch.is_empty() {
                break;
            }
            rows.extend(batch);
            page += 1;
        }
        Ok(rows)
    }

    #[tokio::test]
    async fn create_assigns_identity_and_timestamps() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let slug = format!("page-{}", Uuid::new_v4());
        let created = create_page(&db, input(&slug, true)).await?;
        assert!(created.id > 0);
        assert_eq!(created.created_at, created.updated_at);

        let found = get_page_by_slug(&db, &slug).await?.expect("published page visible");
        assert_eq!(found.id, created.id);
        Ok(())
    }

    #[tokio::test]
    async fn unpublished_page_is_invisible() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let slug = format!("draft-{}", Uuid::new_v4());
        let created = create_page(&db, input(&slug, false)).await?;

        assert!(get_page_by_slug(&db, &slug).await?.is_none());
        let listed = all_pages(&db).await?;
        assert!(listed.iter().all(|p| p.id != created.id));
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_slug_is_rejected_and_first_row_survives() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let slug = format!("dup-{}", Uuid::new_v4());
        let first = create_page(&db, input(&slug, true)).await?;

        let second = create_page(&db, input(&slug, true)).await;
        assert!(matches!(second, Err(ServiceError::Conflict(_))));

        let found = get_page_by_slug(&db, &slug).await?.expect("first page still retrievable");
        assert_eq!(found.id, first.id);
        Ok(())
    }
}
