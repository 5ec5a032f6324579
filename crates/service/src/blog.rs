//! Blog post operations.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde::Deserialize;

use common::pagination::Pagination;
use models::blog_post;

use crate::errors::ServiceError;
use crate::listing::{self, Listing, Order};

/// Input for creating a blog post. Posts default to unpublished, unlike
/// every other content kind.
#[derive(Debug, Clone, Deserialize)]
pub struct NewBlogPost {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub featured_image: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    #[serde(default)]
    pub is_published: bool,
}

pub async fn create_blog_post(
    db: &DatabaseConnection,
    input: NewBlogPost,
) -> Result<blog_post::Model, ServiceError> {
    let now = Utc::now();
    // published_at is set exactly once, at the moment a post is created
    // published; drafts keep it NULL forever.
    let published_at = input.is_published.then(|| now.into());
    let am = blog_post::ActiveModel {
        title: Set(input.title),
        slug: Set(input.slug),
        excerpt: Set(input.excerpt),
        content: Set(input.content),
        featured_image: Set(input.featured_image),
        meta_title: Set(input.meta_title),
        meta_description: Set(input.meta_description),
        is_published: Set(input.is_published),
        published_at: Set(published_at),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(ServiceError::from_db)
}

/// List published posts, most recently published first.
pub async fn list_blog_posts(
    db: &DatabaseConnection,
    pagination: Pagination,
) -> Result<Vec<blog_post::Model>, ServiceError> {
    Listing::<blog_post::Entity>::new(Order::Recency(blog_post::Column::PublishedAt))
        .visible_when(blog_post::Column::IsPublished)
        .fetch(db, pagination)
        .await
}

/// Fetch a published post by slug. Drafts are invisible here, even on an
/// exact slug match.
pub async fn get_blog_post_by_slug(
    db: &DatabaseConnection,
    slug: &str,
) -> Result<Option<blog_post::Model>, ServiceError> {
    listing::find_visible_by_slug::<blog_post::Entity>(
        db,
        blog_post::Column::Slug,
        blog_post::Column::IsPublished,
        slug,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use uuid::Uuid;

    fn input(slug: &str, published: bool) -> NewBlogPost {
        NewBlogPost {
            title: "Post".into(),
            slug: slug.to_string(),
            excerpt: None,
            content: "words".into(),
            featured_image: None,
            meta_title: None,
            meta_description: None,
            is_published: published,
        }
    }

    #[tokio::test]
    async fn publishing_at_creation_stamps_published_at() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let post = create_blog_post(&db, input(&format!("post-{}", Uuid::new_v4()), true)).await?;
        let published_at = post.published_at.expect("published post has published_at");
        assert_eq!(published_at, post.created_at);
        Ok(())
    }

    #[tokio::test]
    async fn draft_has_no_published_at_and_is_invisible() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let slug = format!("draft-{}", Uuid::new_v4());
        let draft = create_blog_post(&db, input(&slug, false)).await?;
        assert!(draft.published_at.is_none());

        assert!(get_blog_post_by_slug(&db, &slug).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn published_post_is_found_by_slug() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let slug = format!("post-{}", Uuid::new_v4());
        let created = create_blog_post(&db, input(&slug, true)).await?;
        let found = get_blog_post_by_slug(&db, &slug).await?.expect("published post visible");
        assert_eq!(found.id, created.id);
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_slug_is_rejected() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let slug = format!("dup-{}", Uuid::new_v4());
        create_blog_post(&db, input(&slug, true)).await?;
        let second = create_blog_post(&db, input(&slug, false)).await;
        assert!(matches!(second, Err(ServiceError::Conflict(_))));
        Ok(())
    }
}
