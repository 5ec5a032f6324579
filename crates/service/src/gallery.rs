//! Gallery operations.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde::Deserialize;

use common::pagination::Pagination;
use models::gallery_item;

use crate::errors::ServiceError;
use crate::listing::{Listing, Order};

#[derive(Debug, Clone, Deserialize)]
pub struct NewGalleryItem {
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub category: Option<String>,
    pub order_index: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

pub async fn create_gallery_item(
    db: &DatabaseConnection,
    input: NewGalleryItem,
) -> Result<gallery_item::Model, ServiceError> {
    let am = gallery_item::ActiveModel {
        title: Set(input.title),
        description: Set(input.description),
        image_url: Set(input.image_url),
        category: Set(input.category),
        order_index: Set(input.order_index),
        is_active: Set(input.is_active),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(ServiceError::from_db)
}

/// List active gallery items in explicit display order.
pub async fn list_gallery_items(
    db: &DatabaseConnection,
    pagination: Pagination,
) -> Result<Vec<gallery_item::Model>, ServiceError> {
    Listing::<gallery_item::Entity>::new(Order::Rank {
        rank: gallery_item::Column::OrderIndex,
        id: gallery_item::Column::Id,
    })
    .visible_when(gallery_item::Column::IsActive)
    .fetch(db, pagination)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use uuid::Uuid;

    #[tokio::test]
    async fn create_and_list_visible_items() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let title = format!("shot-{}", Uuid::new_v4());
        let created = create_gallery_item(
            &db,
            NewGalleryItem {
                title: title.clone(),
                description: None,
                image_url: "/img/shot.jpg".into(),
                category: Some("workshop".into()),
                order_index: 0,
                is_active: true,
            },
        )
        .await?;
        assert!(created.id > 0);
        assert!(created.is_active);

        let mut found = false;
        let mut page = 1;
        loop {
            let batch = list_gallery_items(&db, Pagination { page, limit: 100 }).await?;
            if batch.is_empty() {
                break;
            }
            found |= batch.iter().any(|g| g.id == created.id);
            page += 1;
        }
        assert!(found, "active gallery item should be listed");
        Ok(())
    }
}
