//! Product catalog operations.

use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use common::pagination::Pagination;
use models::price;
use models::product;

use crate::errors::ServiceError;
use crate::listing::{Listing, Order};

/// Input for creating a product. Price positivity is enforced at the
/// transport boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// A product row with its price decoded back to a wire float.
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub is_featured: bool,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl ProductView {
    fn from_row(row: product::Model) -> Result<Self, ServiceError> {
        let price = price::decode(row.price)?;
        Ok(Self {
            id: row.id,
            name: row.name,
            description: row.description,
            price,
            image_url: row.image_url,
            category: row.category,
            is_featured: row.is_featured,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

pub async fn create_product(
    db: &DatabaseConnection,
    input: NewProduct,
) -> Result<ProductView, ServiceError> {
    let now = Utc::now();
    let am = product::ActiveModel {
        name: Set(input.name),
        description: Set(input.description),
        price: Set(price::encode(input.price)?),
        image_url: Set(input.image_url),
        category: Set(input.category),
        is_featured: Set(input.is_featured),
        is_active: Set(input.is_active),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };
    let row = am.insert(db).await.map_err(ServiceError::from_db)?;
    ProductView::from_row(row)
}

/// List active products, newest first.
pub async fn list_products(
    db: &DatabaseConnection,
    pagination: Pagination,
) -> Result<Vec<ProductView>, ServiceError> {
    let rows = Listing::<product::Entity>::new(Order::Recency(product::Column::CreatedAt))
        .visible_when(product::Column::IsActive)
        .fetch(db, pagination)
        .await?;
    rows.into_iter().map(ProductView::from_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use std::time::Duration;
    use uuid::Uuid;

    fn input(name: &str, price: f64, active: bool) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: "a thing we sell".into(),
            price,
            image_url: None,
            category: None,
            is_featured: false,
            is_active: active,
        }
    }

    async fn all_products(db: &DatabaseConnection) -> Result<Vec<ProductView>, anyhow::Error> {
        let mut rows = Vec::new();
        let mut page = 1;
        loop {
            let batch = list_products(db, Pagination { page, limit: 100 }).await?;
            if batch.is_empty() {
                break;
            }
            rows.extend(batch);
            page += 1;
        }
        Ok(rows)
    }

    #[tokio::test]
    async fn price_round_trips_through_store() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let created = create_product(&db, input(&format!("prod-{}", Uuid::new_v4()), 150_000.50, true)).await?;
        assert_eq!(created.price, 150_000.50);
        Ok(())
    }

    #[tokio::test]
    async fn listing_is_newest_first_and_skips_inactive() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let older = create_product(&db, input(&format!("prod-{}", Uuid::new_v4()), 10.0, true)).await?;
        // distinct created_at so recency ordering is unambiguous
        tokio::time::sleep(Duration::from_millis(10)).await;
        let newer = create_product(&db, input(&format!("prod-{}", Uuid::new_v4()), 20.0, true)).await?;
        let hidden = create_product(&db, input(&format!("prod-{}", Uuid::new_v4()), 30.0, false)).await?;

        let listed = all_products(&db).await?;
        let pos = |id: i32| listed.iter().position(|p| p.id == id).expect("created product listed");
        assert!(pos(newer.id) < pos(older.id));
        assert!(listed.iter().all(|p| p.id != hidden.id));
        Ok(())
    }
}
