//! Service catalog operations.

use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use common::pagination::Pagination;
use models::price;
use models::service;

use crate::errors::ServiceError;
use crate::listing::{Listing, Order};

#[derive(Debug, Clone, Deserialize)]
pub struct NewService {
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    pub price: Option<f64>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub order_index: i32,
}

fn default_active() -> bool {
    true
}

/// A service row with its price decoded back to a wire float.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceView {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    pub price: Option<f64>,
    pub is_active: bool,
    pub order_index: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl ServiceView {
    fn from_row(row: service::Model) -> Result<Self, ServiceError> {
        let price = price::decode_opt(row.price)?;
        Ok(Self {
            id: row.id,
            title: row.title,
            description: row.description,
            icon: row.icon,
            price,
            is_active: row.is_active,
            order_index: row.order_index,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

pub async fn create_service(
    db: &DatabaseConnection,
    input: NewService,
) -> Result<ServiceView, ServiceError> {
    let now = Utc::now();
    let am = service::ActiveModel {
        title: Set(input.title),
        description: Set(input.description),
        icon: Set(input.icon),
        price: Set(price::encode_opt(input.price)?),
        is_active: Set(input.is_active),
        order_index: Set(input.order_index),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };
    let row = am.insert(db).await.map_err(ServiceError::from_db)?;
    ServiceView::from_row(row)
}

/// List active services in explicit display order.
pub async fn list_services(
    db: &DatabaseConnection,
    pagination: Pagination,
) -> Result<Vec<ServiceView>, ServiceError> {
    let rows = Listing::<service::Entity>::new(Order::Rank {
        rank: service::Column::OrderIndex,
        id: service::Column::Id,
    })
    .visible_when(service::Column::IsActive)
    .fetch(db, pagination)
    .await?;
    rows.into_iter().map(ServiceView::from_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use uuid::Uuid;

    fn input(title: &str, price: Option<f64>, order_index: i32, active: bool) -> NewService {
        NewService {
            title: title.to_string(),
            description: "what we do".into(),
            icon: None,
            price,
            is_active: active,
            order_index,
        }
    }

    async fn all_services(db: &DatabaseConnection) -> Result<Vec<ServiceView>, anyhow::Error> {
        let mut rows = Vec::new();
        let mut page = 1;
        loop {
            let batch = list_services(db, Pagination { page, limit: 100 }).await?;
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

        let priced = create_service(&db, input(&format!("svc-{}", Uuid::new_v4()), Some(99.99), 0, true)).await?;
        assert_eq!(priced.price, Some(99.99));

        let free = create_service(&db, input(&format!("svc-{}", Uuid::new_v4()), None, 0, true)).await?;
        assert_eq!(free.price, None);
        Ok(())
    }

    #[tokio::test]
    async fn listing_orders_by_rank_with_insertion_ties() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let tag = format!("rank-{}", Uuid::new_v4());
        let high_first = create_service(&db, input(&tag, None, 5, true)).await?;
        let low = create_service(&db, input(&tag, None, 1, true)).await?;
        let high_second = create_service(&db, input(&tag, None, 5, true)).await?;

        let listed = all_services(&db).await?;
        let pos = |id: i32| listed.iter().position(|s| s.id == id).expect("created service listed");
        assert!(pos(low.id) < pos(high_first.id));
        assert!(pos(high_first.id) < pos(high_second.id));
        Ok(())
    }

    #[tokio::test]
    async fn inactive_service_is_not_listed() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let hidden = create_service(&db, input(&format!("off-{}", Uuid::new_v4()), None, 0, false)).await?;
        let listed = all_services(&db).await?;
        assert!(listed.iter().all(|s| s.id != hidden.id));
        Ok(())
    }
}
