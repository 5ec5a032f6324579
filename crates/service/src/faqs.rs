//! FAQ operations.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde::Deserialize;

use common::pagination::Pagination;
use models::faq;

use crate::errors::ServiceError;
use crate::listing::{Listing, Order};

#[derive(Debug, Clone, Deserialize)]
pub struct NewFaq {
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
    pub order_index: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

pub async fn create_faq(db: &DatabaseConnection, input: NewFaq) -> Result<faq::Model, ServiceError> {
    let now = Utc::now();
    let am = faq::ActiveModel {
        question: Set(input.question),
        answer: Set(input.answer),
        category: Set(input.category),
        order_index: Set(input.order_index),
        is_active: Set(input.is_active),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(ServiceError::from_db)
}

/// List active FAQs in explicit display order.
pub async fn list_faqs(
    db: &DatabaseConnection,
    pagination: Pagination,
) -> Result<Vec<faq::Model>, ServiceError> {
    Listing::<faq::Entity>::new(Order::Rank { rank: faq::Column::OrderIndex, id: faq::Column::Id })
        .visible_when(faq::Column::IsActive)
        .fetch(db, pagination)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use uuid::Uuid;

    fn input(question: &str, order_index: i32) -> NewFaq {
        NewFaq {
            question: question.to_string(),
            answer: "it depends".into(),
            category: None,
            order_index,
            is_active: true,
        }
    }

    #[tokio::test]
    async fn listing_respects_rank_order() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let late = create_faq(&db, input(&format!("q-{}", Uuid::new_v4()), 9)).await?;
        let early = create_faq(&db, input(&format!("q-{}", Uuid::new_v4()), 2)).await?;

        let mut rows = Vec::new();
        let mut page = 1;
        loop {
            let batch = list_faqs(&db, Pagination { page, limit: 100 }).await?;
            if batch.is_empty() {
                break;
            }
            rows.extend(batch);
            page += 1;
        }
        let pos = |id: i32| rows.iter().position(|f| f.id == id).expect("created faq listed");
        assert!(pos(early.id) < pos(late.id));
        Ok(())
    }
}
