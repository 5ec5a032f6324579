//! Contact message intake and moderation listing.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde::Deserialize;

use common::pagination::Pagination;
use models::contact_message;

use crate::errors::ServiceError;
use crate::listing::{Listing, Order};

/// Input for a visitor contact submission. Email shape is enforced at the
/// transport boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
}

pub async fn create_contact_message(
    db: &DatabaseConnection,
    input: NewContactMessage,
) -> Result<contact_message::Model, ServiceError> {
    let am = contact_message::ActiveModel {
        name: Set(input.name),
        email: Set(input.email),
        phone: Set(input.phone),
        subject: Set(input.subject),
        message: Set(input.message),
        is_read: Set(false),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(ServiceError::from_db)
}

/// List messages newest first. There is no visibility flag on messages;
/// every row is returned to the (external) moderation consumer.
pub async fn list_contact_messages(
    db: &DatabaseConnection,
    pagination: Pagination,
) -> Result<Vec<contact_message::Model>, ServiceError> {
    Listing::<contact_message::Entity>::new(Order::Recency(contact_message::Column::CreatedAt))
        .fetch(db, pagination)
        .await
}
