//! Migrator registering table migrations in creation order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_pages;
mod m20240101_000002_create_services;
mod m20240101_000003_create_products;
mod m20240101_000004_create_gallery;
mod m20240101_000005_create_blog_posts;
mod m20240101_000006_create_faq;
mod m20240101_000007_create_contact_messages;
mod m20240101_000008_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_pages::Migration),
            Box::new(m20240101_000002_create_services::Migration),
            Box::new(m20240101_000003_create_products::Migration),
            Box::new(m20240101_000004_create_gallery::Migration),
            Box::new(m20240101_000005_create_blog_posts::Migration),
            Box::new(m20240101_000006_create_faq::Migration),
            Box::new(m20240101_000007_create_contact_messages::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000008_add_indexes::Migration),
        ]
    }
}
