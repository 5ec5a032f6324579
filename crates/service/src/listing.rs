//! Generic read plans shared by every content listing.
//!
//! A plan is a visibility filter, an ordering and pagination bounds over an
//! arbitrary entity; the per-entity modules only pick the columns.

use common::pagination::Pagination;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::errors::ServiceError;

/// Ordering applied to a listing.
#[derive(Clone, Copy, Debug)]
pub enum Order<C> {
    /// Ascending explicit rank; equal ranks keep insertion order via the id
    /// column.
    Rank { rank: C, id: C },
    /// Newest first on the given timestamp column.
    Recency(C),
}

/// A composable read plan for one entity kind.
pub struct Listing<E: EntityTrait> {
    order: Order<E::Column>,
    visibility: Option<E::Column>,
}

impl<E: EntityTrait> Listing<E> {
    pub fn new(order: Order<E::Column>) -> Self {
        Self { order, visibility: None }
    }

    /// Only return rows whose visibility flag is set.
    pub fn visible_when(mut self, flag: E::Column) -> Self {
        self.visibility = Some(flag);
        self
    }

    fn select(&self) -> Select<E> {
        let mut query = E::find();
        if let Some(flag) = self.visibility {
            query = query.filter(flag.eq(true));
        }
        match self.order {
            Order::Rank { rank, id } => query.order_by_asc(rank).order_by_asc(id),
            Order::Recency(ts) => query.order_by_desc(ts),
        }
    }

    /// Execute the plan with `LIMIT limit OFFSET (page - 1) * limit`.
    ///
    /// A page past the end of the table yields an empty vector, not an
    /// error.
    pub async fn fetch(
        &self,
        db: &DatabaseConnection,
        pagination: Pagination,
    ) -> Result<Vec<E::Model>, ServiceError> {
        let (limit, offset) = pagination.normalize();
        self.select()
            .limit(limit)
            .offset(offset)
            .all(db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }
}

/// Look up a single row by slug, restricted to visible rows.
///
/// A matching slug on a hidden row yields `None`, same as no match at all.
pub async fn find_visible_by_slug<E: EntityTrait>(
    db: &DatabaseConnection,
    slug: E::Column,
    flag: E::Column,
    value: &str,
) -> Result<Option<E::Model>, ServiceError> {
    E::find()
        .filter(slug.eq(value))
        .filter(flag.eq(true))
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}
