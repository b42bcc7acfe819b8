//! Persistence seam between the handlers and the database.
//!
//! Handlers only ever see [`Store`]; the production implementation is
//! [`PgStore`], tests run against the in-memory one.

use serde::Serialize;
use sqlx::FromRow;
use sqlx::postgres::PgRow;

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// A flat record kept in its own table with a generated `id` and nullable
/// text columns.
pub trait Entity: Serialize + Send + Unpin + for<'r> FromRow<'r, PgRow> {
    /// Payload accepted on create, the record without its `id`.
    type Draft: Send + Sync;

    const TABLE: &'static str;
    /// Every column except `id`, in bind order.
    const COLUMNS: &'static [&'static str];

    /// Column values of a draft, in [`Entity::COLUMNS`] order.
    fn values(draft: &Self::Draft) -> Vec<Option<String>>;

    /// Builds a record from its id and column values in [`Entity::COLUMNS`] order.
    #[cfg(test)]
    fn hydrate(id: i64, values: Vec<Option<String>>) -> Self;
}

#[derive(Debug, Clone)]
pub enum Filter {
    Id(i64),
    /// Every column must equal its value. A `None` value never matches.
    Columns(Vec<(&'static str, Option<String>)>),
}

#[allow(async_fn_in_trait)]
pub trait Store: Send + Sync + 'static {
    /// Creates the table if needed and adds any missing column.
    async fn sync<E: Entity>(&self) -> Result<(), StoreError>;

    async fn create<E: Entity>(&self, draft: &E::Draft) -> Result<(), StoreError>;

    async fn find_all<E: Entity>(&self) -> Result<Vec<E>, StoreError>;

    /// First record by `id` matching the filter.
    async fn find_one<E: Entity>(&self, filter: Filter) -> Result<E, StoreError>;

    /// Removing an id that does not exist is not an error.
    async fn delete<E: Entity>(&self, id: i64) -> Result<(), StoreError>;
}
