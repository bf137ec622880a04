pub mod dbstore;
pub mod errors;

use std::fmt;

use async_trait::async_trait;

use crate::models::products::{Product, ProductPatch};
use crate::store::database::errors::DBError;

/// Durable product storage. All mutations are persisted before the call
/// returns; there is no write-behind caching.
#[async_trait]
pub trait ProductsStore: fmt::Debug + Send + Sync {
  /// Inserts a product (the given `id` is ignored) and returns the assigned
  /// row id.
  async fn product_create(&self, product: &Product) -> Result<i64, DBError>;

  async fn product_get_by_id(&self, id: i64) -> Result<Product, DBError>;

  async fn product_get_by_slug(&self, slug: &str) -> Result<Product, DBError>;

  /// All products, ascending by sort order, ties broken by id.
  async fn product_list(&self) -> Result<Vec<Product>, DBError>;

  /// Applies a partial update; fields absent from the patch keep their
  /// stored values, empty-string image values are ignored.
  async fn product_update(&self, slug: &str, patch: &ProductPatch) -> Result<(), DBError>;

  async fn product_delete(&self, slug: &str) -> Result<(), DBError>;

  /// Writes an absolute sort-order value for one row. Idempotent.
  async fn product_sort_order_set(&self, id: i64, sort_order: i64) -> Result<(), DBError>;

  /// Highest sort order currently stored, `None` for an empty catalog.
  async fn product_max_sort_order(&self) -> Result<Option<i64>, DBError>;
}
