mod product_create;
mod product_delete;
mod product_get;
mod product_list;
mod product_update;
mod sort_order;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::models::products::{Product, ProductPatch};
use crate::store::database::errors::{handle_db_error, DBError};
use crate::store::database::ProductsStore;

const PRODUCTS_SCHEMA: &str = r#"
  CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    price INTEGER NOT NULL DEFAULT 0,
    sku TEXT NOT NULL DEFAULT '',
    slug TEXT NOT NULL UNIQUE,
    image_path TEXT NOT NULL DEFAULT '',
    image_path2 TEXT NOT NULL DEFAULT '',
    image_path3 TEXT NOT NULL DEFAULT '',
    image_path4 TEXT NOT NULL DEFAULT '',
    image_path5 TEXT NOT NULL DEFAULT '',
    publish_date TEXT NOT NULL DEFAULT '',
    quantity INTEGER NOT NULL DEFAULT 1,
    sort_order INTEGER NOT NULL DEFAULT 0,
    created_at INTEGER NOT NULL DEFAULT 0
  )
"#;

pub async fn init_schema(db: &SqlitePool) -> Result<(), DBError> {
  sqlx::query(PRODUCTS_SCHEMA)
    .execute(db)
    .await
    .map_err(|e| handle_db_error(e, "storefront.store.init_schema"))?;
  Ok(())
}

#[derive(Debug)]
pub struct ProductsStoreImpl {
  pub(crate) db: Arc<SqlitePool>,
}

#[derive(Debug)]
pub struct ProductsStoreImplArgs {
  pub db: Arc<SqlitePool>,
}

impl ProductsStoreImpl {
  pub fn new(args: ProductsStoreImplArgs) -> Self {
    Self { db: args.db }
  }
}

pub(super) fn product_from_row(row: &SqliteRow) -> Product {
  Product {
    id: row.try_get("id").unwrap_or_default(),
    name: row.try_get("name").unwrap_or_default(),
    description: row.try_get("description").unwrap_or_default(),
    price: row.try_get("price").unwrap_or_default(),
    sku: row.try_get("sku").unwrap_or_default(),
    slug: row.try_get("slug").unwrap_or_default(),
    image_paths: [
      row.try_get("image_path").unwrap_or_default(),
      row.try_get("image_path2").unwrap_or_default(),
      row.try_get("image_path3").unwrap_or_default(),
      row.try_get("image_path4").unwrap_or_default(),
      row.try_get("image_path5").unwrap_or_default(),
    ],
    publish_date: row.try_get("publish_date").unwrap_or_default(),
    quantity: row.try_get("quantity").unwrap_or_default(),
    sort_order: row.try_get("sort_order").unwrap_or_default(),
    created_at: row.try_get("created_at").unwrap_or_default(),
  }
}

#[async_trait]
impl ProductsStore for ProductsStoreImpl {
  async fn product_create(&self, product: &Product) -> Result<i64, DBError> {
    product_create::product_create(self, product).await
  }

  async fn product_get_by_id(&self, id: i64) -> Result<Product, DBError> {
    product_get::product_get_by_id(self, id).await
  }

  async fn product_get_by_slug(&self, slug: &str) -> Result<Product, DBError> {
    product_get::product_get_by_slug(self, slug).await
  }

  async fn product_list(&self) -> Result<Vec<Product>, DBError> {
    product_list::product_list(self).await
  }

  async fn product_update(&self, slug: &str, patch: &ProductPatch) -> Result<(), DBError> {
    product_update::product_update(self, slug, patch).await
  }

  async fn product_delete(&self, slug: &str) -> Result<(), DBError> {
    product_delete::product_delete(self, slug).await
  }

  async fn product_sort_order_set(&self, id: i64, sort_order: i64) -> Result<(), DBError> {
    sort_order::product_sort_order_set(self, id, sort_order).await
  }

  async fn product_max_sort_order(&self) -> Result<Option<i64>, DBError> {
    sort_order::product_max_sort_order(self).await
  }
}

#[cfg(test)]
mod tests {
  use sqlx::sqlite::SqlitePoolOptions;

  use super::*;
  use crate::store::database::errors::DBErrorType;

  // In-memory SQLite gives every connection its own database, so the test
  // pool is pinned to a single connection.
  async fn test_store() -> ProductsStoreImpl {
    let pool =
      SqlitePoolOptions::new().max_connections(1).connect("sqlite::memory:").await.unwrap();
    init_schema(&pool).await.unwrap();
    ProductsStoreImpl::new(ProductsStoreImplArgs { db: Arc::new(pool) })
  }

  fn red_shirt() -> Product {
    Product {
      id: 0,
      name: "Red Shirt".into(),
      description: "A very red shirt".into(),
      price: 199,
      sku: "SHIRT-1".into(),
      slug: "red-shirt".into(),
      image_paths: ["/product-images/1-red.png".into(), "".into(), "".into(), "".into(), "".into()],
      publish_date: "2026-01-15".into(),
      quantity: 1,
      sort_order: 0,
      created_at: 1700000000000,
    }
  }

  #[tokio::test]
  async fn test_create_then_get_round_trip() {
    let store = test_store().await;
    let id = store.product_create(&red_shirt()).await.unwrap();
    assert!(id > 0);

    let found = store.product_get_by_slug("red-shirt").await.unwrap();
    assert_eq!(found.id, id);
    assert_eq!(found, Product { id, ..red_shirt() });

    let by_id = store.product_get_by_id(id).await.unwrap();
    assert_eq!(by_id, found);
  }

  #[tokio::test]
  async fn test_duplicate_slug_is_unique_violation() {
    let store = test_store().await;
    store.product_create(&red_shirt()).await.unwrap();
    let err = store.product_create(&red_shirt()).await.unwrap_err();
    assert_eq!(err.err_type, DBErrorType::UniqueViolation);
    assert!(err.msg.contains("slug"));
  }

  #[tokio::test]
  async fn test_get_missing_slug_is_no_rows() {
    let store = test_store().await;
    let err = store.product_get_by_slug("nope").await.unwrap_err();
    assert_eq!(err.err_type, DBErrorType::NoRows);
  }

  #[tokio::test]
  async fn test_list_orders_by_sort_order_then_id() {
    let store = test_store().await;
    store.product_create(&Product { slug: "c".into(), sort_order: 1, ..red_shirt() }).await.unwrap();
    store.product_create(&Product { slug: "a".into(), sort_order: 0, ..red_shirt() }).await.unwrap();
    store.product_create(&Product { slug: "b".into(), sort_order: 0, ..red_shirt() }).await.unwrap();

    let slugs: Vec<String> =
      store.product_list().await.unwrap().into_iter().map(|p| p.slug).collect();
    assert_eq!(slugs, vec!["a", "b", "c"]);
  }

  #[tokio::test]
  async fn test_update_touches_only_patched_fields() {
    let store = test_store().await;
    store.product_create(&red_shirt()).await.unwrap();

    let patch = ProductPatch { price: Some(249), ..Default::default() };
    store.product_update("red-shirt", &patch).await.unwrap();

    let updated = store.product_get_by_slug("red-shirt").await.unwrap();
    assert_eq!(updated.price, 249);
    assert_eq!(updated.name, "Red Shirt");
    assert_eq!(updated.image_paths[0], "/product-images/1-red.png");
  }

  #[tokio::test]
  async fn test_update_empty_patch_changes_nothing() {
    let store = test_store().await;
    let id = store.product_create(&red_shirt()).await.unwrap();

    store.product_update("red-shirt", &ProductPatch::default()).await.unwrap();
    let after = store.product_get_by_slug("red-shirt").await.unwrap();
    assert_eq!(after, Product { id, ..red_shirt() });
  }

  #[tokio::test]
  async fn test_update_empty_image_string_keeps_stored_path() {
    let store = test_store().await;
    store.product_create(&red_shirt()).await.unwrap();

    let mut patch = ProductPatch::default();
    patch.image_paths[0] = Some("".into());
    patch.image_paths[1] = Some("https://cdn.example.com/side.png".into());
    store.product_update("red-shirt", &patch).await.unwrap();

    let updated = store.product_get_by_slug("red-shirt").await.unwrap();
    assert_eq!(updated.image_paths[0], "/product-images/1-red.png");
    assert_eq!(updated.image_paths[1], "https://cdn.example.com/side.png");
  }

  #[tokio::test]
  async fn test_update_missing_slug_is_no_rows() {
    let store = test_store().await;
    let patch = ProductPatch { price: Some(10), ..Default::default() };
    let err = store.product_update("nope", &patch).await.unwrap_err();
    assert_eq!(err.err_type, DBErrorType::NoRows);
  }

  #[tokio::test]
  async fn test_delete_removes_row() {
    let store = test_store().await;
    store.product_create(&red_shirt()).await.unwrap();

    store.product_delete("red-shirt").await.unwrap();
    let err = store.product_get_by_slug("red-shirt").await.unwrap_err();
    assert_eq!(err.err_type, DBErrorType::NoRows);

    let err = store.product_delete("red-shirt").await.unwrap_err();
    assert_eq!(err.err_type, DBErrorType::NoRows);
  }

  #[tokio::test]
  async fn test_sort_order_set_and_max() {
    let store = test_store().await;
    assert_eq!(store.product_max_sort_order().await.unwrap(), None);

    let id = store.product_create(&red_shirt()).await.unwrap();
    store
      .product_create(&Product { slug: "blue-shirt".into(), sort_order: 7, ..red_shirt() })
      .await
      .unwrap();
    assert_eq!(store.product_max_sort_order().await.unwrap(), Some(7));

    store.product_sort_order_set(id, 9).await.unwrap();
    assert_eq!(store.product_get_by_id(id).await.unwrap().sort_order, 9);
    assert_eq!(store.product_max_sort_order().await.unwrap(), Some(9));

    let err = store.product_sort_order_set(9999, 1).await.unwrap_err();
    assert_eq!(err.err_type, DBErrorType::NoRows);
  }
}
