use crate::models::products::Product;
use crate::store::database::dbstore::{product_from_row, ProductsStoreImpl};
use crate::store::database::errors::{handle_db_error, DBError};

const SELECT_COLUMNS: &str = r#"
      SELECT
        id, name, description, price, sku, slug,
        image_path, image_path2, image_path3, image_path4, image_path5,
        publish_date, quantity, sort_order, created_at
      FROM products
"#;

pub(super) async fn product_get_by_slug(
  s: &ProductsStoreImpl,
  slug: &str,
) -> Result<Product, DBError> {
  let sql = format!("{} WHERE slug = ?", SELECT_COLUMNS);
  let row = sqlx::query(&sql)
    .bind(slug)
    .fetch_one(s.db.as_ref())
    .await
    .map_err(|e| handle_db_error(e, "storefront.store.product_get_by_slug"))?;

  Ok(product_from_row(&row))
}

pub(super) async fn product_get_by_id(s: &ProductsStoreImpl, id: i64) -> Result<Product, DBError> {
  let sql = format!("{} WHERE id = ?", SELECT_COLUMNS);
  let row = sqlx::query(&sql)
    .bind(id)
    .fetch_one(s.db.as_ref())
    .await
    .map_err(|e| handle_db_error(e, "storefront.store.product_get_by_id"))?;

  Ok(product_from_row(&row))
}
