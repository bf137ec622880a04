use crate::models::products::Product;
use crate::store::database::dbstore::{product_from_row, ProductsStoreImpl};
use crate::store::database::errors::{handle_db_error, DBError};

pub(super) async fn product_list(s: &ProductsStoreImpl) -> Result<Vec<Product>, DBError> {
  let rows = sqlx::query(
    r#"
      SELECT
        id, name, description, price, sku, slug,
        image_path, image_path2, image_path3, image_path4, image_path5,
        publish_date, quantity, sort_order, created_at
      FROM products
      ORDER BY sort_order, id
  "#,
  )
  .fetch_all(s.db.as_ref())
  .await
  .map_err(|e| handle_db_error(e, "storefront.store.product_list"))?;

  Ok(rows.iter().map(product_from_row).collect())
}
