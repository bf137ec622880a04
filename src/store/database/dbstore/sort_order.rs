use sqlx::Row;

use crate::store::database::dbstore::ProductsStoreImpl;
use crate::store::database::errors::{handle_db_error, DBError, DBErrorType};

pub(super) async fn product_sort_order_set(
  s: &ProductsStoreImpl,
  id: i64,
  sort_order: i64,
) -> Result<(), DBError> {
  let path = "storefront.store.product_sort_order_set";

  let res = sqlx::query("UPDATE products SET sort_order = ? WHERE id = ?")
    .bind(sort_order)
    .bind(id)
    .execute(s.db.as_ref())
    .await
    .map_err(|e| handle_db_error(e, path))?;

  if res.rows_affected() == 0 {
    return Err(DBError::new(
      DBErrorType::NoRows,
      None,
      "the requested resource is not found",
      path,
      "",
    ));
  }

  Ok(())
}

pub(super) async fn product_max_sort_order(s: &ProductsStoreImpl) -> Result<Option<i64>, DBError> {
  let row = sqlx::query("SELECT MAX(sort_order) AS max_sort_order FROM products")
    .fetch_one(s.db.as_ref())
    .await
    .map_err(|e| handle_db_error(e, "storefront.store.product_max_sort_order"))?;

  Ok(row.try_get("max_sort_order").unwrap_or_default())
}
