use crate::store::database::dbstore::ProductsStoreImpl;
use crate::store::database::errors::{handle_db_error, DBError, DBErrorType};

pub(super) async fn product_delete(s: &ProductsStoreImpl, slug: &str) -> Result<(), DBError> {
  let path = "storefront.store.product_delete";

  let res = sqlx::query("DELETE FROM products WHERE slug = ?")
    .bind(slug)
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
