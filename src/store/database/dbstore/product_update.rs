use crate::models::products::ProductPatch;
use crate::store::database::dbstore::ProductsStoreImpl;
use crate::store::database::errors::{handle_db_error, DBError, DBErrorType};

// COALESCE keeps the stored value for fields absent from the patch; image
// slots use the empty-string sentinel instead, so an empty value can never
// clear a stored path.
pub(super) async fn product_update(
  s: &ProductsStoreImpl,
  slug: &str,
  patch: &ProductPatch,
) -> Result<(), DBError> {
  let path = "storefront.store.product_update";
  let image = |i: usize| patch.image_paths[i].clone().unwrap_or_default();

  let res = sqlx::query(
    r#"
      UPDATE products
      SET name        = COALESCE(?1, name),
          description = COALESCE(?2, description),
          price       = COALESCE(?3, price),
          sku         = COALESCE(?4, sku),

          image_path  = CASE WHEN ?5 != '' THEN ?5 ELSE image_path  END,
          image_path2 = CASE WHEN ?6 != '' THEN ?6 ELSE image_path2 END,
          image_path3 = CASE WHEN ?7 != '' THEN ?7 ELSE image_path3 END,
          image_path4 = CASE WHEN ?8 != '' THEN ?8 ELSE image_path4 END,
          image_path5 = CASE WHEN ?9 != '' THEN ?9 ELSE image_path5 END,

          publish_date = COALESCE(?10, publish_date),
          quantity     = COALESCE(?11, quantity),
          sort_order   = COALESCE(?12, sort_order)

      WHERE slug = ?13
    "#,
  )
  .bind(patch.name.as_deref())
  .bind(patch.description.as_deref())
  .bind(patch.price)
  .bind(patch.sku.as_deref())
  .bind(image(0))
  .bind(image(1))
  .bind(image(2))
  .bind(image(3))
  .bind(image(4))
  .bind(patch.publish_date.as_deref())
  .bind(patch.quantity)
  .bind(patch.sort_order)
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
