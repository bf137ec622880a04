use crate::models::products::Product;
use crate::store::database::dbstore::ProductsStoreImpl;
use crate::store::database::errors::{handle_db_error, DBError};

pub(super) async fn product_create(s: &ProductsStoreImpl, pro: &Product) -> Result<i64, DBError> {
  let res = sqlx::query(
    r#"
        INSERT INTO products (
            name, description, price, sku, slug,
            image_path, image_path2, image_path3, image_path4, image_path5,
            publish_date, quantity, sort_order, created_at
        ) VALUES (
            ?, ?, ?, ?, ?,
            ?, ?, ?, ?, ?,
            ?, ?, ?, ?
        )
      "#,
  )
  .bind(&pro.name)
  .bind(&pro.description)
  .bind(pro.price)
  .bind(&pro.sku)
  .bind(&pro.slug)
  .bind(&pro.image_paths[0])
  .bind(&pro.image_paths[1])
  .bind(&pro.image_paths[2])
  .bind(&pro.image_paths[3])
  .bind(&pro.image_paths[4])
  .bind(&pro.publish_date)
  .bind(pro.quantity)
  .bind(pro.sort_order)
  .bind(pro.created_at)
  .execute(s.db.as_ref())
  .await
  .map_err(|e| handle_db_error(e, "storefront.store.product_create"))?;

  Ok(res.last_insert_rowid())
}
