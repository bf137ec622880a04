use tracing::debug;

use crate::controller::helpers::db_err;
use crate::controller::Controller;
use crate::models::errors::AppError;

pub(super) async fn product_delete(c: &Controller, slug: &str) -> Result<(), AppError> {
  let w = "storefront.controller.product_delete";

  c.store.product_delete(slug).await.map_err(|e| db_err(w, e))?;
  debug!(slug, "product deleted");
  Ok(())
}
