use tracing::debug;

use crate::controller::helpers::db_err;
use crate::controller::Controller;
use crate::models::errors::AppError;
use crate::models::products::{Product, ProductPatch};

pub(super) async fn product_update(
  c: &Controller,
  slug: &str,
  patch: &ProductPatch,
) -> Result<Product, AppError> {
  let w = "storefront.controller.product_update";

  // An empty patch must not touch the row; it still has to answer NotFound
  // for an unknown slug, so it degenerates into a read.
  if patch.is_empty() {
    return c.store.product_get_by_slug(slug).await.map_err(|e| db_err(w, e));
  }

  c.store.product_update(slug, patch).await.map_err(|e| db_err(w, e))?;
  debug!(slug, "product updated");

  c.store.product_get_by_slug(slug).await.map_err(|e| db_err(w, e))
}
