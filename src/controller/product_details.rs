use crate::controller::helpers::db_err;
use crate::controller::Controller;
use crate::models::errors::AppError;
use crate::models::products::Product;

pub(super) async fn product_details(c: &Controller, slug: &str) -> Result<Product, AppError> {
  let w = "storefront.controller.product_details";
  c.store.product_get_by_slug(slug).await.map_err(|e| db_err(w, e))
}
