use crate::controller::helpers::db_err;
use crate::controller::Controller;
use crate::models::errors::AppError;
use crate::models::products::Product;
use crate::models::search::filter_by_name;

pub(super) async fn product_list(
  c: &Controller,
  term: Option<&str>,
) -> Result<Vec<Product>, AppError> {
  let w = "storefront.controller.product_list";

  let products = c.store.product_list().await.map_err(|e| db_err(w, e))?;
  Ok(filter_by_name(products, term.unwrap_or_default()))
}
