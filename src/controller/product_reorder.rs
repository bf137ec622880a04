use std::collections::HashMap;

use tracing::warn;

use crate::controller::helpers::db_err;
use crate::controller::Controller;
use crate::models::errors::AppError;
use crate::models::ordering::{move_item, ReorderItemResult, ReorderOutcome};

/// Moves one catalog entry and persists the recomputed sort keys, one
/// idempotent absolute write per changed row. A failed write does not roll
/// back the others; it lands in the outcome for the caller to retry.
pub(super) async fn product_reorder(
  c: &Controller,
  from: usize,
  to: usize,
) -> Result<ReorderOutcome, AppError> {
  let w = "storefront.controller.product_reorder";

  let products = c.store.product_list().await.map_err(|e| db_err(w, e))?;
  let stored: HashMap<i64, i64> = products.iter().map(|p| (p.id, p.sort_order)).collect();

  let moved = move_item(products, from, to)?;

  let mut results = Vec::new();
  for product in &moved {
    if stored.get(&product.id) == Some(&product.sort_order) {
      continue;
    }

    let error = c
      .store
      .product_sort_order_set(product.id, product.sort_order)
      .await
      .err()
      .map(|e| db_err(w, e));
    if let Some(ref err) = error {
      warn!(id = product.id, slug = %product.slug, %err, "sort order write failed");
    }

    results.push(ReorderItemResult {
      id: product.id,
      slug: product.slug.clone(),
      sort_order: product.sort_order,
      error,
    });
  }

  Ok(ReorderOutcome { products: moved, results })
}
