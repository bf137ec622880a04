use crate::models::{errors::AppError, products::Product};

/// Moves the element at `from` to position `to` and reassigns every
/// product's `sort_order` to its 0-based position in the resulting list.
///
/// Full reassignment keeps the sort keys dense and makes each persisted
/// write an idempotent absolute value; catalog sizes here never justify
/// fractional-key insertion. `from == to` returns the list untouched.
pub fn move_item(mut products: Vec<Product>, from: usize, to: usize) -> Result<Vec<Product>, AppError> {
  let w = "storefront.models.ordering.move_item";
  let len = products.len();
  if from >= len || to >= len {
    return Err(AppError::validation(
      w,
      format!("index out of bounds: from {}, to {}, len {}", from, to, len),
    ));
  }
  if from == to {
    return Ok(products);
  }

  let item = products.remove(from);
  products.insert(to, item);
  for (position, product) in products.iter_mut().enumerate() {
    product.sort_order = position as i64;
  }

  Ok(products)
}

/// Result of persisting one moved row's new sort key.
#[derive(Debug)]
pub struct ReorderItemResult {
  pub id: i64,
  pub slug: String,
  pub sort_order: i64,
  pub error: Option<AppError>,
}

/// Reordered list plus the per-item persistence results. The local order is
/// applied even when some writes failed; the caller decides whether to retry
/// the failures.
#[derive(Debug)]
pub struct ReorderOutcome {
  pub products: Vec<Product>,
  pub results: Vec<ReorderItemResult>,
}

impl ReorderOutcome {
  pub fn failures(&self) -> Vec<&ReorderItemResult> {
    self.results.iter().filter(|r| r.error.is_some()).collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::errors::ErrorKind;

  fn product(id: i64, name: &str, sort_order: i64) -> Product {
    Product {
      id,
      name: name.into(),
      description: "".into(),
      price: 100,
      sku: "".into(),
      slug: name.to_lowercase(),
      image_paths: Default::default(),
      publish_date: "".into(),
      quantity: 1,
      sort_order,
      created_at: 0,
    }
  }

  fn catalog() -> Vec<Product> {
    vec![product(1, "A", 0), product(2, "B", 1), product(3, "C", 2), product(4, "D", 3)]
  }

  #[test]
  fn test_move_first_to_third() {
    let moved = move_item(catalog(), 0, 2).unwrap();
    let names: Vec<&str> = moved.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["B", "C", "A", "D"]);
    let orders: Vec<i64> = moved.iter().map(|p| p.sort_order).collect();
    assert_eq!(orders, vec![0, 1, 2, 3]);
  }

  #[test]
  fn test_move_last_to_front() {
    let moved = move_item(catalog(), 3, 0).unwrap();
    let names: Vec<&str> = moved.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["D", "A", "B", "C"]);
  }

  #[test]
  fn test_same_index_is_noop() {
    let mut list = catalog();
    list[2].sort_order = 17; // sparse keys stay untouched on a no-op
    let moved = move_item(list.clone(), 2, 2).unwrap();
    assert_eq!(moved, list);
  }

  #[test]
  fn test_out_of_bounds_fails_validation() {
    let err = move_item(catalog(), 4, 0).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    let err = move_item(catalog(), 0, 9).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
  }

  #[test]
  fn test_empty_list_rejects_any_index() {
    let err = move_item(Vec::new(), 0, 0).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
  }
}
