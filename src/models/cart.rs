use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::models::errors::AppError;

/// Snapshot of a product taken at add-to-cart time. Merge identity is the
/// source product's `id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
  pub id: i64,
  pub name: String,
  pub price: i64,
  pub quantity: i64,
  pub image_url: Option<String>,
}

/// One user session's cart. Insertion-ordered for display, merged by product
/// id: at most one line per product, repeated adds accumulate quantity.
///
/// A cart has a single logical owner and is passed explicitly to whatever
/// handles user actions; it is never shared between sessions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CartModel {
  items: Vec<CartItem>,
}

impl CartModel {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn items(&self) -> &[CartItem] {
    &self.items
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  /// Adds an item, merging into the existing line when the product is
  /// already present. Quantities below 1 are clamped to 1.
  pub fn add(&mut self, item: CartItem) {
    let quantity = item.quantity.max(1);
    match self.items.iter_mut().find(|existing| existing.id == item.id) {
      Some(existing) => existing.quantity += quantity,
      None => self.items.push(CartItem { quantity, ..item }),
    }
  }

  /// Sets the quantity of an existing line, clamped to a minimum of 1.
  pub fn set_quantity(&mut self, id: i64, quantity: i64) -> Result<(), AppError> {
    match self.items.iter_mut().find(|item| item.id == id) {
      Some(item) => {
        item.quantity = quantity.max(1);
        Ok(())
      }
      None => Err(AppError::not_found(
        "storefront.models.cart.set_quantity",
        format!("product {} is not in the cart", id),
      )),
    }
  }

  /// Removes the line for `id`; absent ids are a no-op.
  pub fn remove(&mut self, id: i64) {
    self.items.retain(|item| item.id != id);
  }

  pub fn clear(&mut self) {
    self.items.clear();
  }

  /// Sum of `price * quantity` over all lines. Exact: prices are integer
  /// minor units.
  pub fn total_price(&self) -> i64 {
    self.items.iter().map(|item| item.price * item.quantity).sum()
  }

  /// Total number of units across all lines.
  pub fn total_items(&self) -> i64 {
    self.items.iter().map(|item| item.quantity).sum()
  }

  /// Writes the cart as JSON so a session can survive a reload. Cart
  /// contents never outlive the client session's own storage.
  pub fn persist(&self, path: &Path) -> Result<(), AppError> {
    let w = "storefront.models.cart.persist";
    let data = serde_json::to_vec(self)
      .map_err(|e| AppError::storage(w, "failed to serialize the cart", Box::new(e)))?;
    fs::write(path, data)
      .map_err(|e| AppError::storage(w, "failed to write the cart file", Box::new(e)))
  }

  /// Reads a previously persisted cart. A missing file is an empty cart.
  pub fn restore(path: &Path) -> Result<Self, AppError> {
    let w = "storefront.models.cart.restore";
    let data = match fs::read(path) {
      Ok(data) => data,
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::new()),
      Err(e) => return Err(AppError::storage(w, "failed to read the cart file", Box::new(e))),
    };
    serde_json::from_slice(&data)
      .map_err(|e| AppError::storage(w, "failed to parse the cart file", Box::new(e)))
  }
}

#[cfg(test)]
mod tests {
  use ulid::Ulid;

  use super::*;
  use crate::models::errors::ErrorKind;

  fn item(id: i64, price: i64, quantity: i64) -> CartItem {
    CartItem { id, name: format!("product-{}", id), price, quantity, image_url: None }
  }

  #[test]
  fn test_add_merges_by_id() {
    let mut cart = CartModel::new();
    cart.add(item(1, 199, 2));
    cart.add(item(1, 199, 3));
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.items()[0].quantity, 5);
    assert_eq!(cart.total_price(), 199 * 5);
  }

  #[test]
  fn test_add_keeps_insertion_order() {
    let mut cart = CartModel::new();
    cart.add(item(2, 50, 1));
    cart.add(item(1, 80, 1));
    cart.add(item(2, 50, 1));
    let ids: Vec<i64> = cart.items().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![2, 1]);
  }

  #[test]
  fn test_add_clamps_quantity_to_one() {
    let mut cart = CartModel::new();
    cart.add(item(1, 100, 0));
    assert_eq!(cart.items()[0].quantity, 1);
  }

  #[test]
  fn test_set_quantity_clamps_to_one() {
    let mut cart = CartModel::new();
    cart.add(item(1, 100, 4));
    cart.set_quantity(1, 0).unwrap();
    assert_eq!(cart.items()[0].quantity, 1);
    cart.set_quantity(1, -5).unwrap();
    assert_eq!(cart.items()[0].quantity, 1);
  }

  #[test]
  fn test_set_quantity_unknown_id_is_not_found() {
    let mut cart = CartModel::new();
    let err = cart.set_quantity(42, 3).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
  }

  #[test]
  fn test_remove_absent_id_is_noop() {
    let mut cart = CartModel::new();
    cart.add(item(1, 100, 1));
    cart.remove(99);
    assert_eq!(cart.len(), 1);
    cart.remove(1);
    assert!(cart.is_empty());
  }

  #[test]
  fn test_totals() {
    let mut cart = CartModel::new();
    assert_eq!(cart.total_price(), 0);
    assert_eq!(cart.total_items(), 0);
    cart.add(item(1, 199, 2));
    cart.add(item(2, 50, 3));
    assert_eq!(cart.total_price(), 199 * 2 + 50 * 3);
    assert_eq!(cart.total_items(), 5);
    cart.clear();
    assert_eq!(cart.total_price(), 0);
  }

  #[test]
  fn test_persist_restore_round_trip() {
    let mut cart = CartModel::new();
    cart.add(item(2, 50, 1));
    cart.add(item(1, 199, 4));

    let path = std::env::temp_dir().join(format!("cart-{}.json", Ulid::new()));
    cart.persist(&path).unwrap();
    let restored = CartModel::restore(&path).unwrap();
    let _ = fs::remove_file(&path);

    assert_eq!(restored, cart);
  }

  #[test]
  fn test_restore_missing_file_is_empty_cart() {
    let path = std::env::temp_dir().join(format!("cart-{}.json", Ulid::new()));
    let cart = CartModel::restore(&path).unwrap();
    assert!(cart.is_empty());
  }
}
