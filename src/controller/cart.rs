use crate::controller::helpers::db_err;
use crate::controller::Controller;
use crate::models::cart::{CartItem, CartModel};
use crate::models::errors::AppError;

/// Snapshots the product behind `slug` into the cart, merging into an
/// existing line when the product is already there.
pub(super) async fn cart_add(
  c: &Controller,
  cart: &mut CartModel,
  slug: &str,
  quantity: i64,
) -> Result<(), AppError> {
  let w = "storefront.controller.cart_add";

  let product = c.store.product_get_by_slug(slug).await.map_err(|e| db_err(w, e))?;
  cart.add(CartItem {
    id: product.id,
    name: product.name.clone(),
    price: product.price,
    quantity,
    image_url: product.primary_image_url(&c.config.storage),
  });

  Ok(())
}
