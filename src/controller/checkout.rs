use tracing::info;

use crate::controller::Controller;
use crate::models::cart::CartModel;
use crate::models::checkout::{
  checkout_order_is_valid, compute_summary, CheckoutOrder, CheckoutSummary, ShippingMethod,
};
use crate::models::errors::AppError;

pub(super) fn checkout_summary(
  _c: &Controller,
  cart: &CartModel,
  shipping_method: &str,
) -> Result<CheckoutSummary, AppError> {
  let w = "storefront.controller.checkout_summary";

  let method = ShippingMethod::parse(shipping_method).ok_or_else(|| {
    AppError::validation(w, format!("unknown shipping method: {}", shipping_method))
  })?;

  Ok(compute_summary(cart, method))
}

/// Validates and prices an order submission. Orders are logged, not sent to
/// a payment gateway.
pub(super) fn checkout_submit(
  _c: &Controller,
  cart: &CartModel,
  order: &CheckoutOrder,
) -> Result<CheckoutSummary, AppError> {
  let method = checkout_order_is_valid(order)?;
  let summary = compute_summary(cart, method);

  info!(
    customer = %order.name,
    email = %order.email,
    shipping = method.as_str(),
    payment = %order.payment_method,
    total_items = cart.total_items(),
    grand_total = summary.grand_total,
    "order submitted"
  );

  Ok(summary)
}
