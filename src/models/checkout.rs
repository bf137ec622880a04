use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{cart::CartModel, errors::AppError};

pub const SHIPPING_COST_STANDARD: i64 = 49;
pub const SHIPPING_COST_EXPRESS: i64 = 99;

pub const PAYMENT_METHODS: [&str; 2] = ["card", "invoice"];

/// Shipping options with their fixed costs. The cost table is static and
/// does not depend on weight or destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMethod {
  Standard,
  Express,
}

impl ShippingMethod {
  pub fn parse(s: &str) -> Option<ShippingMethod> {
    match s {
      "standard" => Some(ShippingMethod::Standard),
      "express" => Some(ShippingMethod::Express),
      _ => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      ShippingMethod::Standard => "standard",
      ShippingMethod::Express => "express",
    }
  }

  pub fn cost(&self) -> i64 {
    match self {
      ShippingMethod::Standard => SHIPPING_COST_STANDARD,
      ShippingMethod::Express => SHIPPING_COST_EXPRESS,
    }
  }
}

/// Priced checkout summary: cart contents plus the selected shipping method.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CheckoutSummary {
  pub items_total: i64,
  pub shipping_cost: i64,
  pub grand_total: i64,
}

pub fn compute_summary(cart: &CartModel, method: ShippingMethod) -> CheckoutSummary {
  let items_total = cart.total_price();
  let shipping_cost = method.cost();
  CheckoutSummary { items_total, shipping_cost, grand_total: items_total + shipping_cost }
}

/// Customer details captured by the checkout form.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CheckoutOrder {
  pub name: String,
  pub email: String,
  pub address: String,
  pub phone: String,
  pub shipping_method: String,
  pub payment_method: String,
}

/// Validates an order submission and resolves its shipping method.
pub fn checkout_order_is_valid(order: &CheckoutOrder) -> Result<ShippingMethod, AppError> {
  let w = "storefront.models.checkout_order_is_valid";
  let mut errors: HashMap<String, String> = HashMap::new();

  for (field, value) in [
    ("name", &order.name),
    ("email", &order.email),
    ("address", &order.address),
    ("phone", &order.phone),
  ] {
    if value.trim().is_empty() {
      errors.insert(field.into(), "required".into());
    }
  }
  if !PAYMENT_METHODS.contains(&order.payment_method.as_str()) {
    errors.insert("payment_method".into(), "checkout.payment_method.unknown".into());
  }

  let method = ShippingMethod::parse(&order.shipping_method);
  if method.is_none() {
    errors.insert("shipping_method".into(), "checkout.shipping_method.unknown".into());
  }

  if !errors.is_empty() {
    return Err(AppError::fields(w, errors));
  }
  method.ok_or_else(|| AppError::validation(w, "unknown shipping method"))
}
