mod cart;
mod checkout;
mod helpers;
mod product_create;
mod product_delete;
mod product_details;
mod product_list;
mod product_reorder;
mod product_update;

use std::sync::Arc;

use crate::models::cart::CartModel;
use crate::models::checkout::{CheckoutOrder, CheckoutSummary};
use crate::models::config::Config;
use crate::models::errors::AppError;
use crate::models::ordering::ReorderOutcome;
use crate::models::products::{Product, ProductInput, ProductPatch};
use crate::server::file_storage::FileStorage;
use crate::store::database::ProductsStore;

/// Operations layer over the product store, image storage and the cart and
/// checkout models. Carts are owned by the caller (one per user session) and
/// passed in explicitly.
#[derive(Debug)]
pub struct Controller {
  pub(crate) store: Arc<dyn ProductsStore>,
  pub(crate) storage: FileStorage,
  pub(crate) config: Config,
}

#[derive(Debug)]
pub struct ControllerArgs {
  pub store: Arc<dyn ProductsStore>,
  pub storage: FileStorage,
  pub config: Config,
}

impl Controller {
  pub fn new(args: ControllerArgs) -> Controller {
    Controller { store: args.store, storage: args.storage, config: args.config }
  }

  pub async fn product_create(&self, input: ProductInput) -> Result<Product, AppError> {
    product_create::product_create(self, input).await
  }

  pub async fn product_details(&self, slug: &str) -> Result<Product, AppError> {
    product_details::product_details(self, slug).await
  }

  /// Catalog in display order, optionally narrowed by a search term.
  pub async fn product_list(&self, term: Option<&str>) -> Result<Vec<Product>, AppError> {
    product_list::product_list(self, term).await
  }

  pub async fn product_update(
    &self,
    slug: &str,
    patch: &ProductPatch,
  ) -> Result<Product, AppError> {
    product_update::product_update(self, slug, patch).await
  }

  pub async fn product_delete(&self, slug: &str) -> Result<(), AppError> {
    product_delete::product_delete(self, slug).await
  }

  pub async fn product_reorder(&self, from: usize, to: usize) -> Result<ReorderOutcome, AppError> {
    product_reorder::product_reorder(self, from, to).await
  }

  pub async fn cart_add(
    &self,
    cart: &mut CartModel,
    slug: &str,
    quantity: i64,
  ) -> Result<(), AppError> {
    cart::cart_add(self, cart, slug, quantity).await
  }

  pub fn checkout_summary(
    &self,
    cart: &CartModel,
    shipping_method: &str,
  ) -> Result<CheckoutSummary, AppError> {
    checkout::checkout_summary(self, cart, shipping_method)
  }

  pub fn checkout_submit(
    &self,
    cart: &CartModel,
    order: &CheckoutOrder,
  ) -> Result<CheckoutSummary, AppError> {
    checkout::checkout_submit(self, cart, order)
  }
}
