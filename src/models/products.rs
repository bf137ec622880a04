use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{config::StorageConfig, errors::AppError};

/// Number of image slots a product carries (`image_path` .. `image_path5`).
pub const PRODUCT_IMAGE_SLOTS: usize = 5;

pub const PRODUCT_DEFAULT_QUANTITY: i64 = 1;

/// Catalog product. `id` is the internal identity, `slug` the external key
/// used by lookups, updates and deletes. `sort_order` positions the product
/// in catalog display order, ties broken by `id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
  pub id: i64,
  pub name: String,
  pub description: String,
  pub price: i64,
  pub sku: String,
  pub slug: String,
  pub image_paths: [String; PRODUCT_IMAGE_SLOTS],
  pub publish_date: String,
  pub quantity: i64,
  pub sort_order: i64,
  pub created_at: i64,
}

impl Product {
  /// Resolves each image slot to a display URL. Relative upload paths get
  /// the configured public base prepended, absolute http(s) URLs pass
  /// through, empty slots resolve to `None`.
  pub fn image_urls(&self, cfg: &StorageConfig) -> [Option<String>; PRODUCT_IMAGE_SLOTS] {
    let prefix = format!("/{}", cfg.upload_dir.trim_matches('/'));
    self.image_paths.each_ref().map(|path| {
      if path.starts_with(&prefix) {
        Some(format!("{}{}", cfg.public_base_url, path))
      } else if path.starts_with("http") {
        Some(path.clone())
      } else {
        None
      }
    })
  }

  pub fn primary_image_url(&self, cfg: &StorageConfig) -> Option<String> {
    self.image_urls(cfg).into_iter().flatten().next()
  }
}

/// Image source for a new product: an uploaded file or an external URL,
/// never both.
#[derive(Clone, Debug, PartialEq)]
pub enum ImageSource {
  Upload { file_name: String, data: Vec<u8> },
  External(String),
}

/// Admin "new product" submission.
#[derive(Clone, Debug, Default)]
pub struct ProductInput {
  pub name: String,
  pub description: String,
  pub price: i64,
  pub sku: String,
  /// Caller-supplied slug; generated from `name` when absent.
  pub slug: Option<String>,
  pub publish_date: String,
  pub quantity: Option<i64>,
  pub image: Option<ImageSource>,
}

/// Partial update. `None` leaves the stored value untouched. Image slots
/// additionally treat `Some("")` as "no change": an empty string is not a
/// value and never clears a stored path.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProductPatch {
  pub name: Option<String>,
  pub description: Option<String>,
  pub price: Option<i64>,
  pub sku: Option<String>,
  pub image_paths: [Option<String>; PRODUCT_IMAGE_SLOTS],
  pub publish_date: Option<String>,
  pub quantity: Option<i64>,
  pub sort_order: Option<i64>,
}

impl ProductPatch {
  pub fn is_empty(&self) -> bool {
    self.name.is_none()
      && self.description.is_none()
      && self.price.is_none()
      && self.sku.is_none()
      && self.image_paths.iter().all(|p| p.is_none())
      && self.publish_date.is_none()
      && self.quantity.is_none()
      && self.sort_order.is_none()
  }
}

pub fn product_input_is_valid(input: &ProductInput) -> Result<(), AppError> {
  let mut errors: HashMap<String, String> = HashMap::new();

  if input.name.trim().is_empty() {
    errors.insert("name".into(), "required".into());
  }
  if input.price < 0 {
    errors.insert("price".into(), "products.price.negative".into());
  }
  if let Some(quantity) = input.quantity {
    if quantity < 0 {
      errors.insert("quantity".into(), "products.quantity.negative".into());
    }
  }
  if let Some(ImageSource::External(url)) = &input.image {
    if !url.trim().is_empty() && !url.trim().starts_with("http") {
      errors.insert("image".into(), "products.image.invalid_url".into());
    }
  }

  if !errors.is_empty() {
    return Err(AppError::fields("storefront.models.product_input_is_valid", errors));
  }
  Ok(())
}
