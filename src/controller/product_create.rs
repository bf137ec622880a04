use tracing::debug;

use crate::controller::helpers::db_err;
use crate::controller::Controller;
use crate::models::errors::AppError;
use crate::models::products::{
  product_input_is_valid, ImageSource, Product, ProductInput, PRODUCT_DEFAULT_QUANTITY,
  PRODUCT_IMAGE_SLOTS,
};
use crate::store::database::errors::DBErrorType;
use crate::utils::slug::Slug;
use crate::utils::time::time_get_millis;

pub(super) async fn product_create(
  c: &Controller,
  input: ProductInput,
) -> Result<Product, AppError> {
  let w = "storefront.controller.product_create";

  product_input_is_valid(&input)?;

  let slug = match input.slug.as_deref() {
    Some(slug) if !slug.trim().is_empty() => slug.trim().to_string(),
    _ => Slug::default().generate_slug(&input.name),
  };
  if slug.is_empty() {
    return Err(AppError::validation(w, "name does not resolve to a usable slug"));
  }

  // Collisions are rejected up front rather than left to the UNIQUE
  // constraint, so the caller sees a conflict and not an opaque write error.
  match c.store.product_get_by_slug(&slug).await {
    Ok(_) => {
      return Err(AppError::conflict(w, format!("slug {} already exists", slug)));
    }
    Err(err) if err.err_type == DBErrorType::NoRows => {}
    Err(err) => return Err(db_err(w, err)),
  }

  let image_path = match &input.image {
    Some(ImageSource::Upload { file_name, data }) => c
      .storage
      .save(data, file_name)
      .await
      .map_err(|e| AppError::storage(w, "failed to store the uploaded image", Box::new(e)))?,
    Some(ImageSource::External(url)) => url.trim().to_string(),
    None => String::new(),
  };

  let sort_order = match c.store.product_max_sort_order().await {
    Ok(max) => max.map_or(0, |m| m + 1),
    Err(err) => return Err(db_err(w, err)),
  };

  let mut image_paths: [String; PRODUCT_IMAGE_SLOTS] = Default::default();
  image_paths[0] = image_path;

  let product = Product {
    id: 0,
    name: input.name.trim().to_string(),
    description: input.description,
    price: input.price,
    sku: input.sku,
    slug,
    image_paths,
    publish_date: input.publish_date,
    quantity: input.quantity.unwrap_or(PRODUCT_DEFAULT_QUANTITY),
    sort_order,
    created_at: time_get_millis(),
  };

  let id = c.store.product_create(&product).await.map_err(|e| db_err(w, e))?;
  debug!(id, slug = %product.slug, "product created");

  c.store.product_get_by_id(id).await.map_err(|e| db_err(w, e))
}
