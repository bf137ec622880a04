use crate::models::products::Product;

/// Case-insensitive substring filter on product name. An empty term returns
/// the input unchanged; original order is preserved either way.
pub fn filter_by_name(products: Vec<Product>, term: &str) -> Vec<Product> {
  if term.is_empty() {
    return products;
  }
  let needle = term.to_lowercase();
  products.into_iter().filter(|p| p.name.to_lowercase().contains(&needle)).collect()
}
