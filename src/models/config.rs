use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
  pub service: ServiceConfig,
  pub storage: StorageConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ServiceConfig {
  pub env: String,
  pub database_url: String,
  pub database_max_conns: u32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct StorageConfig {
  /// Directory (relative to the working dir) that uploaded images land in.
  pub upload_dir: String,
  /// Base URL prepended to relative image paths when resolving display URLs.
  pub public_base_url: String,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      service: ServiceConfig {
        env: "".to_string(),
        database_url: "sqlite::memory:".to_string(),
        database_max_conns: 5,
      },
      storage: StorageConfig {
        upload_dir: "product-images".to_string(),
        public_base_url: "http://localhost:3000".to_string(),
      },
    }
  }
}
