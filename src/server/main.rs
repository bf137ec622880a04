use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use sqlx::SqlitePool;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::controller::{Controller, ControllerArgs};
use crate::models::config::Config;
use crate::models::errors::InternalError;
use crate::server::file_storage::FileStorage;
use crate::store::database::dbstore::{ProductsStoreImpl, ProductsStoreImplArgs};

/// Process assembly: loads the service config, opens the database and hands
/// out controllers for whatever transport the embedding application wires
/// up.
#[derive(Debug)]
pub struct Server {
  pub(crate) config: Config,
  pub(crate) db: Option<Arc<SqlitePool>>,
}

#[derive(Debug)]
pub struct ServerArgs {
  /// Path to the YAML service config; `config.yaml` in the working
  /// directory when absent.
  pub config_path: Option<PathBuf>,
}

impl Server {
  pub async fn new(args: ServerArgs) -> Result<Self, Box<dyn Error>> {
    let mut server = Self { config: Config::default(), db: None };

    let path = args.config_path.unwrap_or_else(|| PathBuf::from("config.yaml"));
    server.init_service_config(&path)?;
    server.init_database().await?;

    Ok(server)
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn controller(&self) -> Result<Controller, Box<dyn Error>> {
    let db = match &self.db {
      Some(db) => db.clone(),
      None => {
        return Err(Box::new(InternalError {
          temp: false,
          err: "init_database did not run".into(),
          msg: "database is not initialized".into(),
          path: "storefront.server.controller".into(),
        }));
      }
    };

    let store = Arc::new(ProductsStoreImpl::new(ProductsStoreImplArgs { db }));
    let storage = FileStorage::new(&self.config.storage);

    Ok(Controller::new(ControllerArgs { store, storage, config: self.config.clone() }))
  }
}

/// Installs the global fmt subscriber. Embedding applications call this once
/// at startup; repeated calls are ignored.
pub fn logging_init(level: Level) {
  let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
  let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
  use ulid::Ulid;

  use super::*;
  use crate::models::products::ProductInput;

  #[tokio::test]
  async fn test_server_assembles_from_yaml_config() {
    let upload_dir = std::env::temp_dir().join(format!("storefront-server-{}", Ulid::new()));
    let yaml = format!(
      r#"
service:
  env: test
  database_url: "sqlite::memory:"
  database_max_conns: 5
storage:
  upload_dir: "{}"
  public_base_url: "http://localhost:3000"
"#,
      upload_dir.to_string_lossy()
    );
    let config_path = std::env::temp_dir().join(format!("storefront-config-{}.yaml", Ulid::new()));
    std::fs::write(&config_path, yaml).unwrap();

    let server = Server::new(ServerArgs { config_path: Some(config_path.clone()) }).await.unwrap();
    assert_eq!(server.config().service.env, "test");

    let controller = server.controller().unwrap();
    let input = ProductInput { name: "Red Shirt".into(), price: 199, ..Default::default() };
    let created = controller.product_create(input).await.unwrap();
    assert_eq!(created.slug, "red-shirt");

    let _ = std::fs::remove_file(&config_path);
  }

  #[tokio::test]
  async fn test_server_fails_on_missing_config() {
    let missing = std::env::temp_dir().join(format!("no-such-{}.yaml", Ulid::new()));
    let err = Server::new(ServerArgs { config_path: Some(missing) }).await.unwrap_err();
    assert!(err.to_string().contains("failed to load service config file"));
  }
}
