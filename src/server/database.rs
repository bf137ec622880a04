use std::str::FromStr;
use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::models::errors::{BoxedErr, InternalError};
use crate::server::main::Server;
use crate::store::database::dbstore::init_schema;

impl Server {
  pub(super) async fn init_database(&mut self) -> Result<(), InternalError> {
    let mk_err = |msg: &str, err: BoxedErr| InternalError {
      temp: false,
      err,
      msg: msg.into(),
      path: "storefront.server.init_database".into(),
    };

    let cfg = self.config.service.clone();
    let options = SqliteConnectOptions::from_str(&cfg.database_url)
      .map_err(|e| mk_err("invalid database url", Box::new(e)))?
      .create_if_missing(true);

    // An in-memory database exists per connection, so those pools are
    // pinned to a single connection.
    let max_conns =
      if cfg.database_url.contains(":memory:") { 1 } else { cfg.database_max_conns };

    let db = SqlitePoolOptions::new()
      .max_connections(max_conns)
      .connect_with(options)
      .await
      .map_err(|e| mk_err("failed to connect to database", Box::new(e)))?;

    init_schema(&db).await.map_err(|e| mk_err("failed to create the schema", Box::new(e)))?;

    self.db = Some(Arc::new(db));

    Ok(())
  }
}
