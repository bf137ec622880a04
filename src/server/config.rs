use std::fs;
use std::path::Path;

use crate::models::{config::Config, errors::InternalError};
use crate::server::main::Server;

impl Server {
  pub(super) fn init_service_config(&mut self, path: &Path) -> Result<(), InternalError> {
    let yaml_string = fs::read_to_string(path).map_err(|err| InternalError {
      temp: false,
      err: Box::new(err),
      msg: "failed to load service config file".into(),
      path: "storefront.server.init_service_config".into(),
    })?;

    let parsed_config: Config = serde_yaml::from_str(&yaml_string).map_err(|err| InternalError {
      temp: false,
      err: Box::new(err),
      msg: "failed to parse config data".into(),
      path: "storefront.server.init_service_config".into(),
    })?;

    self.config = parsed_config;
    Ok(())
  }
}
