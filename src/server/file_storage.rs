use std::path::PathBuf;

use thiserror::Error;
use tokio::fs;
use ulid::Ulid;

use crate::models::config::StorageConfig;
use crate::utils::time::time_get_millis;

#[derive(Debug, Error)]
pub enum FileStorageError {
  #[error("invalid storage path: {path}")]
  InvalidPath { path: String },
  #[error("io failure on {path}")]
  Io {
    path: String,
    #[source]
    source: std::io::Error,
  },
}

/// Local-disk blob store for uploaded product images. Files land in the
/// configured upload directory; callers get back the relative path that is
/// stored on the product and later resolved to a public URL.
#[derive(Clone, Debug)]
pub struct FileStorage {
  root: PathBuf,
  prefix: String,
}

impl FileStorage {
  pub fn new(cfg: &StorageConfig) -> Self {
    Self {
      root: PathBuf::from(&cfg.upload_dir),
      prefix: format!("/{}", cfg.upload_dir.trim_matches('/')),
    }
  }

  /// Writes `data` under a collision-free name derived from
  /// `suggested_name` and returns the relative path to store.
  pub async fn save(&self, data: &[u8], suggested_name: &str) -> Result<String, FileStorageError> {
    let io_err = |path: &PathBuf, source| FileStorageError::Io {
      path: path.to_string_lossy().into_owned(),
      source,
    };

    fs::create_dir_all(&self.root).await.map_err(|e| io_err(&self.root, e))?;

    let file_name =
      format!("{}-{}-{}", time_get_millis(), Ulid::new(), sanitize_name(suggested_name));
    let target = self.root.join(&file_name);
    fs::write(&target, data).await.map_err(|e| io_err(&target, e))?;

    Ok(format!("{}/{}", self.prefix, file_name))
  }

  pub async fn delete(&self, relative_path: &str) -> Result<(), FileStorageError> {
    let target = self.file_path(relative_path)?;
    fs::remove_file(&target).await.map_err(|e| FileStorageError::Io {
      path: target.to_string_lossy().into_owned(),
      source: e,
    })
  }

  pub async fn exists(&self, relative_path: &str) -> bool {
    match self.file_path(relative_path) {
      Ok(target) => fs::try_exists(&target).await.unwrap_or(false),
      Err(_) => false,
    }
  }

  // Accepts only paths this store handed out: our prefix plus a bare
  // file name, no traversal.
  fn file_path(&self, relative_path: &str) -> Result<PathBuf, FileStorageError> {
    let invalid = || FileStorageError::InvalidPath { path: relative_path.to_string() };

    let name = relative_path
      .strip_prefix(&self.prefix)
      .and_then(|rest| rest.strip_prefix('/'))
      .ok_or_else(invalid)?;
    if name.is_empty() || name.contains('/') || name.contains("..") {
      return Err(invalid());
    }

    Ok(self.root.join(name))
  }
}

// Keeps letters, digits, dots, hyphens and underscores from the original
// upload name; anything else becomes a hyphen.
fn sanitize_name(name: &str) -> String {
  let mut cleaned: String = name
    .chars()
    .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') { c } else { '-' })
    .collect();
  while cleaned.contains("..") {
    cleaned = cleaned.replace("..", ".");
  }
  let cleaned = cleaned.trim_matches(|c| c == '-' || c == '.').to_string();
  if cleaned.is_empty() { "upload".to_string() } else { cleaned }
}
