use crate::models::errors::AppError;
use crate::store::database::errors::{DBError, DBErrorType};

/// Maps a storage failure onto the caller-facing taxonomy: missing rows are
/// `NotFound`, unique violations `Conflict`, everything else `Storage`.
pub(super) fn db_err(path: &str, err: DBError) -> AppError {
  match err.err_type {
    DBErrorType::NoRows => AppError::not_found(path, err.msg.clone()).wrap(Box::new(err)),
    DBErrorType::UniqueViolation => AppError::conflict(path, err.msg.clone()).wrap(Box::new(err)),
    _ => AppError::storage(path, "storage operation failed", Box::new(err)),
  }
}
