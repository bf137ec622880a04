use std::{collections::HashMap, error::Error, fmt};

use derive_more::Display;

pub type BoxedErr = Box<dyn Error + Send + Sync>;

const MAX_ERROR_LENGTH: usize = 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
  Validation,
  NotFound,
  Conflict,
  Storage,
}

impl ErrorKind {
  /// Stable machine-readable id, safe to match on across releases.
  pub fn as_str(&self) -> &'static str {
    match self {
      ErrorKind::Validation => "validation_error",
      ErrorKind::NotFound => "not_found",
      ErrorKind::Conflict => "conflict",
      ErrorKind::Storage => "storage_error",
    }
  }
}

impl fmt::Display for ErrorKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Operation-level error surfaced to callers of the controller and models.
///
/// `path` is the dotted location of the failure site, `field_errors` carries
/// per-field validation ids keyed by field name.
#[derive(Debug)]
pub struct AppError {
  pub kind: ErrorKind,
  pub msg: String,
  pub path: String,
  pub field_errors: HashMap<String, String>,
  pub wrapped: Option<BoxedErr>,
}

impl AppError {
  pub fn new(
    kind: ErrorKind,
    path: impl Into<String>,
    msg: impl Into<String>,
    wrapped: Option<BoxedErr>,
  ) -> Self {
    Self { kind, msg: msg.into(), path: path.into(), field_errors: HashMap::new(), wrapped }
  }

  pub fn validation(path: impl Into<String>, msg: impl Into<String>) -> Self {
    Self::new(ErrorKind::Validation, path, msg, None)
  }

  pub fn fields(path: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
    let mut err = Self::new(ErrorKind::Validation, path, "one or more fields are invalid", None);
    err.field_errors = field_errors;
    err
  }

  pub fn not_found(path: impl Into<String>, msg: impl Into<String>) -> Self {
    Self::new(ErrorKind::NotFound, path, msg, None)
  }

  pub fn conflict(path: impl Into<String>, msg: impl Into<String>) -> Self {
    Self::new(ErrorKind::Conflict, path, msg, None)
  }

  pub fn storage(path: impl Into<String>, msg: impl Into<String>, err: BoxedErr) -> Self {
    Self::new(ErrorKind::Storage, path, msg, Some(err))
  }

  pub fn wrap(mut self, err: BoxedErr) -> Self {
    self.wrapped = Some(err);
    self
  }

  pub fn error_string(&self) -> String {
    let mut s = String::new();

    if !self.path.is_empty() {
      s.push_str(&self.path);
      s.push_str(": ");
    }

    s.push_str(self.kind.as_str());
    s.push_str(", ");
    s.push_str(&self.msg);

    if !self.field_errors.is_empty() {
      let mut fields: Vec<&str> = self.field_errors.keys().map(|k| k.as_str()).collect();
      fields.sort();
      s.push_str(", fields: ");
      s.push_str(&fields.join(", "));
    }

    if let Some(ref wrapped) = self.wrapped {
      s.push_str(", ");
      s.push_str(&wrapped.to_string());
    }

    if s.len() > MAX_ERROR_LENGTH {
      s.truncate(MAX_ERROR_LENGTH);
      s.push_str("...");
    }

    s
  }
}

impl fmt::Display for AppError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.error_string())
  }
}

impl Error for AppError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    self.wrapped.as_ref().map(|e| e.as_ref() as &(dyn Error + 'static))
  }
}

/// Infrastructure failure during process assembly (config, database init).
#[derive(Debug, Display)]
#[display("InternalError: {} {} {}", temp, msg, path)]
pub struct InternalError {
  pub temp: bool,
  pub err: BoxedErr,
  pub msg: String,
  pub path: String,
}

impl Error for InternalError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    Some(&*self.err)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_error_string_contains_kind_and_path() {
    let err = AppError::not_found("storefront.controller.product_details", "no such product");
    let s = err.to_string();
    assert!(s.contains("not_found"));
    assert!(s.contains("storefront.controller.product_details"));
    assert!(s.contains("no such product"));
  }

  #[test]
  fn test_field_errors_sorted_in_message() {
    let fields = HashMap::from([
      ("price".to_string(), "required".to_string()),
      ("name".to_string(), "required".to_string()),
    ]);
    let err = AppError::fields("storefront.models.product_input_is_valid", fields);
    assert_eq!(err.kind, ErrorKind::Validation);
    assert!(err.to_string().contains("fields: name, price"));
  }
}
