use std::error::Error;
use std::fmt;

use regex::Regex;
use sqlx::error::Error as SqlxError;

#[derive(Debug, Clone, PartialEq)]
pub enum DBErrorType {
  NoRows,
  UniqueViolation,
  ForeignKeyViolation,
  NotNullViolation,
  Connection,
  Internal,
}

impl fmt::Display for DBErrorType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DBErrorType::NoRows => write!(f, "no_rows"),
      DBErrorType::UniqueViolation => write!(f, "unique_violation"),
      DBErrorType::ForeignKeyViolation => write!(f, "foreign_key_violation"),
      DBErrorType::NotNullViolation => write!(f, "not_null_violation"),
      DBErrorType::Connection => write!(f, "connection_exception"),
      DBErrorType::Internal => write!(f, "internal_error"),
    }
  }
}

#[derive(Debug)]
pub struct DBError {
  pub err_type: DBErrorType,
  pub err: Option<Box<dyn Error + Send + Sync>>,
  pub msg: String,
  pub path: String,
  pub details: String,
}

impl fmt::Display for DBError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut parts = Vec::new();

    if !self.path.is_empty() {
      parts.push(format!("path: {}", self.path));
    }

    parts.push(format!("err_type: {}", self.err_type));

    if !self.msg.is_empty() {
      parts.push(format!("msg: {}", self.msg));
    }

    if !self.details.is_empty() {
      parts.push(format!("details: {}", self.details));
    }

    if let Some(ref err) = self.err {
      parts.push(format!("err: {}", err));
    }

    write!(f, "{}", parts.join(", "))
  }
}

impl Error for DBError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    self.err.as_ref().map(|e| &**e as &dyn Error)
  }
}

impl DBError {
  pub fn new(
    err_type: DBErrorType,
    err: Option<Box<dyn Error + Send + Sync>>,
    msg: impl Into<String>,
    path: impl Into<String>,
    details: impl Into<String>,
  ) -> Self {
    Self { err_type, err, msg: msg.into(), path: path.into(), details: details.into() }
  }
}

pub fn handle_db_error(err: SqlxError, path: &str) -> DBError {
  match err {
    SqlxError::Database(db_err) => {
      // SQLite reports extended result codes as strings
      let code = db_err.code().map(|c| c.into_owned()).unwrap_or_default();
      let message = db_err.message().to_string();

      let (err_type, msg) = match code.as_str() {
        // SQLITE_CONSTRAINT_UNIQUE / SQLITE_CONSTRAINT_PRIMARYKEY
        "2067" | "1555" => (DBErrorType::UniqueViolation, parse_duplicate_field(&message)),
        // SQLITE_CONSTRAINT_FOREIGNKEY
        "787" => (DBErrorType::ForeignKeyViolation, "referenced record is not found".to_string()),
        // SQLITE_CONSTRAINT_NOTNULL
        "1299" => (DBErrorType::NotNullViolation, format!("{} cannot be null", parse_column(&message))),
        // SQLITE_BUSY / SQLITE_LOCKED / SQLITE_CANTOPEN
        "5" | "6" | "14" => (DBErrorType::Connection, "database is unavailable".to_string()),
        _ => (DBErrorType::Internal, "database error".to_string()),
      };

      DBError::new(err_type, Some(Box::new(SqlxError::Database(db_err))), msg, path, message)
    }

    SqlxError::RowNotFound => DBError::new(
      DBErrorType::NoRows,
      Some(Box::new(SqlxError::RowNotFound)),
      "the requested resource is not found",
      path,
      "",
    ),

    SqlxError::PoolTimedOut | SqlxError::PoolClosed | SqlxError::Io(_) => DBError::new(
      DBErrorType::Connection,
      Some(Box::new(err)),
      "database is unavailable",
      path,
      "",
    ),

    _ => DBError::new(DBErrorType::Internal, Some(Box::new(err)), "database error", path, ""),
  }
}

// Extract the duplicate column from the driver message
// Example: "UNIQUE constraint failed: products.slug"
fn parse_duplicate_field(message: &str) -> String {
  let re = Regex::new(r"UNIQUE constraint failed: \w+\.(\w+)").unwrap();
  if let Some(captures) = re.captures(message) {
    if let Some(match_) = captures.get(1) {
      return format!("{} already exists", match_.as_str());
    }
  }
  "value already exists".to_string()
}

// Extract the offending column name
// Example: "NOT NULL constraint failed: products.name"
fn parse_column(message: &str) -> String {
  let re = Regex::new(r"constraint failed: \w+\.(\w+)").unwrap();
  if let Some(captures) = re.captures(message) {
    if let Some(match_) = captures.get(1) {
      return match_.as_str().to_string();
    }
  }
  "field".to_string()
}
