use chrono::Utc;

/// Current wall-clock time in milliseconds since the epoch.
pub fn time_get_millis() -> i64 {
  Utc::now().timestamp_millis()
}
