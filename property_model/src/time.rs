//! Millisecond timestamps

use chrono::Utc;

/// Current time in epoch milliseconds. `0` is reserved for "unset".
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
