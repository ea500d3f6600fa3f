//! Time related utils.

use chrono::Utc;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Timestamp format used by signed requests: "2012-04-18T14:03:05Z"
const TIMESTAMP: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into timestamp with second precision: `2012-04-18T14:03:05Z`
///
/// Fractional seconds are dropped and the `Z` suffix is literal.
pub fn format_timestamp(t: DateTime) -> String {
    t.format(TIMESTAMP).to_string()
}
