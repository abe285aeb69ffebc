use chrono::{SecondsFormat, Utc};

/// Current time as an ISO-8601 UTC string, e.g. `2025-04-24T08:15:25.123456Z`.
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Length of `content` in Unicode scalar values, not bytes.
pub fn char_count(content: &str) -> usize {
    content.chars().count()
}
