// Shared value helpers.
//
// Timestamps
// - Domain values are epoch milliseconds (i64). Only transports render them as RFC 3339.

use chrono::{DateTime, SecondsFormat, Utc};

pub type EpochMillis = i64;

pub fn now_millis() -> EpochMillis {
    Utc::now().timestamp_millis()
}

/// Renders epoch milliseconds as an RFC 3339 UTC timestamp with millisecond precision.
/// Values outside chrono's range fall back to the epoch.
pub fn format_rfc3339(millis: EpochMillis) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .unwrap_or(DateTime::UNIX_EPOCH)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}
