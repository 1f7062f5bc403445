//! Conversion of Chrome's stored timestamps to local time.

use chrono::{DateTime, Local, Utc};

/// Seconds between the WebKit epoch (1601-01-01) and the Unix epoch.
pub const WEBKIT_TO_UNIX_SECONDS: i64 = 11_644_473_600;

/// Convert a WebKit-epoch microsecond count to local time.
///
/// Chrome stores `last_visit_time` as microseconds since
/// 1601-01-01T00:00:00 UTC. Returns `None` for values chrono cannot
/// represent.
pub fn webkit_to_local(microseconds: i64) -> Option<DateTime<Local>> {
    let secs = microseconds.div_euclid(1_000_000) - WEBKIT_TO_UNIX_SECONDS;
    let nsecs = (microseconds.rem_euclid(1_000_000) as u32) * 1_000;
    DateTime::<Utc>::from_timestamp(secs, nsecs).map(|utc| utc.with_timezone(&Local))
}

/// Inverse of [`webkit_to_local`]; fixtures use this to build stored
/// timestamps from local calendar times.
pub fn local_to_webkit(local: &DateTime<Local>) -> i64 {
    (local.timestamp() + WEBKIT_TO_UNIX_SECONDS) * 1_000_000
        + i64::from(local.timestamp_subsec_micros())
}

/// Human-readable visit time, e.g. "2024-01-15 10:00:00".
pub fn display_time(local: &DateTime<Local>) -> String {
    local.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Date bucket used for grouping, e.g. "January 15 2024".
///
/// Derived from the same instant as [`display_time`] so the two can never
/// disagree about which day a visit belongs to.
pub fn date_key(local: &DateTime<Local>) -> String {
    local.format("%B %d %Y").to_string()
}
