use chrono::Utc;

/// The current time in whole seconds since the Unix epoch.
pub fn now_unix() -> i64 {
    Utc::now().timestamp()
}

/// `days` days before now, in Unix seconds. Used when back-dating fixtures.
pub fn days_ago(days: i64) -> i64 {
    now_unix() - days * 24 * 60 * 60
}
