use chrono::NaiveDateTime;

/// Current UTC timestamp, timezone-free, as stored in the database.
pub fn now() -> NaiveDateTime {
    chrono::Utc::now().naive_utc()
}
