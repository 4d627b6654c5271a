/// Order identifiers are positive integers assigned sequentially.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Storage encoding for timestamps, matching the existing sheet data.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
