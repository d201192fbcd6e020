/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Meeting start/end times are wall-clock times of day (no date component).
pub type TimeOfDay = chrono::NaiveTime;
