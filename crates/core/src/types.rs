/// Database primary keys for generated rows are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar day in UTC, used to bucket trend data.
pub type Date = chrono::NaiveDate;
