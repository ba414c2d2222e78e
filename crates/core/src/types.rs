/// Post and user identifiers are opaque strings issued by the server.
pub type PostId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
