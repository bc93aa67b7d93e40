use chrono::{DateTime, Utc};

/// Source of "now" for derived fields (timestamp ids, creation dates).
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
