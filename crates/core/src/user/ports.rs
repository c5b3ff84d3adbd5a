//! Port interfaces for user record management

use chrono::Utc;
use parking_lot::Mutex;

/// Source of fresh record ids
pub trait IdSource: Send + Sync {
    /// A new id, distinct from every id this source returned before.
    fn next_id(&self) -> String;
}

/// Ids from the creation time in Unix milliseconds
///
/// Two calls within the same millisecond (or across a clock step back) get
/// consecutive values, so ids from one source never repeat.
#[derive(Debug, Default)]
pub struct TimestampIdSource {
    last: Mutex<i64>,
}

impl TimestampIdSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for TimestampIdSource {
    fn next_id(&self) -> String {
        let now = Utc::now().timestamp_millis();
        let mut last = self.last.lock();
        let id = now.max(*last + 1);
        *last = id;
        id.to_string()
    }
}
