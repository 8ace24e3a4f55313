use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bookable candidate interval, computed on demand and never persisted.
/// Half-open: `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}
