use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Catalog entry for a bookable service. The catalog itself is maintained
/// elsewhere; the engine only reads the duration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub duration_minutes: i32,
}
