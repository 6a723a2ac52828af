//! Group domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named collection of users. Membership is materialized through the
/// membership edge set, never embedded in the group record itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Supplied by the caller at creation and immutable afterwards.
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGroup {
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Partial update input. `None` leaves the stored field untouched; a field
/// set to an empty string is applied as-is.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateGroup {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdateGroup {
    /// True when no field is present, i.e. the update is a no-op.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}
