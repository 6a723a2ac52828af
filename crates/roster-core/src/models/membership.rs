//! Membership edge model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One membership edge linking a group to a user. Carries no timestamps,
/// and nothing prevents two edges with the same `(group_id, user_id)` pair;
/// reads collapse duplicates by projecting an id set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Membership {
    pub id: Uuid,
    pub group_id: Uuid,
    pub user_id: Uuid,
}
