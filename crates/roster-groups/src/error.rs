//! Group domain error types.

use roster_core::error::RosterError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum GroupsError {
    /// A member could not be attached while creating a group. The group
    /// record and any edges written before this one remain persisted.
    #[error("failed to attach member {user_id} to group {group_id}: {source}")]
    MemberAttach {
        group_id: Uuid,
        user_id: Uuid,
        source: Box<RosterError>,
    },
}

impl From<GroupsError> for RosterError {
    fn from(err: GroupsError) -> Self {
        // Attach failures surface as storage errors regardless of what the
        // underlying cause was: the operation is reported as failed even
        // though the group record itself went through.
        RosterError::Storage(err.to_string())
    }
}
