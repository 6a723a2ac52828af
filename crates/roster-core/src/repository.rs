//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. The storage engine is not assumed
//! to support relational joins: membership queries are served by fetching
//! edge rows by one foreign key and then fetching the opposite record set
//! by the projected id set (`get_by_ids`).

use uuid::Uuid;

use crate::error::RosterResult;
use crate::models::{
    group::{CreateGroup, Group, UpdateGroup},
    membership::Membership,
    user::User,
};

pub trait GroupRepository: Send + Sync {
    /// Generate a fresh id and persist a new group record.
    fn create(&self, input: CreateGroup) -> impl Future<Output = RosterResult<Group>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = RosterResult<Group>> + Send;
    /// Fetch every group whose id is in `ids`. Ids with no matching row are
    /// silently absent from the result.
    fn get_by_ids(&self, ids: &[Uuid]) -> impl Future<Output = RosterResult<Vec<Group>>> + Send;
    fn update(
        &self,
        id: Uuid,
        input: UpdateGroup,
    ) -> impl Future<Output = RosterResult<Group>> + Send;
    /// Remove the group record only. Membership edges are not touched.
    /// Fails with NotFound when no row matched, including repeat deletes.
    fn delete(&self, id: Uuid) -> impl Future<Output = RosterResult<()>> + Send;
    fn list(&self) -> impl Future<Output = RosterResult<Vec<Group>>> + Send;
}

pub trait MembershipRepository: Send + Sync {
    /// Generate a fresh edge id and persist one membership row.
    fn create(
        &self,
        group_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = RosterResult<Membership>> + Send;
    fn list_by_group(
        &self,
        group_id: Uuid,
    ) -> impl Future<Output = RosterResult<Vec<Membership>>> + Send;
    fn list_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = RosterResult<Vec<Membership>>> + Send;
}

/// Read-only access to the externally-owned user record set.
pub trait UserRepository: Send + Sync {
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = RosterResult<User>> + Send;
    /// Fetch every user whose id is in `ids`; dangling ids yield no row.
    fn get_by_ids(&self, ids: &[Uuid]) -> impl Future<Output = RosterResult<Vec<User>>> + Send;
}
