//! Group service — lifecycle orchestration and membership resolution.

use std::collections::HashSet;

use roster_core::error::RosterResult;
use roster_core::models::group::{CreateGroup, Group, UpdateGroup};
use roster_core::models::user::User;
use roster_core::repository::{GroupRepository, MembershipRepository, UserRepository};
use uuid::Uuid;

use crate::error::GroupsError;

/// Group service.
///
/// Generic over repository implementations so that the domain layer
/// has no dependency on the database crate.
pub struct GroupService<G, M, U>
where
    G: GroupRepository,
    M: MembershipRepository,
    U: UserRepository,
{
    groups: G,
    memberships: M,
    users: U,
}

impl<G, M, U> GroupService<G, M, U>
where
    G: GroupRepository,
    M: MembershipRepository,
    U: UserRepository,
{
    pub fn new(groups: G, memberships: M, users: U) -> Self {
        Self {
            groups,
            memberships,
            users,
        }
    }

    /// Create a group together with its initial member list.
    ///
    /// The group record is written first, then one membership edge per id
    /// in `member_ids`, strictly in the order given. The first edge that
    /// fails aborts the whole operation; there is no compensating delete,
    /// so the group and the edges written before the failure stay behind.
    pub async fn create_with_members(
        &self,
        input: CreateGroup,
        member_ids: &[Uuid],
    ) -> RosterResult<Group> {
        // 1. Persist the group record.
        let group = self.groups.create(input).await?;

        // 2. Attach members one at a time, in sequence.
        for &user_id in member_ids {
            if let Err(source) = self.attach_member(group.id, user_id).await {
                return Err(GroupsError::MemberAttach {
                    group_id: group.id,
                    user_id,
                    source: Box::new(source),
                }
                .into());
            }
        }

        Ok(group)
    }

    /// Write one membership edge after verifying the referenced user
    /// exists. The edge table itself accepts any pair of ids, so an
    /// unknown user has to be caught here.
    async fn attach_member(&self, group_id: Uuid, user_id: Uuid) -> RosterResult<()> {
        self.users.get_by_id(user_id).await?;
        self.memberships.create(group_id, user_id).await?;
        Ok(())
    }

    /// Resolve the users belonging to a group.
    ///
    /// A group with no edges — including an id that matches no group at
    /// all — resolves to an empty list, not an error. An edge pointing at
    /// a user that no longer exists drops out in the second fetch.
    pub async fn members_of(&self, group_id: Uuid) -> RosterResult<Vec<User>> {
        // 1. Fetch the edges for this group.
        let edges = self.memberships.list_by_group(group_id).await?;

        // 2. Project the user id set; duplicate edges collapse here.
        let user_ids = project_ids(edges.iter().map(|m| m.user_id));

        // 3. Fetch the users behind those ids.
        self.users.get_by_ids(&user_ids).await
    }

    /// Resolve the groups a user belongs to. Same policy as
    /// [`Self::members_of`], in the other direction.
    pub async fn groups_of(&self, user_id: Uuid) -> RosterResult<Vec<Group>> {
        let edges = self.memberships.list_by_user(user_id).await?;
        let group_ids = project_ids(edges.iter().map(|m| m.group_id));
        self.groups.get_by_ids(&group_ids).await
    }

    pub async fn get(&self, id: Uuid) -> RosterResult<Group> {
        self.groups.get_by_id(id).await
    }

    pub async fn list(&self) -> RosterResult<Vec<Group>> {
        self.groups.list().await
    }

    /// Apply the fields present in `input`; absent fields are untouched.
    pub async fn update(&self, id: Uuid, input: UpdateGroup) -> RosterResult<Group> {
        self.groups.update(id, input).await
    }

    /// Delete the group record. Membership edges referencing it are left
    /// behind; the resolvers skip them once the record is gone.
    pub async fn delete(&self, id: Uuid) -> RosterResult<()> {
        self.groups.delete(id).await
    }
}

/// Collapse an id sequence into a duplicate-free list, preserving
/// first-seen order.
fn project_ids(ids: impl Iterator<Item = Uuid>) -> Vec<Uuid> {
    let mut seen = HashSet::new();
    ids.filter(|id| seen.insert(*id)).collect()
}
