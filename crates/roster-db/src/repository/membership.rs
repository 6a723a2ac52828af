//! SurrealDB implementation of [`MembershipRepository`].
//!
//! Membership edges live in a plain table keyed by two stringified UUIDs.
//! Nothing here enforces uniqueness of the `(group_id, user_id)` pair, and
//! nothing validates that either side still exists — a dangling edge is
//! simply skipped when the opposite record set is fetched.

use roster_core::error::RosterResult;
use roster_core::models::membership::Membership;
use roster_core::repository::MembershipRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

#[derive(Debug, SurrealValue)]
struct MembershipRow {
    group_id: String,
    user_id: String,
}

#[derive(Debug, SurrealValue)]
struct MembershipRowWithId {
    record_id: String,
    group_id: String,
    user_id: String,
}

impl MembershipRowWithId {
    fn try_into_membership(self) -> Result<Membership, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Query(format!("invalid UUID: {e}")))?;
        let group_id = Uuid::parse_str(&self.group_id)
            .map_err(|e| DbError::Query(format!("invalid group UUID: {e}")))?;
        let user_id = Uuid::parse_str(&self.user_id)
            .map_err(|e| DbError::Query(format!("invalid user UUID: {e}")))?;
        Ok(Membership {
            id,
            group_id,
            user_id,
        })
    }
}

/// SurrealDB implementation of the Membership repository.
#[derive(Clone)]
pub struct SurrealMembershipRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealMembershipRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> MembershipRepository for SurrealMembershipRepository<C> {
    async fn create(&self, group_id: Uuid, user_id: Uuid) -> RosterResult<Membership> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('membership', $id) SET \
                 group_id = $group_id, user_id = $user_id",
            )
            .bind(("id", id_str.clone()))
            .bind(("group_id", group_id.to_string()))
            .bind(("user_id", user_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<MembershipRow> = result.take(0).map_err(DbError::from)?;
        if rows.is_empty() {
            return Err(DbError::NotFound {
                entity: "membership".into(),
                id: id_str,
            }
            .into());
        }

        Ok(Membership {
            id,
            group_id,
            user_id,
        })
    }

    async fn list_by_group(&self, group_id: Uuid) -> RosterResult<Vec<Membership>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM membership \
                 WHERE group_id = $group_id",
            )
            .bind(("group_id", group_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<MembershipRowWithId> = result.take(0).map_err(DbError::from)?;

        let memberships = rows
            .into_iter()
            .map(|row| row.try_into_membership())
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(memberships)
    }

    async fn list_by_user(&self, user_id: Uuid) -> RosterResult<Vec<Membership>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM membership \
                 WHERE user_id = $user_id",
            )
            .bind(("user_id", user_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<MembershipRowWithId> = result.take(0).map_err(DbError::from)?;

        let memberships = rows
            .into_iter()
            .map(|row| row.try_into_membership())
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(memberships)
    }
}
