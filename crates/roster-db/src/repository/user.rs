//! SurrealDB implementation of [`UserRepository`].
//!
//! Read-only: user records are written by the user service, never by this
//! one. The queries here only serve membership resolution.

use chrono::{DateTime, Utc};
use roster_core::error::RosterResult;
use roster_core::models::user::User;
use roster_core::repository::UserRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct UserRow {
    first_name: String,
    last_name: String,
    username: String,
    email: String,
    phone: String,
    birth_date: DateTime<Utc>,
    is_admin: bool,
    is_blocked: bool,
    avatar_url: String,
    password_hash: String,
}

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct UserRowWithId {
    record_id: String,
    first_name: String,
    last_name: String,
    username: String,
    email: String,
    phone: String,
    birth_date: DateTime<Utc>,
    is_admin: bool,
    is_blocked: bool,
    avatar_url: String,
    password_hash: String,
}

impl UserRow {
    fn into_user(self, id: Uuid) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            username: self.username,
            email: self.email,
            phone: self.phone,
            birth_date: self.birth_date,
            is_admin: self.is_admin,
            is_blocked: self.is_blocked,
            avatar_url: self.avatar_url,
            password_hash: self.password_hash,
        }
    }
}

impl UserRowWithId {
    fn try_into_user(self) -> Result<User, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Query(format!("invalid UUID: {e}")))?;
        Ok(User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            username: self.username,
            email: self.email,
            phone: self.phone,
            birth_date: self.birth_date,
            is_admin: self.is_admin,
            is_blocked: self.is_blocked,
            avatar_url: self.avatar_url,
            password_hash: self.password_hash,
        })
    }
}

/// SurrealDB implementation of the read-only User repository.
#[derive(Clone)]
pub struct SurrealUserRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealUserRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> UserRepository for SurrealUserRepository<C> {
    async fn get_by_id(&self, id: Uuid) -> RosterResult<User> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query("SELECT * FROM type::record('user', $id)")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<UserRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "user".into(),
            id: id_str,
        })?;

        Ok(row.into_user(id))
    }

    async fn get_by_ids(&self, ids: &[Uuid]) -> RosterResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let id_strs: Vec<String> = ids.iter().map(|i| i.to_string()).collect();

        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM user \
                 WHERE meta::id(id) IN $ids",
            )
            .bind(("ids", id_strs))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<UserRowWithId> = result.take(0).map_err(DbError::from)?;

        let users = rows
            .into_iter()
            .map(|row| row.try_into_user())
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(users)
    }
}
