//! User domain model.
//!
//! Users are owned by a separate service; this crate never creates,
//! updates, or deletes them. The field set mirrors what that service
//! stores so membership queries can return full profiles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub birth_date: DateTime<Utc>,
    pub is_admin: bool,
    pub is_blocked: bool,
    pub avatar_url: String,
    /// Argon2id hash managed by the user service. Never serialized out.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
}
