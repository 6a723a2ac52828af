//! Shared application state.

use std::sync::Arc;

use roster_db::repository::{
    SurrealGroupRepository, SurrealMembershipRepository, SurrealUserRepository,
};
use roster_groups::GroupService;
use surrealdb::{Connection, Surreal};

/// The group service wired to SurrealDB-backed repositories.
pub type SurrealGroupService<C> = GroupService<
    SurrealGroupRepository<C>,
    SurrealMembershipRepository<C>,
    SurrealUserRepository<C>,
>;

/// Application state shared by all handlers. Generic over the connection
/// type so that tests can run against the in-memory engine.
pub struct AppState<C: Connection> {
    pub service: Arc<SurrealGroupService<C>>,
}

impl<C: Connection> AppState<C> {
    pub fn new(db: Surreal<C>) -> Self {
        let service = GroupService::new(
            SurrealGroupRepository::new(db.clone()),
            SurrealMembershipRepository::new(db.clone()),
            SurrealUserRepository::new(db),
        );
        Self {
            service: Arc::new(service),
        }
    }
}

impl<C: Connection> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}
