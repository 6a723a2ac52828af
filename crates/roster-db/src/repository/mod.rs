//! SurrealDB repository implementations.

mod group;
mod membership;
mod user;

pub use group::SurrealGroupRepository;
pub use membership::SurrealMembershipRepository;
pub use user::SurrealUserRepository;
