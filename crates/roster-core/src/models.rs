//! Domain models for ROSTER.
//!
//! Groups are owned by this service. Users are read-only reference data
//! whose lifecycle belongs to the user service; only the fields needed to
//! serve membership queries are modeled here.

pub mod group;
pub mod membership;
pub mod user;
