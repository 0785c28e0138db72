//! Repository trait definitions for the domain layer.
//!
//! Traits define the persistence contract; PostgreSQL implementations live
//! in `crate::infrastructure::persistence`, and `mockall` mocks back the
//! service unit tests.

pub mod link_repository;
pub mod user_repository;

pub use link_repository::{LinkRepository, LinkStats};
pub use user_repository::UserRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
