//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without behavior beyond small
//! predicates; creation inputs use separate `New*` structs.

pub mod link;
pub mod user;

pub use link::{Link, NewLink};
pub use user::User;
