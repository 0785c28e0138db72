//! Business logic services for the application layer.

pub mod access_guard;
pub mod auth_service;
pub mod link_service;
pub mod password;
pub mod token_service;

pub use access_guard::AccessGuard;
pub use auth_service::AuthService;
pub use link_service::LinkService;
pub use password::PasswordHasher;
pub use token_service::TokenService;
