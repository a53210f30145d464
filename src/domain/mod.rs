//! Domain layer - user records, validation rules, and repository ports

pub mod error;
pub mod user;

pub use error::DomainError;
pub use user::{NewUser, User, UserId, UserPatch, UserRepository};
