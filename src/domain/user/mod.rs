//! User domain
//!
//! This module provides domain types and traits for user records,
//! including the user entity, field validation, and the repository trait.

mod entity;
mod repository;
mod validation;

pub use entity::{NewUser, User, UserId, UserPatch};
pub use repository::UserRepository;
pub use validation::{require_non_empty, require_valid_email, UserField, UserValidationError};
