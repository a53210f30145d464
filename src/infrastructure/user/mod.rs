//! User infrastructure module
//!
//! This module provides the in-memory user store and the user service
//! that the HTTP layer talks to.

mod repository;
mod service;

pub use repository::InMemoryUserRepository;
pub use service::{CreateUserRequest, UpdateUserRequest, UserService};
