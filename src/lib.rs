//! User Registry API
//!
//! An in-memory registry of user records served over HTTP:
//! - Integer identities assigned in creation order and never reused
//! - Email uniqueness enforced atomically with every write
//! - Partial updates where absent or empty fields are left unchanged

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use self::config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::user::{InMemoryUserRepository, UserService};

/// Build the application state around a fresh, empty user store
pub fn create_app_state() -> AppState {
    let repository = Arc::new(InMemoryUserRepository::new());
    let user_service = Arc::new(UserService::new(repository));

    tracing::debug!("User store initialized");

    AppState::new(user_service)
}
