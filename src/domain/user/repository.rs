//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{NewUser, User, UserId, UserPatch};
use crate::domain::DomainError;

/// Owner of the user collection.
///
/// Implementations assign identities and enforce email uniqueness; the
/// uniqueness check and the mutation it guards must be atomic.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Snapshot of all users in insertion order
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Get a user by ID, failing with `NotFound`
    async fn get(&self, id: UserId) -> Result<User, DomainError>;

    /// Validate, assign an ID and timestamp, and store a new user
    async fn create(&self, new_user: NewUser) -> Result<User, DomainError>;

    /// Apply a partial update to an existing user
    async fn update(&self, id: UserId, patch: UserPatch) -> Result<User, DomainError>;

    /// Remove a user permanently
    async fn delete(&self, id: UserId) -> Result<(), DomainError>;

    /// Number of stored users
    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.list().await?.len())
    }
}
