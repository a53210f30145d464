//! In-memory user repository implementation

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::user::{
    require_non_empty, require_valid_email, NewUser, User, UserField, UserId, UserPatch,
    UserRepository,
};
use crate::domain::DomainError;
use crate::infrastructure::observability::set_user_count;

/// Users plus the identity counter, guarded together
#[derive(Debug)]
struct UserTable {
    users: Vec<User>,
    next_id: UserId,
}

impl UserTable {
    fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: UserId::new(1),
        }
    }

    fn position(&self, id: UserId) -> Option<usize> {
        self.users.iter().position(|u| u.id() == id)
    }

    /// Exact, case-sensitive match against every user except `exclude`
    fn email_taken(&self, email: &str, exclude: Option<UserId>) -> bool {
        self.users
            .iter()
            .any(|u| u.email() == email && Some(u.id()) != exclude)
    }

    fn allocate_id(&mut self) -> UserId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }
}

/// In-memory implementation of UserRepository
///
/// A single lock covers the collection and the ID counter so that the
/// uniqueness scan and the write it guards happen as one unit.
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<UserTable>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(UserTable::new())),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn user_not_found(id: UserId) -> DomainError {
    DomainError::not_found(format!("User with ID {} not found", id))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let table = self.table.read().await;
        Ok(table.users.clone())
    }

    async fn get(&self, id: UserId) -> Result<User, DomainError> {
        let table = self.table.read().await;

        table
            .users
            .iter()
            .find(|u| u.id() == id)
            .cloned()
            .ok_or_else(|| user_not_found(id))
    }

    async fn create(&self, new_user: NewUser) -> Result<User, DomainError> {
        require_non_empty(UserField::Name, &new_user.name)?;
        require_non_empty(UserField::Email, &new_user.email)?;
        require_non_empty(UserField::Department, &new_user.department)?;
        require_valid_email(&new_user.email)?;

        let mut table = self.table.write().await;

        if table.email_taken(&new_user.email, None) {
            return Err(DomainError::duplicate_email(new_user.email));
        }

        let id = table.allocate_id();
        let user = User::new(id, new_user);
        table.users.push(user.clone());
        set_user_count(table.users.len());

        debug!(user_id = %id, "Stored new user");
        Ok(user)
    }

    async fn update(&self, id: UserId, patch: UserPatch) -> Result<User, DomainError> {
        let mut table = self.table.write().await;

        let position = table.position(id).ok_or_else(|| user_not_found(id))?;

        // Every check runs before the first write.
        if let Some(email) = patch.email_change() {
            require_valid_email(email)?;

            if table.email_taken(email, Some(id)) {
                return Err(DomainError::duplicate_email(email));
            }
        }

        let user = &mut table.users[position];
        user.apply(patch);

        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> Result<(), DomainError> {
        let mut table = self.table.write().await;

        let position = table.position(id).ok_or_else(|| user_not_found(id))?;
        table.users.remove(position);
        set_user_count(table.users.len());

        debug!(user_id = %id, "Removed user");
        Ok(())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let table = self.table.read().await;
        Ok(table.users.len())
    }
}
