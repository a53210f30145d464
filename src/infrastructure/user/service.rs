//! User service for record management

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::domain::user::{NewUser, User, UserId, UserPatch, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::observability::{record_user_operation, OperationOutcome};

/// Request for creating a new user; absent fields count as empty
#[derive(Debug, Clone, Default)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        NewUser {
            name: request.name.unwrap_or_default(),
            email: request.email.unwrap_or_default(),
            department: request.department.unwrap_or_default(),
        }
    }
}

/// Request for updating a user; only supplied, non-empty fields change
#[derive(Debug, Clone, Default)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(request: UpdateUserRequest) -> Self {
        UserPatch {
            name: request.name,
            email: request.email,
            department: request.department,
        }
    }
}

/// User service wrapping the repository with logging and metrics
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// List all users
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.repository.list().await
    }

    /// Get a user by ID
    #[instrument(name = "users.get", skip(self), fields(user_id = %id))]
    pub async fn get(&self, id: UserId) -> Result<User, DomainError> {
        self.repository.get(id).await
    }

    /// Create a new user
    #[instrument(name = "users.create", skip(self, request))]
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        let result = self.repository.create(request.into()).await;

        match &result {
            Ok(user) => {
                info!(user_id = %user.id(), "Created user");
                record_user_operation("create", OperationOutcome::Success);
            }
            Err(e) => {
                debug!(error = %e, "User creation rejected");
                record_user_operation("create", failure_outcome(e));
            }
        }

        result
    }

    /// Apply a partial update to a user
    #[instrument(name = "users.update", skip(self, request), fields(user_id = %id))]
    pub async fn update(&self, id: UserId, request: UpdateUserRequest) -> Result<User, DomainError> {
        let result = self.repository.update(id, request.into()).await;

        match &result {
            Ok(_) => {
                info!("Updated user");
                record_user_operation("update", OperationOutcome::Success);
            }
            Err(e) => {
                debug!(error = %e, "User update rejected");
                record_user_operation("update", failure_outcome(e));
            }
        }

        result
    }

    /// Delete a user
    #[instrument(name = "users.delete", skip(self), fields(user_id = %id))]
    pub async fn delete(&self, id: UserId) -> Result<(), DomainError> {
        let result = self.repository.delete(id).await;

        match &result {
            Ok(()) => {
                info!("Deleted user");
                record_user_operation("delete", OperationOutcome::Success);
            }
            Err(e) => {
                debug!(error = %e, "User deletion rejected");
                record_user_operation("delete", failure_outcome(e));
            }
        }

        result
    }
}

fn failure_outcome(error: &DomainError) -> OperationOutcome {
    if error.is_client_error() {
        OperationOutcome::Rejected
    } else {
        OperationOutcome::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::infrastructure::observability::render_with_local_recorder;
    use crate::infrastructure::user::repository::InMemoryUserRepository;

    #[derive(Debug)]
    struct BrokenRepository;

    #[async_trait]
    impl UserRepository for BrokenRepository {
        async fn list(&self) -> Result<Vec<User>, DomainError> {
            Err(DomainError::internal("table poisoned"))
        }

        async fn get(&self, _id: UserId) -> Result<User, DomainError> {
            Err(DomainError::internal("table poisoned"))
        }

        async fn create(&self, _new_user: NewUser) -> Result<User, DomainError> {
            Err(DomainError::internal("table poisoned"))
        }

        async fn update(&self, _id: UserId, _patch: UserPatch) -> Result<User, DomainError> {
            Err(DomainError::internal("table poisoned"))
        }

        async fn delete(&self, _id: UserId) -> Result<(), DomainError> {
            Err(DomainError::internal("table poisoned"))
        }
    }

    fn create_service() -> UserService<InMemoryUserRepository> {
        UserService::new(Arc::new(InMemoryUserRepository::new()))
    }

    fn make_request(name: &str, email: &str, department: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            department: Some(department.to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_user() {
        let service = create_service();

        let user = service
            .create(make_request("Alice", "alice@x.com", "Eng"))
            .await
            .unwrap();

        assert_eq!(user.id(), UserId::new(1));
        assert_eq!(user.name(), "Alice");
    }

    #[tokio::test]
    async fn test_absent_fields_are_missing() {
        let service = create_service();

        let request = CreateUserRequest {
            name: Some("Alice".to_string()),
            email: None,
            department: Some("Eng".to_string()),
        };

        let err = service.create(request).await.unwrap_err();
        assert_eq!(err, DomainError::missing_field("email", "Email is required"));
    }

    #[tokio::test]
    async fn test_update_with_absent_fields() {
        let service = create_service();
        service
            .create(make_request("Alice", "alice@x.com", "Eng"))
            .await
            .unwrap();

        let request = UpdateUserRequest {
            department: Some("Ops".to_string()),
            ..Default::default()
        };

        let updated = service.update(UserId::new(1), request).await.unwrap();
        assert_eq!(updated.department(), "Ops");
        assert_eq!(updated.email(), "alice@x.com");
    }

    #[tokio::test]
    async fn test_scenario() {
        let service = create_service();

        let alice = service
            .create(make_request("Alice", "alice@x.com", "Eng"))
            .await
            .unwrap();
        assert_eq!(alice.id().value(), 1);

        let bob = service
            .create(make_request("Bob", "bob@x.com", "Sales"))
            .await
            .unwrap();
        assert_eq!(bob.id().value(), 2);

        let err = service
            .create(make_request("Carl", "alice@x.com", "HR"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::DuplicateEmail { .. }));
        assert_eq!(service.list().await.unwrap().len(), 2);

        let request = UpdateUserRequest {
            department: Some("Ops".to_string()),
            ..Default::default()
        };
        let updated = service.update(UserId::new(1), request).await.unwrap();
        assert_eq!(updated.department(), "Ops");
        assert_eq!(updated.email(), "alice@x.com");

        service.delete(UserId::new(2)).await.unwrap();
        assert!(matches!(
            service.get(UserId::new(2)).await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(matches!(
            service.get(UserId::new(99)).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[test]
    fn test_store_faults_are_counted_as_errors() {
        let (_, rendered) = render_with_local_recorder(async {
            let service = UserService::new(Arc::new(BrokenRepository));
            let _ = service.create(make_request("Alice", "alice@x.com", "Eng")).await;
            let _ = service.delete(UserId::new(1)).await;
        });

        assert!(rendered.contains(r#"outcome="error""#));
        assert!(!rendered.contains(r#"outcome="rejected""#));
    }

    #[test]
    fn test_validation_failures_are_counted_as_rejected() {
        let (_, rendered) = render_with_local_recorder(async {
            let service = create_service();
            let _ = service.create(make_request("Alice", "bogus", "Eng")).await;
            let _ = service.delete(UserId::new(42)).await;
        });

        assert!(rendered.contains(r#"outcome="rejected""#));
        assert!(!rendered.contains(r#"outcome="error""#));
    }

    #[test]
    fn test_failure_outcome() {
        assert_eq!(
            failure_outcome(&DomainError::duplicate_email("a@x.com")),
            OperationOutcome::Rejected
        );
        assert_eq!(
            failure_outcome(&DomainError::internal("boom")),
            OperationOutcome::Error
        );
    }
}
